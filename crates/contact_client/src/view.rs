use shared::domain::{FormSchema, SubmissionStatus};

use crate::controller::SubmissionController;

pub const SUCCESS_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

/// Live-region message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNotice {
    Success(&'static str),
    Error(String),
}

impl FormNotice {
    /// ARIA role of the region: polite status for success, assertive alert for errors.
    pub fn role(&self) -> &'static str {
        match self {
            Self::Success(_) => "status",
            Self::Error(_) => "alert",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) => *text,
            Self::Error(text) => text.as_str(),
        }
    }
}

/// What the contact form should render for its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub status: SubmissionStatus,
    pub inputs_disabled: bool,
    pub submit_disabled: bool,
    pub button_label: &'static str,
    pub button_accessible_label: &'static str,
    pub notice: Option<FormNotice>,
    pub classification_options: Vec<String>,
}

impl ContactFormView {
    pub fn new(status: SubmissionStatus, error_message: Option<&str>, schema: &FormSchema) -> Self {
        let (button_label, button_accessible_label) = match status {
            SubmissionStatus::Pending => ("Sending...", "Sending message, please wait"),
            SubmissionStatus::Succeeded => ("Sent!", "Message sent successfully"),
            SubmissionStatus::Idle | SubmissionStatus::Failed => ("Send Message", "Send message"),
        };
        let notice = match status {
            SubmissionStatus::Succeeded => Some(FormNotice::Success(SUCCESS_NOTICE)),
            SubmissionStatus::Failed => error_message.map(|text| FormNotice::Error(text.to_string())),
            _ => None,
        };

        Self {
            status,
            inputs_disabled: status == SubmissionStatus::Pending,
            submit_disabled: matches!(
                status,
                SubmissionStatus::Pending | SubmissionStatus::Succeeded
            ),
            button_label,
            button_accessible_label,
            notice,
            classification_options: if schema.include_classification {
                schema.classification_options.clone()
            } else {
                Vec::new()
            },
        }
    }

    pub fn from_controller(controller: &SubmissionController) -> Self {
        let error_message = controller.error_message();
        Self::new(
            controller.status(),
            error_message.as_deref(),
            &controller.config().schema,
        )
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
