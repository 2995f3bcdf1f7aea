use serde::{Deserialize, Serialize};

use crate::domain::FormState;

/// Body POSTed to the contact endpoint. Field order matches the form layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(
        rename = "appInterest",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub app_interest: Option<String>,
    pub message: String,
}

impl From<&FormState> for ContactPayload {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            app_interest: form.classification.clone(),
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
