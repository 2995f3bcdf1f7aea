use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{FormValidationError, ParseModeError};

/// Preference key under which the display mode is persisted.
pub const THEME_PREFERENCE_KEY: &str = "workout-lab-theme";

pub const DEFAULT_CLASSIFICATION: &str = "General Inquiry";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Literal used both for persistence and as the root class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseModeError::new(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Classification,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Classification,
        FormField::Message,
    ];

    /// Key used in the submitted JSON body.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Classification => "appInterest",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Classification)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// Field layout of one contact form variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub include_classification: bool,
    pub classification_options: Vec<String>,
}

impl FormSchema {
    /// The classification-inclusive form used on the landing page.
    pub fn canonical() -> Self {
        Self {
            include_classification: true,
            classification_options: [
                DEFAULT_CLASSIFICATION,
                "Workout Lab",
                "Vitamin D Tracker",
                "Other",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    pub fn basic() -> Self {
        Self {
            include_classification: false,
            classification_options: Vec::new(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        FormField::ALL
            .into_iter()
            .filter(|field| *field != FormField::Classification || self.include_classification)
    }

    fn default_classification(&self) -> Option<String> {
        self.include_classification.then(|| {
            self.classification_options
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_CLASSIFICATION.to_string())
        })
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::canonical()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub classification: Option<String>,
    pub message: String,
}

impl FormState {
    pub fn initial(schema: &FormSchema) -> Self {
        Self {
            classification: schema.default_classification(),
            ..Self::default()
        }
    }

    /// Writes one field. Classification is ignored when the form has no such field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
            FormField::Classification => {
                if let Some(slot) = self.classification.as_mut() {
                    *slot = value;
                }
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Message => Some(&self.message),
            FormField::Classification => self.classification.as_deref(),
        }
    }

    /// Required fields that are blank after trimming.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| self.get(*field).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    pub fn validate(&self) -> Result<(), FormValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormValidationError { missing })
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
