use thiserror::Error;

use crate::domain::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized display mode '{value}'")]
pub struct ParseModeError {
    pub value: String,
}

impl ParseModeError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct FormValidationError {
    pub missing: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.wire_key())
        .collect::<Vec<_>>()
        .join(", ")
}
