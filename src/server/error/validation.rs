use thiserror::Error;

/// A field-level validation failure raised by the builder validators.
///
/// Results in a 400 Bad Request carrying both the message and the field name so
/// clients can highlight the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the invalid field as it appears in request payloads.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
