use thiserror::Error;

/// A single offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Everything that can go wrong at the browser boundary.
///
/// All variants are recovered at the controller: the worst observable effect
/// is an unchanged list plus a notice. Nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrowserError {
    /// Fetch rejected or timed out before the server answered.
    #[error("request failed: {0}")]
    Network(String),
    /// Caught client-side before any network call was issued.
    #[error("validation failed")]
    Validation(Vec<FieldIssue>),
    /// Non-success response on a mutation, carrying the server's message
    /// when it sent one.
    #[error("{0}")]
    Server(String),
}

impl BrowserError {
    /// Issues to flag on the form, if this is a validation failure.
    pub fn field_issues(&self) -> &[FieldIssue] {
        match self {
            BrowserError::Validation(issues) => issues,
            _ => &[],
        }
    }
}
