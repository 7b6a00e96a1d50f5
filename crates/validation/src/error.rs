use crate::message::ValidationMessages;

/// Errors returned by the validation crate.
///
/// Individual constraint violations are never errors; they are collected into
/// [`ValidationMessages`]. This type only reports misconfiguration and the final
/// pass/fail outcome of a document.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid validation configuration: {0}")]
    InvalidConfig(String),

    #[error("{root} failed validation with {count} message(s)", count = .messages.len())]
    DocumentInvalid {
        root: String,
        messages: ValidationMessages,
    },
}

impl ValidationError {
    /// The collected messages, if this error reports a failed document.
    pub fn messages(&self) -> Option<&ValidationMessages> {
        match self {
            Self::DocumentInvalid { messages, .. } => Some(messages),
            Self::InvalidConfig(_) => None,
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
