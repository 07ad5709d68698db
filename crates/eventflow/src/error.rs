//! Error types for eventflow operations.

use thiserror::Error;

use crate::form::ValidationErrors;

#[derive(Error, Debug)]
pub enum EventFlowError {
    /// A date or time string could not be parsed. Nothing downstream ever sees
    /// a half-parsed value.
    #[error("Malformed time input '{input}': {reason}")]
    MalformedTimeInput { input: String, reason: String },

    #[error("Invalid duration: {0} hours")]
    InvalidDuration(f64),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EventFlowError {
    pub(crate) fn malformed(input: &str, reason: impl ToString) -> Self {
        EventFlowError::MalformedTimeInput {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EventFlowError>;
