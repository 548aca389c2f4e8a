//! Structured error types for the register.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("validation: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no snag with id {0}")]
    NotFound(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegisterError {
    pub fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
