use thiserror::Error;

/// Unified error type for store operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// A record failed one of the store's field checks
    #[error("Check violation on {field}: {message}")]
    CheckViolation { field: String, message: String },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DbError {
    pub fn check_violation(field: &str, message: impl Into<String>) -> Self {
        DbError::CheckViolation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Type alias for store operation results
pub type Result<T> = std::result::Result<T, DbError>;
