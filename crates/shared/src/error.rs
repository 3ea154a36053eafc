//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every error is raised at the call that violates a precondition; nothing in
/// the core recovers or retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A caller-supplied argument is outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A string could not be read as a decimal literal.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl AppError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
        }
    }

    /// Shorthand for an [`AppError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for an [`AppError::InvalidFormat`].
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
