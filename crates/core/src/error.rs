//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Ageing an inventory never fails; these cover the surfaces around it
/// (fixture parsing, driver configuration).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed fixture or setting).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A caller broke a precondition of an operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
