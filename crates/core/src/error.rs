//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// There is a single kind: every rejected value or unmet precondition is an
/// invalid argument carrying a human-readable reason. Callers decide whether
/// to retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value or precondition was rejected (blank text, out-of-range number,
    /// missing item, duplicate item number).
    #[error("{0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The human-readable reason.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}
