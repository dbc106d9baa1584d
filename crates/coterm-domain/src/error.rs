//! Error types for domain operations

use thiserror::Error;

/// Errors raised by the domain layer
///
/// Every variant signals caller input that was rejected. None of them are
/// transient, so callers should not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument violated a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }
}
