//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is a synchronous input-validation failure raised before any
/// state is mutated, so the caller can always retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor or method argument failed validation.
    #[error("invalid argument `{argument}`: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}
