//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised synchronously by validating constructors and aggregate methods,
/// always before any state is assigned, so a failed call never leaves a
/// partially-built value behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value is absent, blank or malformed.
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        param: &'static str,
        message: String,
    },

    /// A numeric value is outside its allowed range.
    #[error("argument `{param}` out of range: {message}")]
    OutOfRange {
        param: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn invalid_argument(param: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            message: msg.into(),
        }
    }

    pub fn out_of_range(param: &'static str, msg: impl Into<String>) -> Self {
        Self::OutOfRange {
            param,
            message: msg.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { param, .. } | DomainError::OutOfRange { param, .. } => {
                param
            }
        }
    }
}
