//! Errors raised while building or validating simulation inputs.

/// Errors produced by the domain layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A parameter is missing, malformed or outside its allowed domain.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Wire name of the offending field.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

impl DomainError {
    /// Creates an [`DomainError::InvalidParameter`] error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that caused the error.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}
