//! Validation error types

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Identifier is zero or negative
    #[error("{field} id must be positive, got {value}")]
    InvalidId { field: &'static str, value: i64 },
}
