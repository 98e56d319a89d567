//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only raised where data enters the system (building or loading a catalog).
/// Filtering, grouping and menu resolution normalize their inputs instead of
/// failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A category label outside the closed set of known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Two catalog entries share an identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_offending_value() {
        assert_eq!(
            DomainError::unknown_category("Dairy").to_string(),
            "unknown category: Dairy"
        );
        assert_eq!(
            DomainError::duplicate_id("001").to_string(),
            "duplicate identifier: 001"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
