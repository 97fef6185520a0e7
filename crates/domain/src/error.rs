//! Unified error type for the domain layer
//!
//! Entities, value objects and enumerations only ever fail in two ways: the
//! data handed to them breaks an invariant, or a mutator was asked to apply a
//! value the entity already holds.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A structural or business-rule violation (range, emptiness, duplicates, unknown key)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The requested mutation would not change the entity
    #[error("Idempotent change: {0}")]
    Idempotent(String),
}

impl DomainError {
    /// Creates an invalid data error for invariant violations.
    ///
    /// Use this when a value is outside its allowed range, a required string
    /// is empty, a collection holds duplicates, or a vocabulary key is unknown.
    ///
    /// # Example
    /// ```ignore
    /// if strength > 20 {
    ///     return Err(DomainError::invalid_data("Strength must be between 0 and 20"));
    /// }
    /// ```
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create an idempotent change error
    pub fn idempotent(msg: impl Into<String>) -> Self {
        Self::Idempotent(msg.into())
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData(_))
    }

    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Idempotent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_error() {
        let err = DomainError::invalid_data("name cannot be empty");
        assert!(err.is_invalid_data());
        assert_eq!(err.to_string(), "Invalid data: name cannot be empty");
    }

    #[test]
    fn test_idempotent_error() {
        let err = DomainError::idempotent("strength is unchanged");
        assert!(err.is_idempotent());
        assert!(!err.is_invalid_data());
        assert_eq!(err.to_string(), "Idempotent change: strength is unchanged");
    }
}
