//! Validated string newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits (names only)
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields, in characters
pub const MAX_NAME_LENGTH: usize = 50;

// ============================================================================
// Name
// ============================================================================

/// A validated record name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_data("Name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::invalid_data(format!(
                "Name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Description
// ============================================================================

/// A validated description (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if the description is empty after trimming.
    pub fn new(description: impl Into<String>) -> Result<Self, DomainError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_data("Description cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> String {
        description.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = Name::new("  Plate  ").expect("valid name");
        assert_eq!(name.as_str(), "Plate");
    }

    #[test]
    fn name_rejects_empty() {
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
    }

    #[test]
    fn name_length_boundary() {
        assert!(Name::new("a".repeat(MAX_NAME_LENGTH)).is_ok());
        let err = Name::new("a".repeat(MAX_NAME_LENGTH + 1)).expect_err("too long");
        assert!(err.is_invalid_data());
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(Name::new("ж".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn description_rejects_blank() {
        assert!(Description::new("\n\t").is_err());
        assert_eq!(
            Description::new(" Heavy steel ").expect("valid").as_str(),
            "Heavy steel"
        );
    }

    #[test]
    fn serde_validates() {
        let name: Name = serde_json::from_str("\"Chain mail\"").expect("valid");
        assert_eq!(name, "Chain mail");
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
    }
}
