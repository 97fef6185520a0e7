//! Error returned by every use case.

use compendium_domain::{DomainError, UserId};

use crate::infrastructure::ports::RepoError;

/// Use-case failure, one variant per error kind callers act on.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// Structural or business-rule violation, including taken names and
    /// missing referenced records.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The requested change would leave the entity as it is.
    #[error("Idempotent change: {0}")]
    Idempotent(String),

    /// The acting user is unknown.
    #[error("Access denied for user {0}")]
    Access(UserId),

    /// Storage failure that isn't a caller mistake.
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl UseCaseError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Idempotent(_))
    }

    pub fn is_access(&self) -> bool {
        matches!(self, Self::Access(_))
    }
}

impl From<DomainError> for UseCaseError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidData(message) => Self::InvalidData(message),
            DomainError::Idempotent(message) => Self::Idempotent(message),
        }
    }
}

impl From<RepoError> for UseCaseError {
    fn from(error: RepoError) -> Self {
        match error {
            RepoError::ConstraintViolation(message) => Self::InvalidData(message),
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}
