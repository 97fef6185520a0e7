//! Common checks shared by use cases.
//!
//! Each helper turns a repository answer into the matching `UseCaseError`,
//! so use cases read as a list of preconditions.

use std::fmt::Display;

use compendium_domain::{Name, UserId};

use crate::infrastructure::ports::UserRepo;

use super::error::UseCaseError;

/// Fails with `Access` unless `user_id` is a known user.
pub(crate) async fn authorize(users: &dyn UserRepo, user_id: UserId) -> Result<(), UseCaseError> {
    if users.id_exists(user_id).await? {
        return Ok(());
    }
    tracing::debug!(user_id = %user_id, "Rejected unknown actor");
    Err(UseCaseError::Access(user_id))
}

/// Fails with `NotFound` when the target of an update, delete or get is missing.
pub(crate) fn require_found(
    exists: bool,
    entity_type: &'static str,
    id: impl Display,
) -> Result<(), UseCaseError> {
    if exists {
        Ok(())
    } else {
        Err(UseCaseError::not_found(entity_type, id))
    }
}

/// Fails with `InvalidData` when a referenced record is missing.
pub(crate) fn require_reference(
    exists: bool,
    entity_type: &str,
    id: impl Display,
) -> Result<(), UseCaseError> {
    if exists {
        return Ok(());
    }
    tracing::debug!(entity_type, id = %id, "Rejected missing reference");
    Err(UseCaseError::invalid_data(format!(
        "{} {} does not exist",
        entity_type, id
    )))
}

/// Fails with `InvalidData` when a name (or scoped key) is already taken.
pub(crate) fn require_available(
    available: bool,
    entity_type: &str,
    key: impl Display,
) -> Result<(), UseCaseError> {
    if available {
        return Ok(());
    }
    tracing::debug!(entity_type, key = %key, "Rejected taken name");
    Err(UseCaseError::invalid_data(format!(
        "{} '{}' already exists",
        entity_type, key
    )))
}

/// Fails with `InvalidData` while other records still point at the target.
pub(crate) fn require_unreferenced(
    referrers: usize,
    entity_type: &str,
    id: impl Display,
    referrer_type: &str,
) -> Result<(), UseCaseError> {
    if referrers == 0 {
        return Ok(());
    }
    tracing::debug!(entity_type, id = %id, referrers, referrer_type, "Rejected delete of referenced record");
    Err(UseCaseError::invalid_data(format!(
        "{} {} is still referenced by {} {}",
        entity_type, id, referrers, referrer_type
    )))
}

/// True when `proposed` names something other than `current`.
///
/// Renames to the current name skip the availability check so the entity's
/// own mutator reports the change as idempotent.
pub(crate) fn is_rename(current: &Name, proposed: &str) -> bool {
    current != proposed.trim()
}
