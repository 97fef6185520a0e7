//! Field-level validators.

use std::fmt::Display;

use crate::error::DomainError;

/// Fails unless `min <= value <= max`.
///
/// # Examples
///
/// ```
/// use compendium_domain::common::ensure_range;
///
/// assert!(ensure_range(0u8, 0, 20, "Strength").is_ok());
/// assert!(ensure_range(21u8, 0, 20, "Strength").is_err());
/// ```
pub fn ensure_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), DomainError>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(DomainError::invalid_data(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

/// Fails if any element appears twice.
pub fn ensure_unique<T>(items: &[T], field: &str) -> Result<(), DomainError>
where
    T: PartialEq + Display,
{
    ensure_unique_by(items, |item| item, field)
}

/// Fails if two elements share the same key.
pub fn ensure_unique_by<T, K, F>(items: &[T], key: F, field: &str) -> Result<(), DomainError>
where
    K: PartialEq + Display,
    F: Fn(&T) -> &K,
{
    for (index, item) in items.iter().enumerate() {
        let current = key(item);
        if items[..index].iter().any(|earlier| key(earlier) == current) {
            return Err(DomainError::invalid_data(format!(
                "{} contains duplicate value {}",
                field, current
            )));
        }
    }
    Ok(())
}

pub fn ensure_non_empty_list<T>(items: &[T], field: &str) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::invalid_data(format!(
            "{} must contain at least one value",
            field
        )));
    }
    Ok(())
}

/// Replaces `slot` with `value`, rejecting a no-op change.
///
/// Every entity mutator funnels through here after validating the new value,
/// so redundant updates surface as `DomainError::Idempotent`.
pub fn replace<T: PartialEq>(slot: &mut T, value: T, field: &str) -> Result<(), DomainError> {
    if *slot == value {
        return Err(DomainError::idempotent(format!("{} is unchanged", field)));
    }
    *slot = value;
    Ok(())
}

/// [`replace`] for list fields that hold a set: the same elements in a
/// different order count as unchanged.
pub fn replace_set<T: PartialEq>(
    slot: &mut Vec<T>,
    value: Vec<T>,
    field: &str,
) -> Result<(), DomainError> {
    if same_elements(slot, &value) {
        return Err(DomainError::idempotent(format!("{} is unchanged", field)));
    }
    *slot = value;
    Ok(())
}

fn same_elements<T: PartialEq>(current: &[T], proposed: &[T]) -> bool {
    current.len() == proposed.len()
        && current.iter().all(|item| proposed.contains(item))
        && proposed.iter().all(|item| current.contains(item))
}
