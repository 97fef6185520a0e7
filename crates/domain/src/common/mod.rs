//! Common validation helpers shared by value objects and entities.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **One error kind per failure** - everything here reports `DomainError::InvalidData`,
//!   except [`replace`] which reports `DomainError::Idempotent`

pub mod validation;

pub use validation::{
    ensure_non_empty_list, ensure_range, ensure_unique, ensure_unique_by, replace,
    replace_set,
};
