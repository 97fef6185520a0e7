//! Compendium Engine library.
//!
//! Application layer over `compendium-domain`.
//!
//! ## Structure
//!
//! - `infrastructure/` - repository ports and the in-memory adapter
//! - `services/` - uniqueness checks shared by use cases
//! - `use_cases/` - create, update, delete, get and list per entity, plus the seed importer
//! - `app` - Application composition
//! - `config` - environment configuration for the binary

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod services;
pub mod use_cases;

/// Shared builders and mock setups for unit tests.
#[cfg(test)]
pub(crate) mod test_fixtures;

/// End-to-end tests through `App` against the in-memory adapter.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, Repositories};
pub use config::AppConfig;
