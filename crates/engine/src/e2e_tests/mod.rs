//! End-to-end tests.
//!
//! These run the full `App` (every use case wired to the in-memory
//! repositories) so cross-entity rules are exercised through real adapters
//! instead of mocks.
//!
//! ```bash
//! cargo test -p compendium-engine --lib e2e_tests
//! ```

mod catalog_tests;
mod e2e_helpers;
mod seed_tests;

pub use e2e_helpers::*;
