//! Infrastructure implementations.
//!
//! Port traits plus the in-memory adapter implementing them.

pub mod memory;
pub mod ports;
