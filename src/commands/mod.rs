//! Command implementations.
//!
//! CHANGELOG:
//! - 10/14/2026 - Initial module structure

pub mod catalog;
pub mod search;
