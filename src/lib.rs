//! lawn-search library
//!
//! Fuzzy product search over a spreader settings catalog, plus the catalog
//! and output plumbing shared with the CLI binary.
//!
//! CHANGELOG:
//! - 10/14/2026 - Initial library structure

pub mod catalog;
pub mod commands;
pub mod fuzzy;
pub mod output;
