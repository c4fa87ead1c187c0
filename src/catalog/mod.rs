//! Spreader settings catalog.
//!
//! CHANGELOG:
//! - 10/14/2026 - Initial module structure

pub mod manager;
pub mod types;

pub use manager::{default_catalog_path, CatalogError, CatalogManager, CatalogTotals};
pub use types::{SpreaderBrand, SpreaderModel, SpreaderSetting};
