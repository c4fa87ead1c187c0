//! Catalog manager - load spreader brands and settings from JSON.
//!
//! CHANGELOG:
//! - 10/17/2026 - Free/pro brand tiers, parse errors keep their real cause
//! - 10/16/2026 - Added typed CatalogError, flat-array fallback
//! - 10/14/2026 - Initial implementation

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::types::{SpreaderBrand, SpreaderModel, SpreaderSetting};

/// Environment variable that overrides the catalog location.
pub const CATALOG_PATH_ENV: &str = "LAWN_CATALOG_PATH";

/// Brands available without a pro subscription.
pub const FREE_BRAND_IDS: [&str; 3] = ["scotts", "earthway", "lesco"];

/// Whether a brand is in the free tier.
pub fn is_free_brand(brand_id: &str) -> bool {
    FREE_BRAND_IDS.contains(&brand_id)
}

/// Errors that can occur while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Default catalog.json path.
///
/// Tries multiple locations in order:
/// 1. LAWN_CATALOG_PATH env var
/// 2. ~/.lawn-search/catalog.json (if it exists)
/// 3. data/catalog.json bundled with the crate
pub fn default_catalog_path() -> PathBuf {
    resolve_catalog_path(std::env::var_os(CATALOG_PATH_ENV), dirs::home_dir())
}

/// Pick the catalog path from an env override and a home directory.
fn resolve_catalog_path(env_path: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(home) = home {
        let user_path = home.join(".lawn-search").join("catalog.json");
        if user_path.exists() {
            return user_path;
        }
    }

    bundled_catalog_path()
}

/// data/catalog.json shipped with the crate.
pub fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("catalog.json")
}

/// On-disk catalog layout (has "brands" and "settings" keys).
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    brands: Vec<SpreaderBrand>,
    settings: Vec<SpreaderSetting>,
}

/// Counts of catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogTotals {
    pub brands: usize,
    pub models: usize,
    pub settings: usize,
    pub products: usize,
}

/// Read-only spreader catalog.
pub struct CatalogManager {
    brands: Vec<SpreaderBrand>,
    settings: Vec<SpreaderSetting>,
}

impl CatalogManager {
    /// Load the catalog from a JSON file.
    ///
    /// Supports both formats:
    /// - `{"brands": [...], "settings": [...]}`
    /// - `[...]` (flat array of settings, no brands)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manager = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            brands = manager.brands.len(),
            settings = manager.settings.len(),
            "loaded catalog"
        );
        Ok(manager)
    }

    /// Load from the default path.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(default_catalog_path())
    }

    /// Parse a catalog from a JSON string.
    ///
    /// The top-level shape picks the format, so a bad record reports its
    /// own error rather than a format mismatch.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(content).map_err(CatalogError::Parse)?;

        if value.is_array() {
            debug!("catalog is a flat settings array");
            let settings: Vec<SpreaderSetting> =
                serde_json::from_value(value).map_err(CatalogError::Parse)?;
            return Ok(Self::from_parts(Vec::new(), settings));
        }

        let file: CatalogFile = serde_json::from_value(value).map_err(CatalogError::Parse)?;
        Ok(Self::from_parts(file.brands, file.settings))
    }

    pub fn from_parts(brands: Vec<SpreaderBrand>, settings: Vec<SpreaderSetting>) -> Self {
        Self { brands, settings }
    }

    pub fn brands(&self) -> &[SpreaderBrand] {
        &self.brands
    }

    pub fn settings(&self) -> &[SpreaderSetting] {
        &self.settings
    }

    /// One setting per product name, the first in catalog order.
    ///
    /// This is the list product search runs over.
    pub fn unique_products(&self) -> Vec<&SpreaderSetting> {
        let mut seen = HashSet::new();
        self.settings
            .iter()
            .filter(|s| seen.insert(s.product_name.as_str()))
            .collect()
    }

    /// Sorted, deduplicated product names.
    pub fn unique_product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .settings
            .iter()
            .map(|s| s.product_name.as_str())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort_unstable();
        names
    }

    /// Settings whose product name contains `product_name` (case-insensitive).
    pub fn settings_for_product(&self, product_name: &str) -> Vec<&SpreaderSetting> {
        let needle = product_name.to_lowercase();
        self.settings
            .iter()
            .filter(|s| s.product_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Settings for an exact spreader model id.
    pub fn settings_for_model(&self, model_id: &str) -> Vec<&SpreaderSetting> {
        self.settings
            .iter()
            .filter(|s| s.spreader_model_id == model_id)
            .collect()
    }

    /// Brands in the free tier, catalog order.
    pub fn free_brands(&self) -> Vec<&SpreaderBrand> {
        self.brands.iter().filter(|b| is_free_brand(&b.id)).collect()
    }

    /// Brands that need a pro subscription, catalog order.
    pub fn pro_brands(&self) -> Vec<&SpreaderBrand> {
        self.brands.iter().filter(|b| !is_free_brand(&b.id)).collect()
    }

    pub fn brand_by_id(&self, id: &str) -> Option<&SpreaderBrand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn model_by_id(&self, model_id: &str) -> Option<&SpreaderModel> {
        self.brands
            .iter()
            .flat_map(|b| b.models.iter())
            .find(|m| m.id == model_id)
    }

    pub fn totals(&self) -> CatalogTotals {
        CatalogTotals {
            brands: self.brands.len(),
            models: self.brands.iter().map(|b| b.models.len()).sum(),
            settings: self.settings.len(),
            products: self.unique_product_names().len(),
        }
    }
}
