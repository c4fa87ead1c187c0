//! Spreader catalog records.
//!
//! CHANGELOG:
//! - 10/14/2026 - Initial implementation

use serde::{Deserialize, Serialize};

use crate::fuzzy::Searchable;

/// A spreader manufacturer and its models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreaderBrand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub models: Vec<SpreaderModel>,
}

/// How a spreader distributes product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreaderType {
    Broadcast,
    Drop,
    Handheld,
    TowBehind,
}

/// What the spreader's rate control is marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Numeric,
    Lettered,
    Dial,
}

/// Lowest and highest marks on the rate control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRange {
    pub min: String,
    pub max: String,
}

/// A single spreader model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreaderModel {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub spreader_type: SpreaderType,
    pub setting_type: SettingType,
    pub setting_range: SettingRange,
    #[serde(default)]
    pub discontinued: bool,
}

/// Where a setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingSource {
    Manufacturer,
    Siteone,
    VerifiedCommunity,
}

/// How much a setting can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Official,
    High,
    Moderate,
}

/// Spreader setting for one product on one spreader model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreaderSetting {
    pub id: String,
    pub spreader_model_id: String,
    pub product_name: String,
    pub application_rate_lbs_per_1k: f64,
    pub setting_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: SettingSource,
    pub confidence: Confidence,
}

impl Searchable for SpreaderSetting {
    fn name(&self) -> &str {
        &self.product_name
    }
}
