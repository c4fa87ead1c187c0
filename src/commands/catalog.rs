//! Catalog commands: products, settings, brands.
//!
//! CHANGELOG:
//! - 10/17/2026 - Show free/pro tier in brands
//! - 10/16/2026 - Resolve settings product by fuzzy match
//! - 10/14/2026 - Initial implementation

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use crate::catalog::types::{Confidence, SettingSource};
use crate::catalog::manager::is_free_brand;
use crate::catalog::{CatalogManager, CatalogTotals, SpreaderSetting};
use crate::fuzzy::{self, AUTOCOMPLETE_THRESHOLD};
use crate::output::OutputControls;

/// List unique product names.
pub fn products(catalog: &CatalogManager, output: &OutputControls) -> Result<()> {
    let names = catalog.unique_product_names();

    if output.json {
        output.print(&names);
        return Ok(());
    }

    if names.is_empty() {
        println!("No products in catalog.");
        return Ok(());
    }

    println!("Products ({}):", names.len());
    println!("{}", "-".repeat(50));
    for name in names {
        println!("{}", name);
    }

    Ok(())
}

/// A setting joined with its spreader's brand and model names.
#[derive(Debug, Serialize)]
pub struct SettingRow<'a> {
    pub product_name: &'a str,
    pub brand: Option<&'a str>,
    pub model: Option<&'a str>,
    pub spreader_model_id: &'a str,
    pub setting_value: &'a str,
    pub application_rate_lbs_per_1k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    pub source: SettingSource,
    pub confidence: Confidence,
}

fn setting_row<'a>(catalog: &'a CatalogManager, setting: &'a SpreaderSetting) -> SettingRow<'a> {
    let model = catalog.model_by_id(&setting.spreader_model_id);
    let brand = model.and_then(|m| catalog.brand_by_id(&m.brand_id));
    SettingRow {
        product_name: &setting.product_name,
        brand: brand.map(|b| b.name.as_str()),
        model: model.map(|m| m.name.as_str()),
        spreader_model_id: &setting.spreader_model_id,
        setting_value: &setting.setting_value,
        application_rate_lbs_per_1k: setting.application_rate_lbs_per_1k,
        notes: setting.notes.as_deref(),
        source: setting.source,
        confidence: setting.confidence,
    }
}

/// Resolve a product query to a catalog product name.
///
/// Order of matching:
/// 1. Best fuzzy match at the autocomplete threshold
/// 2. None (callers fall back to a substring filter)
pub fn resolve_product<'a>(catalog: &'a CatalogManager, query: &str) -> Option<&'a str> {
    let products = catalog.unique_products();
    let best = fuzzy::search(query, &products, AUTOCOMPLETE_THRESHOLD)
        .first()
        .copied()
        .copied();
    best.map(|setting| setting.product_name.as_str())
}

/// Spreader settings for a product, optionally narrowed to one model.
pub fn settings_rows<'a>(
    catalog: &'a CatalogManager,
    product: &str,
    model_id: Option<&str>,
) -> Vec<SettingRow<'a>> {
    let matches: Vec<&SpreaderSetting> = match resolve_product(catalog, product) {
        Some(name) => {
            debug!(query = product, resolved = name, "resolved product");
            catalog
                .settings()
                .iter()
                .filter(|s| s.product_name == name)
                .collect()
        }
        None => catalog.settings_for_product(product),
    };

    matches
        .into_iter()
        .filter(|s| model_id.map_or(true, |id| s.spreader_model_id == id))
        .map(|s| setting_row(catalog, s))
        .collect()
}

/// Show spreader settings for a product.
pub fn settings(
    catalog: &CatalogManager,
    product: &str,
    model_id: Option<&str>,
    output: &OutputControls,
) -> Result<()> {
    if product.trim().is_empty() {
        bail!("Product name is required");
    }

    let rows = settings_rows(catalog, product, model_id);

    if output.json {
        output.print(&rows);
        return Ok(());
    }

    let Some(first) = rows.first() else {
        println!("No spreader settings found for '{}'.", product.trim());
        return Ok(());
    };

    println!(
        "{} ({} lbs/1000 sq ft)",
        first.product_name, first.application_rate_lbs_per_1k
    );
    println!("{}", "-".repeat(50));
    for row in &rows {
        let spreader = match (row.brand, row.model) {
            (Some(brand), Some(model)) => format!("{} {}", brand, model),
            (None, Some(model)) => model.to_string(),
            _ => row.spreader_model_id.to_string(),
        };
        let notes = row.notes.map(|n| format!("  ({})", n)).unwrap_or_default();
        println!("{}: {}{}", spreader, row.setting_value, notes);
    }

    Ok(())
}

/// Subscription tier a brand's settings belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTier {
    Free,
    Pro,
}

impl BrandTier {
    pub fn of(brand_id: &str) -> Self {
        if is_free_brand(brand_id) {
            BrandTier::Free
        } else {
            BrandTier::Pro
        }
    }

    fn label(self) -> &'static str {
        match self {
            BrandTier::Free => "free",
            BrandTier::Pro => "pro",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrandSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub models: usize,
    pub tier: BrandTier,
}

#[derive(Debug, Serialize)]
struct BrandsOutput<'a> {
    brands: Vec<BrandSummary<'a>>,
    free_brands: usize,
    pro_brands: usize,
    totals: CatalogTotals,
}

/// Brand summaries in catalog order.
pub fn brand_summaries(catalog: &CatalogManager) -> Vec<BrandSummary<'_>> {
    catalog
        .brands()
        .iter()
        .map(|b| BrandSummary {
            id: &b.id,
            name: &b.name,
            models: b.models.len(),
            tier: BrandTier::of(&b.id),
        })
        .collect()
}

/// List spreader brands with model counts and tier.
pub fn brands(catalog: &CatalogManager, output: &OutputControls) -> Result<()> {
    let summaries = brand_summaries(catalog);
    let totals = catalog.totals();
    let free_brands = catalog.free_brands().len();
    let pro_brands = catalog.pro_brands().len();

    if output.json {
        output.print(&BrandsOutput {
            brands: summaries,
            free_brands,
            pro_brands,
            totals,
        });
        return Ok(());
    }

    println!(
        "{} brands, {} models, {} settings, {} products",
        totals.brands, totals.models, totals.settings, totals.products
    );
    println!("{} free, {} pro", free_brands, pro_brands);
    println!("{}", "-".repeat(50));
    for summary in summaries {
        println!(
            "{} ({} models) [{}]",
            summary.name,
            summary.models,
            summary.tier.label()
        );
    }

    Ok(())
}
