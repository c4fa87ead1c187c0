//! Search commands: search, suggest, highlight, score.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added highlighted text output
//! - 10/14/2026 - Initial implementation

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogManager;
use crate::fuzzy::{self, HighlightSpan};
use crate::output::OutputControls;

/// A ranked product for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResult<'a> {
    pub product_name: &'a str,
    pub score: f64,
    pub application_rate_lbs_per_1k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    pub highlight: Vec<HighlightSpan>,
}

/// Rank the catalog's unique products against `query`.
pub fn rank_products<'a>(
    catalog: &'a CatalogManager,
    query: &str,
    threshold: f64,
) -> Vec<ProductResult<'a>> {
    let products = catalog.unique_products();
    fuzzy::search_scored(query, &products, threshold)
        .into_iter()
        .map(|scored| {
            let setting = *scored.entry;
            ProductResult {
                product_name: &setting.product_name,
                score: scored.score,
                application_rate_lbs_per_1k: setting.application_rate_lbs_per_1k,
                notes: setting.notes.as_deref(),
                highlight: fuzzy::highlight(&setting.product_name, query),
            }
        })
        .collect()
}

/// Render spans as plain text with the match in brackets.
pub fn render_spans(spans: &[HighlightSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.is_match {
                format!("[{}]", span.text)
            } else {
                span.text.clone()
            }
        })
        .collect()
}

/// Search products.
pub fn search(
    catalog: &CatalogManager,
    query: &str,
    threshold: f64,
    limit: Option<usize>,
    output: &OutputControls,
) -> Result<()> {
    let mut results = rank_products(catalog, query, threshold);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    debug!(query, threshold, results = results.len(), "search");

    if output.json {
        output.print(&results);
        return Ok(());
    }

    if results.is_empty() {
        println!("No products found for '{}'.", query.trim());
        println!("Try a brand (Scotts, Milorganite), a product type (weed, crabgrass) or an NPK ratio (32-0-4).");
        return Ok(());
    }

    let plural = if results.len() == 1 { "" } else { "s" };
    println!("Found {} product{}:", results.len(), plural);
    println!("{}", "-".repeat(50));
    for result in &results {
        println!("{:.2}  {}", result.score, render_spans(&result.highlight));
        println!(
            "      Application rate: {} lbs/1000 sq ft",
            result.application_rate_lbs_per_1k
        );
        if let Some(notes) = result.notes {
            println!("      {}", notes);
        }
    }

    Ok(())
}

/// Autocomplete product names.
pub fn suggest(
    catalog: &CatalogManager,
    query: &str,
    max_suggestions: usize,
    output: &OutputControls,
) -> Result<()> {
    let suggestions = fuzzy::suggest(query, catalog.settings(), max_suggestions);

    if output.json {
        output.print(&suggestions);
    } else {
        for suggestion in &suggestions {
            println!("{}", suggestion);
        }
    }

    Ok(())
}

/// Show highlight spans for `text`.
pub fn highlight(text: &str, query: &str, output: &OutputControls) -> Result<()> {
    let spans = fuzzy::highlight(text, query);

    if output.json {
        output.print(&spans);
    } else {
        println!("{}", render_spans(&spans));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct ScoreOutput<'a> {
    query: &'a str,
    candidate: &'a str,
    score: f64,
}

/// Show the similarity of two strings.
pub fn score(query: &str, candidate: &str, output: &OutputControls) -> Result<()> {
    let score = fuzzy::score(query, candidate);

    if output.json {
        output.print(&ScoreOutput {
            query,
            candidate,
            score,
        });
    } else {
        println!("{:.3}", score);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Confidence, SettingSource, SpreaderSetting};
    use crate::fuzzy::DEFAULT_SEARCH_THRESHOLD;

    fn catalog() -> CatalogManager {
        let setting = |id: &str, product: &str, rate: f64| SpreaderSetting {
            id: id.to_string(),
            spreader_model_id: "scotts-edgeguard-dlx".to_string(),
            product_name: product.to_string(),
            application_rate_lbs_per_1k: rate,
            setting_value: "4".to_string(),
            notes: None,
            source: SettingSource::Manufacturer,
            confidence: Confidence::Official,
        };
        CatalogManager::from_parts(
            Vec::new(),
            vec![
                setting("swf-dlx", "Scotts Turf Builder Weed & Feed 28-0-3", 3.5),
                setting("milo-dlx", "Milorganite 6-4-0", 6.25),
                setting("milo-mini", "Milorganite 6-4-0", 6.25),
            ],
        )
    }

    #[test]
    fn test_rank_products_dedupes_and_highlights() {
        let catalog = catalog();
        let results = rank_products(&catalog, "milorganite", DEFAULT_SEARCH_THRESHOLD);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product_name, "Milorganite 6-4-0");
        assert_eq!(results[0].score, 0.9);
        assert_eq!(render_spans(&results[0].highlight), "[Milorganite] 6-4-0");
    }

    #[test]
    fn test_rank_products_empty_query_lists_all() {
        let catalog = catalog();
        let results = rank_products(&catalog, "", DEFAULT_SEARCH_THRESHOLD);
        let names: Vec<&str> = results.iter().map(|r| r.product_name).collect();
        assert_eq!(
            names,
            vec!["Scotts Turf Builder Weed & Feed 28-0-3", "Milorganite 6-4-0"]
        );
        assert!(results.iter().all(|r| r.highlight.len() == 1));
    }

    #[test]
    fn test_render_spans() {
        let spans = fuzzy::highlight("Scotts Turf Builder Weed & Feed 28-0-3", "weed");
        assert_eq!(render_spans(&spans), "Scotts Turf Builder [Weed] & Feed 28-0-3");
    }
}
