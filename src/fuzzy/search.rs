//! Ranked fuzzy search over a catalog.

use std::cmp::Ordering;

use tracing::trace;

use super::score::score;
use super::Searchable;

/// A catalog entry with its relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a, T> {
    pub entry: &'a T,
    pub score: f64,
}

/// Search `catalog` by name and return matching entries, most relevant first.
///
/// An empty or all-whitespace query returns the whole catalog in its
/// original order. Otherwise only entries scoring at least `threshold`
/// are kept. Entries with equal scores keep their catalog order.
pub fn search<'a, T: Searchable>(query: &str, catalog: &'a [T], threshold: f64) -> Vec<&'a T> {
    search_scored(query, catalog, threshold)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}

/// Same as [`search`], but keeps each entry's score.
///
/// For an empty query every entry is returned with a score of 1.0.
pub fn search_scored<'a, T: Searchable>(
    query: &str,
    catalog: &'a [T],
    threshold: f64,
) -> Vec<ScoredEntry<'a, T>> {
    if query.trim().is_empty() {
        return catalog
            .iter()
            .map(|entry| ScoredEntry { entry, score: 1.0 })
            .collect();
    }

    let mut results: Vec<ScoredEntry<'a, T>> = catalog
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score(query, entry.name()),
        })
        .filter(|scored| scored.score >= threshold)
        .collect();

    // sort_by is stable, so ties keep catalog order
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    trace!(
        query,
        threshold,
        candidates = catalog.len(),
        matches = results.len(),
        "ranked search"
    );

    results
}
