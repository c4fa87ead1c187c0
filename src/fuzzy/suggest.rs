//! Autocomplete suggestions.

use std::collections::HashSet;

use super::search::search;
use super::{normalize, Searchable, AUTOCOMPLETE_THRESHOLD, MIN_AUTOCOMPLETE_CHARS};

/// Suggest up to `max_suggestions` unique names from `catalog` for a partial query.
///
/// Queries shorter than [`MIN_AUTOCOMPLETE_CHARS`] return nothing. Duplicate
/// names collapse to their first occurrence before ranking, and ranking uses
/// the stricter [`AUTOCOMPLETE_THRESHOLD`].
pub fn suggest<T: Searchable>(query: &str, catalog: &[T], max_suggestions: usize) -> Vec<String> {
    if normalize(query).chars().count() < MIN_AUTOCOMPLETE_CHARS {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let unique_names: Vec<&str> = catalog
        .iter()
        .map(|entry| entry.name())
        .filter(|name| seen.insert(*name))
        .collect();

    search(query, &unique_names, AUTOCOMPLETE_THRESHOLD)
        .into_iter()
        .take(max_suggestions)
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::{SearchableEntry, DEFAULT_MAX_SUGGESTIONS};

    #[test]
    fn test_requires_two_chars() {
        let items = vec!["Milorganite 6-4-0"];
        assert!(suggest("m", &items, DEFAULT_MAX_SUGGESTIONS).is_empty());
        assert!(suggest("  m  ", &items, DEFAULT_MAX_SUGGESTIONS).is_empty());
        assert!(suggest("", &items, DEFAULT_MAX_SUGGESTIONS).is_empty());
        assert_eq!(
            suggest("mi", &items, DEFAULT_MAX_SUGGESTIONS),
            vec!["Milorganite 6-4-0"]
        );
    }

    #[test]
    fn test_deduplicates_and_filters() {
        let items = vec![
            SearchableEntry::new("Milorganite 6-4-0", "milo-scotts-mini"),
            SearchableEntry::new("Milorganite 6-4-0", "milo-scotts-dlx"),
            SearchableEntry::new("Scotts Turf Builder Lawn Food 32-0-4", "stb-scotts-mini"),
        ];
        assert_eq!(
            suggest("mi", &items, DEFAULT_MAX_SUGGESTIONS),
            vec!["Milorganite 6-4-0"]
        );
    }

    #[test]
    fn test_respects_max_suggestions() {
        let items = vec![
            "Scotts Turf Builder Lawn Food 32-0-4",
            "Scotts Turf Builder Weed & Feed 28-0-3",
            "Scotts Halts Crabgrass Preventer 0-0-7",
            "Scotts Turf Builder WinterGuard 32-0-10",
        ];
        let results = suggest("scotts", &items, 2);
        assert_eq!(
            results,
            vec![
                "Scotts Turf Builder Lawn Food 32-0-4",
                "Scotts Turf Builder Weed & Feed 28-0-3",
            ]
        );
        assert!(suggest("scotts", &items, 0).is_empty());
    }

    #[test]
    fn test_uses_stricter_threshold() {
        // "Lime" scores 0.3 for "fertilizer": enough for search, not for autocomplete
        let items = vec!["Lime", "Fertilome"];
        assert_eq!(
            suggest("fertilizer", &items, DEFAULT_MAX_SUGGESTIONS),
            vec!["Fertilome"]
        );
    }
}
