//! Fuzzy product search.
//!
//! Scoring, ranked search, autocomplete and match highlighting over any
//! catalog whose entries expose a name. Everything here is a pure function
//! of its inputs: the catalog is always passed in, never read from global
//! state, and nothing is cached between calls.
//!
//! CHANGELOG:
//! - 10/16/2026 - Split into score/search/suggest/highlight modules
//! - 10/14/2026 - Initial implementation

pub mod highlight;
pub mod score;
pub mod search;
pub mod suggest;

pub use highlight::{highlight, HighlightSpan};
pub use score::score;
pub use search::{search, search_scored, ScoredEntry};
pub use suggest::suggest;

/// Score returned when query and candidate are equal after normalization.
pub const EXACT_SCORE: f64 = 1.0;

/// Score returned when the candidate contains the query.
pub const SUBSTRING_SCORE: f64 = 0.9;

/// Default minimum score for ranked search.
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.3;

/// Minimum score for autocomplete suggestions (stricter than search).
pub const AUTOCOMPLETE_THRESHOLD: f64 = 0.4;

/// Default cap on the number of autocomplete suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Queries shorter than this (after trimming) get no suggestions.
pub const MIN_AUTOCOMPLETE_CHARS: usize = 2;

/// Anything that can be searched by name.
pub trait Searchable {
    /// The text matched against the query.
    fn name(&self) -> &str;
}

impl Searchable for str {
    fn name(&self) -> &str {
        self
    }
}

impl Searchable for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A name paired with an arbitrary payload carried through search untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableEntry<T> {
    pub name: String,
    pub data: T,
}

impl<T> SearchableEntry<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl<T> Searchable for SearchableEntry<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Trim and lowercase a string for comparison.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
