//! Match highlighting for displayed results.

use serde::Serialize;

/// A contiguous piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Split `text` into spans around the first case-insensitive occurrence of `query`.
///
/// Returns at most three spans (prefix, match, suffix); empty prefix and
/// suffix are omitted. The match keeps the original casing of `text`.
/// Concatenating the spans always reproduces `text`.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    let needle: Vec<char> = query.trim().chars().map(fold_case).collect();
    if needle.is_empty() {
        return vec![HighlightSpan::plain(text)];
    }

    let Some((start, end)) = find_folded(text, &needle) else {
        return vec![HighlightSpan::plain(text)];
    };

    let mut spans = Vec::with_capacity(3);
    if start > 0 {
        spans.push(HighlightSpan::plain(&text[..start]));
    }
    spans.push(HighlightSpan::matched(&text[start..end]));
    if end < text.len() {
        spans.push(HighlightSpan::plain(&text[end..]));
    }
    spans
}

/// Lowercase a single char, leaving it alone if its lowercase form is
/// more than one char. Keeps char offsets aligned with the original text.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Byte range of the first occurrence of `needle` (already folded) in `haystack`.
fn find_folded(haystack: &str, needle: &[char]) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    if needle.len() > chars.len() {
        return None;
    }

    (0..=chars.len() - needle.len())
        .find(|&i| {
            chars[i..i + needle.len()]
                .iter()
                .zip(needle)
                .all(|(&(_, c), &n)| fold_case(c) == n)
        })
        .map(|i| {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map_or(haystack.len(), |&(offset, _)| offset);
            (start, end)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(spans: &[HighlightSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_prefix_match_suffix() {
        let spans = highlight("Milorganite 6-4-0", "organite");
        assert_eq!(
            spans,
            vec![
                HighlightSpan::plain("Mil"),
                HighlightSpan::matched("organite"),
                HighlightSpan::plain(" 6-4-0"),
            ]
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            highlight("Milorganite", "xyz"),
            vec![HighlightSpan::plain("Milorganite")]
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(
            highlight("Milorganite", "  "),
            vec![HighlightSpan::plain("Milorganite")]
        );
        assert_eq!(highlight("Milorganite", ""), vec![HighlightSpan::plain("Milorganite")]);
    }

    #[test]
    fn test_keeps_original_casing() {
        let spans = highlight("Scotts Turf Builder", "  TURF ");
        assert_eq!(spans[1], HighlightSpan::matched("Turf"));
        assert_eq!(joined(&spans), "Scotts Turf Builder");
    }

    #[test]
    fn test_omits_empty_prefix_and_suffix() {
        assert_eq!(highlight("Lime", "lime"), vec![HighlightSpan::matched("Lime")]);
        assert_eq!(
            highlight("Lime Pellets", "lime"),
            vec![HighlightSpan::matched("Lime"), HighlightSpan::plain(" Pellets")]
        );
        assert_eq!(
            highlight("Dolomitic Lime", "lime"),
            vec![HighlightSpan::plain("Dolomitic "), HighlightSpan::matched("Lime")]
        );
    }

    #[test]
    fn test_only_first_occurrence() {
        let spans = highlight("Green-Up Green", "green");
        assert_eq!(
            spans,
            vec![HighlightSpan::matched("Green"), HighlightSpan::plain("-Up Green")]
        );
        assert_eq!(spans.iter().filter(|s| s.is_match).count(), 1);
    }

    #[test]
    fn test_query_longer_than_text() {
        assert_eq!(highlight("DG", "humic dg"), vec![HighlightSpan::plain("DG")]);
    }

    #[test]
    fn test_multibyte_reconstruction() {
        let text = "Crème Fraîche Lawn Tonic";
        let spans = highlight(text, "FRAÎCHE");
        assert_eq!(spans[1], HighlightSpan::matched("Fraîche"));
        assert_eq!(joined(&spans), text);

        let text = "İstanbul Turf";
        let spans = highlight(text, "turf");
        assert_eq!(joined(&spans), text);
        assert_eq!(spans[1], HighlightSpan::matched("Turf"));
    }

    #[test]
    fn test_reconstruction() {
        let cases = [
            ("Scotts Turf Builder Weed & Feed 28-0-3", "weed"),
            ("Milorganite 6-4-0", "6-4-0"),
            ("The Andersons 16-0-8 Humic DG", "nothing"),
            ("", "lime"),
            ("Lesco 24-0-11", ""),
        ];
        for (text, query) in cases {
            assert_eq!(joined(&highlight(text, query)), text, "query {:?}", query);
        }
    }
}
