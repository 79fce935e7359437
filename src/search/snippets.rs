//! Snippet extraction and term highlighting.
//!
//! Given a document's full text and the query's term set, this module finds
//! every match position, derives non-overlapping excerpt windows aligned to
//! word boundaries, and wraps matched terms in `<mark>` emphasis markers.
//!
//! All offsets are character offsets, so slicing can never split a UTF-8
//! code point. Matching is ASCII-case-insensitive; terms produced by the
//! tokenizer are already lowercase ASCII word characters.

use regex::Regex;
use std::collections::HashSet;

/// Default excerpt window size, in characters.
pub const SNIPPET_LENGTH: usize = 200;
/// Default maximum number of excerpts per document.
pub const MAX_SNIPPETS: usize = 3;

/// How far behind the tentative window start to look for a word boundary.
const BOUNDARY_LOOKBACK: usize = 50;

/// Extracts up to `max_snippets` excerpt windows around query-term matches.
///
/// Anchors are every (possibly overlapping) occurrence of any query term in
/// the lowercased text, visited in ascending document order. Each window
/// starts roughly half a window before its anchor, snapped back to the
/// nearest word boundary within a bounded lookback, and is dropped if an
/// earlier window already used the same start. Windows that do not span the
/// whole text are ellipsis-bounded.
///
/// When no term occurs in the text (or every window is a duplicate), the
/// fallback is a single snippet holding the first `snippet_length` characters
/// with a trailing ellipsis. The ellipsis is appended even when the text is
/// shorter than the window; total functions, never an error.
pub fn generate_snippets(
    text: &str,
    query_terms: &[String],
    snippet_length: usize,
    max_snippets: usize,
) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let normalized: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();

    // Every occurrence of every term, deduplicated and in document order.
    let mut positions: Vec<usize> = Vec::new();
    for term in query_terms {
        let term_chars: Vec<char> = term.to_lowercase().chars().collect();
        if term_chars.is_empty() || term_chars.len() > normalized.len() {
            continue;
        }
        for i in 0..=(normalized.len() - term_chars.len()) {
            if normalized[i..i + term_chars.len()] == term_chars[..] {
                positions.push(i);
            }
        }
    }
    positions.sort_unstable();
    positions.dedup();

    let mut snippets: Vec<String> = Vec::new();
    let mut seen_starts: HashSet<usize> = HashSet::new();

    for &position in &positions {
        if snippets.len() >= max_snippets {
            break;
        }

        let start = position.saturating_sub(snippet_length / 2);

        // Prefer starting right after whitespace; bounded scan so a long
        // unbroken run cannot push the window arbitrarily far left.
        let mut adjusted_start = start;
        let lookback = BOUNDARY_LOOKBACK.min(start);
        for i in (start - lookback..=start).rev() {
            if i == 0 || chars[i - 1].is_whitespace() {
                adjusted_start = i;
                break;
            }
        }

        // Clustered anchors collapse to one window.
        if !seen_starts.insert(adjusted_start) {
            continue;
        }

        let end = chars.len().min(adjusted_start + snippet_length);
        let mut snippet: String = chars[adjusted_start..end].iter().collect();

        if adjusted_start > 0 {
            snippet.insert_str(0, "...");
        }
        if end < chars.len() {
            snippet.push_str("...");
        }

        snippets.push(snippet);
    }

    if snippets.is_empty() {
        let prefix: String = chars.iter().take(snippet_length).collect();
        snippets.push(format!("{}...", prefix));
    }

    snippets
}

/// Wraps every case-insensitive occurrence of any query term in `<mark>`.
///
/// Matching is a single left-to-right alternation scan over the snippet; it
/// is a literal substring match, not word-boundary constrained. Terms are
/// regex-escaped before the pattern is built, so this is safe to call with
/// arbitrary un-tokenized strings.
pub fn highlight(snippet: &str, query_terms: &[String]) -> String {
    if query_terms.is_empty() {
        return snippet.to_string();
    }

    let pattern = query_terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&format!("(?i)({})", pattern)) {
        Ok(re) => re.replace_all(snippet, "<mark>$1</mark>").into_owned(),
        Err(err) => {
            tracing::warn!("Failed to build highlight pattern: {}", err);
            snippet.to_string()
        }
    }
}
