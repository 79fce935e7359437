//! Text normalization shared by the indexer and the query parser.
//!
//! Tokenization is pure and deterministic: the same input always yields the
//! same term sequence, with no locale or environment dependence.

/// Splits raw text into normalized terms.
///
/// Lowercases the input, maps every character that is not an ASCII word
/// character (letter, digit, underscore) or whitespace to a space, then splits
/// on whitespace runs. Order is preserved and duplicates are kept; callers
/// needing uniqueness de-duplicate via [`unique_terms`] or a set.
///
/// Never fails: an empty or all-punctuation input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenizes and de-duplicates, keeping first-occurrence order.
///
/// Used by the query parser; the index writer collects terms into a set
/// instead.
pub fn unique_terms(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
