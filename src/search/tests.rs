//! Search Module Tests
//!
//! Validates the search kernel and the query pipeline.
//!
//! ## Test Scopes
//! - **Tokenizer**: Normalization, splitting, determinism, de-duplication.
//! - **Snippets**: Window placement, boundary alignment, dedup, fallback.
//! - **Highlighting**: Case-insensitive marking and escaping.
//! - **Engine**: OR-semantics retrieval over the in-memory index.

#[cfg(test)]
mod tests {
    use crate::search::engine::search;
    use crate::search::snippets::{generate_snippets, highlight, MAX_SNIPPETS, SNIPPET_LENGTH};
    use crate::search::tokenizer::{tokenize, unique_terms};
    use crate::search::types::{SearchResponse, SearchResultItem};
    use crate::storage::documents::{DocumentRecord, DocumentStore};
    use crate::storage::index::{MemoryIndex, TermIndex};
    use std::collections::HashSet;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // ============================================================
    // TOKENIZER TESTS - tokenize
    // ============================================================

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("Hello, World!"), terms(&["hello", "world"]));
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(
            tokenize("RUST Programming LANGUAGE"),
            terms(&["rust", "programming", "language"])
        );
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("the cat and the dog"),
            terms(&["the", "cat", "and", "the", "dog"])
        );
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscore() {
        assert_eq!(
            tokenize("file_name v2 2024"),
            terms(&["file_name", "v2", "2024"])
        );
    }

    #[test]
    fn test_tokenize_empty_string() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_punctuation_only() {
        assert!(tokenize("!!! ,,,").is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        // Punctuation becomes whitespace, so joined words split apart.
        assert_eq!(tokenize("end.Start"), terms(&["end", "start"]));
    }

    #[test]
    fn test_tokenize_strips_non_ascii_letters() {
        // The word class is ASCII; accented characters act as separators.
        let tokens = tokenize("caf\u{e9} rust");
        assert_eq!(tokens, terms(&["caf", "rust"]));
    }

    #[test]
    fn test_tokenize_output_is_normalized() {
        let tokens = tokenize("Some *text*, with 42 Mixed-CASE words!");
        for token in &tokens {
            assert!(!token.is_empty());
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_uppercase() || c == '_'),
                "token {:?} is not a normalized term",
                token
            );
        }
    }

    #[test]
    fn test_tokenize_idempotent_over_rejoined_output() {
        let text = "The quick brown fox, the lazy dog!";
        let once = tokenize(text);
        let rejoined = once.join(" ");
        assert_eq!(tokenize(&rejoined), once);
    }

    // ============================================================
    // TOKENIZER TESTS - unique_terms
    // ============================================================

    #[test]
    fn test_unique_terms_deduplicates_case_insensitively() {
        assert_eq!(unique_terms("The The THE"), terms(&["the"]));
    }

    #[test]
    fn test_unique_terms_keeps_first_occurrence_order() {
        assert_eq!(
            unique_terms("dog cat dog bird cat"),
            terms(&["dog", "cat", "bird"])
        );
    }

    // ============================================================
    // SNIPPET TESTS - generate_snippets
    // ============================================================

    #[test]
    fn test_snippets_no_match_falls_back_to_prefix() {
        let text = "Nothing in here matches the query at all, not even once.";
        let snippets = generate_snippets(text, &terms(&["zebra"]), SNIPPET_LENGTH, MAX_SNIPPETS);

        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0], format!("{}...", text));
    }

    #[test]
    fn test_snippets_fallback_truncates_long_text() {
        let text = "word ".repeat(100);
        let snippets = generate_snippets(&text, &terms(&["zebra"]), 20, MAX_SNIPPETS);

        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0], format!("{}...", &text[..20]));
    }

    #[test]
    fn test_snippets_empty_text_yields_bare_ellipsis() {
        let snippets = generate_snippets("", &terms(&["fox"]), SNIPPET_LENGTH, MAX_SNIPPETS);
        assert_eq!(snippets, vec!["...".to_string()]);
    }

    #[test]
    fn test_snippets_empty_term_set_falls_back() {
        let snippets = generate_snippets("some text", &[], SNIPPET_LENGTH, MAX_SNIPPETS);
        assert_eq!(snippets, vec!["some text...".to_string()]);
    }

    #[test]
    fn test_snippets_fox_scenario() {
        let text = "The quick brown fox jumps over the lazy dog. The fox runs fast.";
        let snippets = generate_snippets(text, &terms(&["fox"]), 20, MAX_SNIPPETS);

        assert_eq!(snippets.len(), 2);
        for snippet in &snippets {
            assert!(snippet.contains("fox"), "snippet {:?} lost its match", snippet);
        }
        // Both windows start mid-text and stop before the end.
        assert_eq!(snippets[0], "...quick brown fox jump...");
        assert_eq!(snippets[1], "...lazy dog. The fox ru...");
    }

    #[test]
    fn test_snippets_match_at_start_has_no_leading_ellipsis() {
        let text = "fox at the very beginning of a reasonably long line of text";
        let snippets = generate_snippets(text, &terms(&["fox"]), 20, MAX_SNIPPETS);

        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].starts_with("fox"));
        assert!(snippets[0].ends_with("..."));
    }

    #[test]
    fn test_snippets_window_aligns_to_word_boundary() {
        let text = "aaaa bbbb cccc dddd eeee ffff target gggg hhhh";
        let snippets = generate_snippets(text, &terms(&["target"]), 20, MAX_SNIPPETS);

        assert_eq!(snippets.len(), 1);
        // The window must not open mid-word.
        let body = snippets[0].trim_start_matches("...");
        assert!(
            !body.starts_with(|c: char| c.is_whitespace()),
            "window starts on whitespace: {:?}",
            snippets[0]
        );
        assert!(text.contains(body.trim_end_matches("...")));
    }

    #[test]
    fn test_snippets_clustered_matches_share_one_window() {
        // Three anchors, identical adjusted start: one window survives.
        let snippets = generate_snippets("fox fox fox", &terms(&["fox"]), SNIPPET_LENGTH, MAX_SNIPPETS);
        assert_eq!(snippets, vec!["fox fox fox".to_string()]);
    }

    #[test]
    fn test_snippets_never_exceed_max() {
        let text = "fox ".repeat(500);
        let snippets = generate_snippets(&text, &terms(&["fox"]), 20, 3);
        assert!(snippets.len() <= 3);
    }

    #[test]
    fn test_snippets_starts_are_unique() {
        let text = format!(
            "{} fox {} fox {} fox {} fox",
            "a".repeat(120),
            "b".repeat(120),
            "c".repeat(120),
            "d".repeat(120)
        );
        let snippets = generate_snippets(&text, &terms(&["fox"]), 40, 4);

        let unique: HashSet<&String> = snippets.iter().collect();
        assert_eq!(unique.len(), snippets.len());
    }

    #[test]
    fn test_snippets_overlapping_occurrences_found() {
        // "aa" occurs at offsets 0, 1 and 2 in "aaaa"; all collapse to one window.
        let snippets = generate_snippets("aaaa", &terms(&["aa"]), SNIPPET_LENGTH, MAX_SNIPPETS);
        assert_eq!(snippets, vec!["aaaa".to_string()]);
    }

    #[test]
    fn test_snippets_multibyte_text_does_not_panic() {
        let text = "résumé naïve fox café über fox";
        let snippets = generate_snippets(text, &terms(&["fox"]), 10, MAX_SNIPPETS);
        assert!(!snippets.is_empty());
        for snippet in &snippets {
            assert!(snippet.contains("fox"));
        }
    }

    // ============================================================
    // HIGHLIGHT TESTS
    // ============================================================

    #[test]
    fn test_highlight_wraps_matches() {
        assert_eq!(
            highlight("the quick fox", &terms(&["fox"])),
            "the quick <mark>fox</mark>"
        );
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        assert_eq!(
            highlight("Fox and FOX and fox", &terms(&["fox"])),
            "<mark>Fox</mark> and <mark>FOX</mark> and <mark>fox</mark>"
        );
    }

    #[test]
    fn test_highlight_multiple_terms() {
        let marked = highlight("the cat chased the dog", &terms(&["cat", "dog"]));
        assert_eq!(marked, "the <mark>cat</mark> chased the <mark>dog</mark>");
    }

    #[test]
    fn test_highlight_is_substring_not_word_bounded() {
        assert_eq!(
            highlight("foxes run", &terms(&["fox"])),
            "<mark>fox</mark>es run"
        );
    }

    #[test]
    fn test_highlight_leaves_non_matching_text_unchanged() {
        let snippet = "nothing to see here...";
        assert_eq!(highlight(snippet, &terms(&["zebra"])), snippet);
    }

    #[test]
    fn test_highlight_escapes_regex_metacharacters() {
        // Terms from the tokenizer are safe; arbitrary strings must be too.
        assert_eq!(
            highlight("c++ and c# code", &terms(&["c++"])),
            "<mark>c++</mark> and c# code"
        );
    }

    #[test]
    fn test_highlight_empty_term_set_is_identity() {
        assert_eq!(highlight("untouched", &[]), "untouched");
    }

    // ============================================================
    // ENGINE TESTS
    // ============================================================

    fn store_with(records: &[(&str, &str, &str)]) -> (MemoryIndex, DocumentStore) {
        let index = MemoryIndex::new();
        let documents = DocumentStore::new();

        for (id, filename, text) in records {
            let posting_terms: HashSet<String> = tokenize(text).into_iter().collect();
            index.insert_document(id, &posting_terms);
            documents.insert(DocumentRecord {
                id: id.to_string(),
                filename: filename.to_string(),
                blob_key: format!("pdfs/{}.pdf", id),
                extracted_text: text.to_string(),
                created_at: 0,
            });
        }

        (index, documents)
    }

    #[test]
    fn test_engine_finds_matching_document() {
        let (index, documents) = store_with(&[("doc-1", "fox.pdf", "the quick brown fox")]);

        let results = search("fox", &index, &documents);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "doc-1");
        assert_eq!(results[0].filename, "fox.pdf");
        assert!(results[0].snippets[0].contains("<mark>fox</mark>"));
    }

    #[test]
    fn test_engine_or_semantics() {
        let (index, documents) = store_with(&[
            ("doc-1", "a.pdf", "alpha only"),
            ("doc-2", "b.pdf", "beta only"),
            ("doc-3", "c.pdf", "gamma only"),
        ]);

        // One matching term is enough; the absent term does not exclude.
        let results = search("alpha beta", &index, &documents);
        let ids: HashSet<String> = results.iter().map(|r| r.id.clone()).collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains("doc-1"));
        assert!(ids.contains("doc-2"));
    }

    #[test]
    fn test_engine_no_match_returns_empty() {
        let (index, documents) = store_with(&[("doc-1", "a.pdf", "alpha only")]);
        assert!(search("zebra", &index, &documents).is_empty());
    }

    #[test]
    fn test_engine_query_normalization_matches_index() {
        let (index, documents) = store_with(&[("doc-1", "a.pdf", "hello world")]);

        // Case and punctuation differences must not matter.
        let results = search("HELLO, wOrLd!", &index, &documents);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_engine_punctuation_only_query_returns_empty() {
        let (index, documents) = store_with(&[("doc-1", "a.pdf", "hello world")]);
        assert!(search("!!! ???", &index, &documents).is_empty());
    }

    #[test]
    fn test_engine_empty_text_document_renders_placeholder() {
        // An empty-text document has zero postings; force it into the index
        // to check the snippet fallback on the render path.
        let index = MemoryIndex::new();
        let documents = DocumentStore::new();

        let mut posting_terms = HashSet::new();
        posting_terms.insert("ghost".to_string());
        index.insert_document("doc-1", &posting_terms);
        documents.insert(DocumentRecord {
            id: "doc-1".to_string(),
            filename: "empty.pdf".to_string(),
            blob_key: "pdfs/doc-1.pdf".to_string(),
            extracted_text: String::new(),
            created_at: 0,
        });

        let results = search("ghost", &index, &documents);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].snippets, vec!["...".to_string()]);
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    #[test]
    fn test_search_response_serialization() {
        let response = SearchResponse {
            query: "fox".to_string(),
            count: 1,
            results: vec![SearchResultItem {
                id: "doc-1".to_string(),
                filename: "fox.pdf".to_string(),
                blob_key: "pdfs/doc-1.pdf".to_string(),
                snippets: vec!["...the <mark>fox</mark>...".to_string()],
            }],
        };

        let json = serde_json::to_string(&response).expect("Serialization failed");
        let restored: SearchResponse = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored.query, "fox");
        assert_eq!(restored.count, 1);
        assert_eq!(restored.results[0].blob_key, "pdfs/doc-1.pdf");
        assert_eq!(restored.results[0].snippets.len(), 1);
    }

    #[test]
    fn test_search_response_empty_results() {
        let response = SearchResponse {
            query: "nonexistent".to_string(),
            count: 0,
            results: vec![],
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: SearchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.count, 0);
        assert!(restored.results.is_empty());
    }
}
