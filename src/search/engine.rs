//! Core retrieval pipeline: query terms -> matching documents -> snippets.

use super::snippets::{generate_snippets, highlight, MAX_SNIPPETS, SNIPPET_LENGTH};
use super::tokenizer::unique_terms;
use super::types::SearchResultItem;
use crate::storage::documents::DocumentStore;
use crate::storage::index::TermIndex;

/// Executes a free-text query against the inverted index.
///
/// A document matches when it holds a posting for at least one query term
/// (OR-semantics); results carry no relevance score and their order is
/// arbitrary. Each match is rendered with up to [`MAX_SNIPPETS`] highlighted
/// excerpts; documents with empty extracted text degrade to the snippet
/// engine's bare-ellipsis fallback rather than erroring.
pub fn search(query: &str, index: &dyn TermIndex, documents: &DocumentStore) -> Vec<SearchResultItem> {
    let query_terms = unique_terms(query);
    if query_terms.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for document_id in index.lookup(&query_terms) {
        let Some(record) = documents.get(&document_id) else {
            tracing::warn!("Index references missing document {}", document_id);
            continue;
        };

        let snippets: Vec<String> =
            generate_snippets(&record.extracted_text, &query_terms, SNIPPET_LENGTH, MAX_SNIPPETS)
                .iter()
                .map(|snippet| highlight(snippet, &query_terms))
                .collect();

        results.push(SearchResultItem {
            id: record.id,
            filename: record.filename,
            blob_key: record.blob_key,
            snippets,
        });
    }

    results
}
