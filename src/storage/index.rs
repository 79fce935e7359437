//! The inverted index: term -> set of document ids.
//!
//! Postings are presence-only (no positions, no frequencies). A document's
//! postings are replaced wholesale on re-insert and removed wholesale on
//! delete; there are no partial updates.

use dashmap::DashMap;
use std::collections::HashSet;

/// Pluggable term -> set-of-document-ids lookup.
///
/// Decouples the search pipeline from any specific storage engine: the
/// shipped backend is [`MemoryIndex`], but an implementer may back this with
/// an embedded key-value store or a relational `postings(term, document_id)`
/// table instead.
pub trait TermIndex: Send + Sync {
    /// Replaces all postings for `document_id` with `terms`.
    ///
    /// Delete-then-insert is a single logical unit: callers never observe a
    /// document with a mix of old and new postings.
    fn insert_document(&self, document_id: &str, terms: &HashSet<String>);

    /// Removes every posting for `document_id`.
    fn remove_document(&self, document_id: &str);

    /// Returns the distinct ids of documents holding at least one posting
    /// for any of `terms` (OR-semantics).
    fn lookup(&self, terms: &[String]) -> HashSet<String>;
}

/// In-memory [`TermIndex`] backend.
///
/// Keeps a forward map (term -> ids) and a reverse map (id -> terms) so that
/// wholesale replacement and cascade removal stay cheap.
#[derive(Default)]
pub struct MemoryIndex {
    postings: DashMap<String, HashSet<String>>,
    document_terms: DashMap<String, HashSet<String>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms currently indexed.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

impl TermIndex for MemoryIndex {
    fn insert_document(&self, document_id: &str, terms: &HashSet<String>) {
        self.remove_document(document_id);

        for term in terms {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(document_id.to_string());
        }
        self.document_terms
            .insert(document_id.to_string(), terms.clone());
    }

    fn remove_document(&self, document_id: &str) {
        let Some((_, old_terms)) = self.document_terms.remove(document_id) else {
            return;
        };

        for term in old_terms {
            let emptied = match self.postings.get_mut(&term) {
                Some(mut ids) => {
                    ids.remove(document_id);
                    ids.is_empty()
                }
                None => false,
            };
            if emptied {
                self.postings.remove(&term);
            }
        }
    }

    fn lookup(&self, terms: &[String]) -> HashSet<String> {
        let mut ids = HashSet::new();
        for term in terms {
            if let Some(posting_ids) = self.postings.get(term) {
                ids.extend(posting_ids.iter().cloned());
            }
        }
        ids
    }
}
