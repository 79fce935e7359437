//! Document metadata store.
//!
//! One row per uploaded document, keyed by id. The extracted text lives here
//! so the search pipeline can render snippets without touching raw blobs.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A stored document row: `documents(id, filename, blob_key, extracted_text, created_at)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub blob_key: String,
    /// Best-effort extracted text; empty when extraction produced nothing.
    pub extracted_text: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// In-memory document store shared across handlers.
#[derive(Default)]
pub struct DocumentStore {
    records: DashMap<String, DocumentRecord>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: DocumentRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<DocumentRecord> {
        self.records.get(id).map(|r| r.clone())
    }

    pub fn remove(&self, id: &str) -> Option<DocumentRecord> {
        self.records.remove(id).map(|(_, record)| record)
    }

    /// All rows, newest first.
    pub fn list(&self) -> Vec<DocumentRecord> {
        let mut records: Vec<DocumentRecord> =
            self.records.iter().map(|r| r.clone()).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Whether any stored row references `blob_key`.
    pub fn contains_blob_key(&self, blob_key: &str) -> bool {
        self.records.iter().any(|r| r.blob_key == blob_key)
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
