//! Filesystem-backed blob store for uploaded PDFs.
//!
//! Blobs are write-once per upload under a content key generated at ingest
//! time. Retrieval goes through time-limited signed URLs: an opaque token is
//! minted per request and resolves to the blob key until it expires.

use anyhow::{Context, Result};
use dashmap::DashMap;
use std::path::PathBuf;
use uuid::Uuid;

use super::documents::now_ms;

/// Signed retrieval URLs stay valid for one hour.
pub const SIGNED_URL_TTL_SECS: u64 = 3600;

pub struct BlobStore {
    root: PathBuf,
    tokens: DashMap<String, SignedToken>,
}

struct SignedToken {
    blob_key: String,
    expires_at_ms: u64,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tokens: DashMap::new(),
        }
    }

    fn path_for(&self, blob_key: &str) -> PathBuf {
        self.root.join(blob_key)
    }

    pub async fn put(&self, blob_key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(blob_key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create blob directory {:?}", parent))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write blob {}", blob_key))
    }

    pub async fn read(&self, blob_key: &str) -> Result<Vec<u8>> {
        tokio::fs::read(self.path_for(blob_key))
            .await
            .with_context(|| format!("Failed to read blob {}", blob_key))
    }

    pub async fn delete(&self, blob_key: &str) -> Result<()> {
        tokio::fs::remove_file(self.path_for(blob_key))
            .await
            .with_context(|| format!("Failed to delete blob {}", blob_key))
    }

    /// Mints a time-limited retrieval URL for `blob_key`.
    ///
    /// The returned path is served by the `/blob/:token` handler; the token
    /// stops resolving once the TTL elapses.
    pub fn signed_url(&self, blob_key: &str, ttl_secs: u64) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(
            token.clone(),
            SignedToken {
                blob_key: blob_key.to_string(),
                expires_at_ms: now_ms() + ttl_secs * 1000,
            },
        );
        format!("/blob/{}", token)
    }

    /// Resolves a signed-URL token to its blob key, if still valid.
    ///
    /// Expired tokens are dropped on access; the table also sheds expired
    /// entries once it grows past a bound, so abandoned tokens cannot
    /// accumulate forever.
    pub fn resolve(&self, token: &str) -> Option<String> {
        if self.tokens.len() > 10_000 {
            let now = now_ms();
            self.tokens.retain(|_, t| t.expires_at_ms > now);
        }

        let entry = self.tokens.get(token)?;
        if entry.expires_at_ms <= now_ms() {
            drop(entry);
            self.tokens.remove(token);
            return None;
        }
        Some(entry.blob_key.clone())
    }
}
