//! Storage Module
//!
//! The state layer of the service. Everything here is process-local and
//! concurrency-safe; handlers share the stores via `Arc` extensions.
//!
//! ## Submodules
//! - **`index`**: The inverted index behind the pluggable [`index::TermIndex`]
//!   trait, with the shipped in-memory backend.
//! - **`documents`**: The document metadata store (filename, blob key,
//!   extracted text, creation time).
//! - **`blob`**: The PDF blob store with time-limited retrieval tokens.
//! - **`handlers`**: HTTP handler serving blob bytes for signed URLs.

pub mod blob;
pub mod documents;
pub mod handlers;
pub mod index;
