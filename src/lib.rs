//! PDF Document Search Service Library
//!
//! This library crate defines the core modules of the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`search`**: The core information retrieval logic. Contains the tokenizer,
//!   the snippet/highlight engine, and query processing utilities.
//! - **`ingestion`**: The data intake pipeline. Responsible for accepting PDF
//!   uploads, extracting text, and populating the inverted index.
//! - **`storage`**: The state layer. Implements the inverted index behind a
//!   pluggable lookup trait, the document metadata store, and the blob store
//!   with time-limited retrieval URLs.
//! - **`admin`**: The password gate protecting the administrative surface
//!   (uploads and deletions).

pub mod admin;
pub mod ingestion;
pub mod search;
pub mod storage;
