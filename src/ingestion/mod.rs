//! Ingestion Module
//!
//! The data intake pipeline. Accepts PDF uploads over HTTP, stores the raw
//! bytes in the blob store, extracts the text layer, and populates the
//! document store and the inverted index in one pass.
//!
//! ## Responsibilities
//! - **Upload**: Multipart PDF intake with type validation and compensating
//!   cleanup when a later stage fails.
//! - **Extraction**: Best-effort PDF text extraction; failures degrade to an
//!   empty-text document instead of erroring.
//! - **Lifecycle**: Document listing, deletion (with posting cascade), and
//!   signed retrieval URL minting.
//!
//! ## Submodules
//! - **`extract`**: The PDF text extraction collaborator.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod extract;
pub mod handlers;
pub mod types;
