//! Search Service Module
//!
//! The core component responsible for executing user queries against the index.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline for the search
//! service. It bridges the HTTP API layer with the underlying storage systems
//! (Inverted Index and Document Store).
//!
//! ## Responsibilities
//! - **Tokenization**: Parsing raw query strings and document text into normalized,
//!   searchable terms.
//! - **Retrieval**: Resolving query terms to matching document ids (OR-semantics,
//!   unranked) and hydrating them with stored metadata.
//! - **Snippets**: Extracting word-boundary-aligned excerpts around match
//!   positions and wrapping matched terms in emphasis markers.
//! - **API**: Exposing search capabilities via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`engine`**: Contains the core retrieval and snippet-rendering logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`snippets`**: Snippet window placement and term highlighting.
//! - **`tokenizer`**: Text processing utilities (normalization, splitting).
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod snippets;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
