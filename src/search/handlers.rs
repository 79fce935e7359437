use super::engine::search;
use super::types::{ErrorResponse, SearchResponse};
use crate::storage::documents::DocumentStore;
use crate::storage::index::TermIndex;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::Extension;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// `GET /api/search?q=...` — free-text search over all uploaded documents.
///
/// An empty or whitespace-only query is rejected before the kernel runs; a
/// query that tokenizes to nothing returns an empty result list.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<dyn TermIndex>>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query parameter \"q\" is required")),
        )
            .into_response();
    }

    let results = search(&params.q, index.as_ref(), &documents);

    Json(SearchResponse {
        query: params.q,
        count: results.len(),
        results,
    })
    .into_response()
}
