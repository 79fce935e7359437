//! HTTP handler serving blob bytes behind signed URLs.

use axum::extract::{Extension, Path};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use super::blob::BlobStore;

/// `GET /blob/:token` — streams the PDF referenced by a signed-URL token.
///
/// Unknown or expired tokens are a 404; the token itself never reveals the
/// underlying blob key.
pub async fn handle_get_blob(
    Extension(blobs): Extension<Arc<BlobStore>>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    let Some(blob_key) = blobs.resolve(&token) else {
        return (StatusCode::NOT_FOUND, "Unknown or expired link").into_response();
    };

    match blobs.read(&blob_key).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/pdf")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to read blob {}: {}", blob_key, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read document").into_response()
        }
    }
}
