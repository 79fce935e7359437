use super::extract::extract_text;
use super::types::{
    DeleteRequest, DeleteResponse, FileListResponse, FileSummary, PdfUrlParams, PdfUrlResponse,
    UploadResponse, UploadedFile,
};
use crate::search::tokenizer::tokenize;
use crate::search::types::ErrorResponse;
use crate::storage::blob::{BlobStore, SIGNED_URL_TTL_SECS};
use crate::storage::documents::{now_ms, DocumentRecord, DocumentStore};
use crate::storage::index::TermIndex;
use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Extension;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// `POST /api/upload` — multipart PDF intake.
///
/// Stores the blob, extracts the text layer, and writes the document row and
/// its postings in one pass. Empty extracted text is a success with zero
/// postings: the document is listed and deletable but unreachable by search.
pub async fn handle_upload(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(index): Extension<Arc<dyn TermIndex>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    mut multipart: Multipart,
) -> Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::warn!("Failed to read multipart body: {}", err);
                return error_response(StatusCode::BAD_REQUEST, "Invalid multipart body");
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return error_response(StatusCode::BAD_REQUEST, "Only PDF files are allowed");
        }

        let filename = field.file_name().unwrap_or("document.pdf").to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
            Err(err) => {
                tracing::warn!("Failed to read uploaded file: {}", err);
                return error_response(StatusCode::BAD_REQUEST, "Invalid multipart body");
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    let file_id = Uuid::new_v4().to_string();
    let blob_key = format!("pdfs/{}-{}", file_id, sanitize_filename(&filename));

    if let Err(err) = blobs.put(&blob_key, &bytes).await {
        tracing::error!("Failed to store blob for {}: {}", filename, err);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload file");
    }

    let extracted_text = extract_text(&bytes);
    let terms: HashSet<String> = tokenize(&extracted_text).into_iter().collect();

    let record = DocumentRecord {
        id: file_id.clone(),
        filename,
        blob_key,
        extracted_text,
        created_at: now_ms(),
    };
    let file = UploadedFile::from(&record);

    documents.insert(record);
    index.insert_document(&file_id, &terms);

    tracing::info!("Ingested document {} ({} postings)", file_id, terms.len());

    Json(UploadResponse {
        success: true,
        file,
    })
    .into_response()
}

/// `DELETE /api/delete` — removes a document, its blob, and its postings.
///
/// The blob delete is best-effort: a failure is logged and the metadata
/// delete continues, so a missing file on disk cannot strand the row.
pub async fn handle_delete(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(index): Extension<Arc<dyn TermIndex>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    Json(req): Json<DeleteRequest>,
) -> Response {
    if req.file_id.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "file_id is required");
    }

    let Some(record) = documents.get(&req.file_id) else {
        return error_response(StatusCode::NOT_FOUND, "File not found");
    };

    if let Err(err) = blobs.delete(&record.blob_key).await {
        tracing::error!(
            "Blob delete error for {} (continuing with metadata delete): {}",
            record.blob_key,
            err
        );
    }

    documents.remove(&req.file_id);
    index.remove_document(&req.file_id);

    Json(DeleteResponse { success: true }).into_response()
}

/// `GET /api/files` — lists all uploaded documents, newest first.
pub async fn handle_list_files(
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Json<FileListResponse> {
    let files = documents
        .list()
        .iter()
        .map(|record| FileSummary {
            id: record.id.clone(),
            filename: record.filename.clone(),
            created_at: record.created_at,
        })
        .collect();

    Json(FileListResponse { files })
}

/// `GET /api/pdf-url?key=...` — mints a time-limited retrieval URL.
///
/// Only keys referenced by a stored document are signable.
pub async fn handle_pdf_url(
    Query(params): Query<PdfUrlParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
) -> Response {
    let Some(key) = params.key.filter(|k| !k.is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Query parameter \"key\" is required",
        );
    };

    if !documents.contains_blob_key(&key) {
        return error_response(StatusCode::NOT_FOUND, "File not found");
    }

    let url = blobs.signed_url(&key, SIGNED_URL_TTL_SECS);
    Json(PdfUrlResponse { url }).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Restricts blob-key filename parts to a safe character set.
///
/// Keys become filesystem paths under the data directory, so anything that
/// could traverse or confuse the filesystem is mapped to an underscore.
pub(crate) fn sanitize_filename(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(|c| c == '.' || c == '_').is_empty() {
        "document.pdf".to_string()
    } else {
        sanitized
    }
}
