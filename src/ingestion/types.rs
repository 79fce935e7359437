//! Ingestion Data Types
//!
//! Defines the Data Transfer Objects (DTOs) used by the upload, listing,
//! deletion, and signed-URL endpoints.

use serde::{Deserialize, Serialize};

use crate::storage::documents::DocumentRecord;

/// Response returned to the client after a successful upload.
///
/// Echoes the stored row so the frontend can render the new entry without a
/// follow-up fetch.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file: UploadedFile,
}

/// The subset of a stored document row exposed to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub filename: String,
    pub blob_key: String,
    pub created_at: u64,
}

impl From<&DocumentRecord> for UploadedFile {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            id: record.id.clone(),
            filename: record.filename.clone(),
            blob_key: record.blob_key.clone(),
            created_at: record.created_at,
        }
    }
}

/// Body of the delete endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub file_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// One entry in the file listing; the extracted text is deliberately not
/// exposed here.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: String,
    pub filename: String,
    pub created_at: u64,
}

#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Deserialize)]
pub struct PdfUrlParams {
    pub key: Option<String>,
}

/// Response of the signed-URL endpoint: a time-limited path served by the
/// blob handler.
#[derive(Debug, Serialize)]
pub struct PdfUrlResponse {
    pub url: String,
}
