//! PDF text extraction collaborator.

/// Extracts the text layer from in-memory PDF bytes, best-effort.
///
/// Extraction quality varies by PDF (text layer vs scanned images); a PDF
/// that cannot be parsed yields the empty string so the document is still
/// ingested, just with zero postings. This function never errors.
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("PDF text extraction failed: {}", err);
            String::new()
        }
    }
}
