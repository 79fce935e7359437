use axum::extract::{DefaultBodyLimit, Extension};
use axum::{
    Router,
    routing::{delete, get, post},
};
use pdf_search::admin::handlers::{handle_verify_password, AdminConfig};
use pdf_search::ingestion::handlers::{
    handle_delete, handle_list_files, handle_pdf_url, handle_upload,
};
use pdf_search::search::handlers::handle_search;
use pdf_search::storage::blob::BlobStore;
use pdf_search::storage::documents::DocumentStore;
use pdf_search::storage::handlers::handle_get_blob;
use pdf_search::storage::index::{MemoryIndex, TermIndex};
use std::net::SocketAddr;
use std::sync::Arc;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> [--data-dir <path>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:3000", args[0]);
        eprintln!(
            "Example: {} --bind 0.0.0.0:3000 --data-dir /var/lib/pdf-search",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_dir = "data".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data-dir" => {
                data_dir = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    tracing::info!("Starting pdf-search on {}", bind_addr);
    tracing::info!("Blob data directory: {}", data_dir);

    // 1. Storage layer:
    let documents = Arc::new(DocumentStore::new());
    let index: Arc<dyn TermIndex> = Arc::new(MemoryIndex::new());
    let blobs = Arc::new(BlobStore::new(&data_dir));
    let admin = Arc::new(AdminConfig::from_env());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/upload", post(handle_upload))
        .route("/api/search", get(handle_search))
        .route("/api/files", get(handle_list_files))
        .route("/api/delete", delete(handle_delete))
        .route("/api/pdf-url", get(handle_pdf_url))
        .route("/api/admin/verify-password", post(handle_verify_password))
        .route("/blob/:token", get(handle_get_blob))
        .layer(Extension(documents))
        .layer(Extension(index))
        .layer(Extension(blobs))
        .layer(Extension(admin))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
