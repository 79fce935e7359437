use crate::search::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Extension;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared admin password, resolved once at startup.
pub struct AdminConfig {
    password: String,
}

impl AdminConfig {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Reads `ADMIN_PASSWORD`, falling back to a development default.
    pub fn from_env() -> Self {
        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        Self::new(password)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

#[derive(Debug, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPasswordResponse {
    pub success: bool,
}

/// `POST /api/admin/verify-password` — unlocks the admin screen.
pub async fn handle_verify_password(
    Extension(config): Extension<Arc<AdminConfig>>,
    Json(req): Json<VerifyPasswordRequest>,
) -> Response {
    if req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Password is required")),
        )
            .into_response();
    }

    if config.matches(&req.password) {
        Json(VerifyPasswordResponse { success: true }).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Incorrect password")),
        )
            .into_response()
    }
}
