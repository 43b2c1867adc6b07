//! API routes for the comparison server

pub mod compare;
pub mod sessions;
pub mod ui;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Session lifecycle
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/:id", delete(sessions::clear_session))
        // Document upload - with larger body limit for .docx payloads
        .route(
            "/sessions/:id/documents",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Comparison
        .route("/sessions/:id/compare", post(compare::compare_documents))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "doc-compare",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Document comparison with LLM-powered difference analysis and risk assessment",
        "endpoints": {
            "POST /api/sessions": "Create a comparison session",
            "POST /api/sessions/:id/documents": "Upload a document into slot 1 or 2 (multipart: slot, file)",
            "POST /api/sessions/:id/compare": "Compare the two documents once both slots are filled",
            "DELETE /api/sessions/:id": "Clear a session and its documents",
            "GET /api/info": "This catalog"
        },
        "notes": {
            "audit_trail": "Every upload emails the extracted content to the audit address",
            "readiness": "Comparison runs only when both slots hold a successfully-read document"
        }
    }))
}
