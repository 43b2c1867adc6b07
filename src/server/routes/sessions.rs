//! Session lifecycle endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::response::SessionCreated;

/// POST /api/sessions - Create a comparison session
pub async fn create_session(State(state): State<AppState>) -> Json<SessionCreated> {
    let (session_id, created_at) = state.create_session();
    tracing::info!(%session_id, "comparison session created");

    Json(SessionCreated {
        session_id,
        created_at,
    })
}

/// DELETE /api/sessions/:id - Clear a session and its documents
pub async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.clear_session(&id)?;
    tracing::info!(session_id = %id, "comparison session cleared");

    Ok(Json(serde_json::json!({ "cleared": true })))
}
