//! Comparison endpoint

use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::comparison::ComparisonRequest;
use crate::error::Result;
use crate::extraction;
use crate::server::state::AppState;
use crate::types::response::CompareResponse;

/// POST /api/sessions/:id/compare - Compare the two documents of a session
pub async fn compare_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompareResponse>> {
    Ok(Json(run_comparison(&state, &id).await?))
}

/// Readiness-gated comparison for one session.
///
/// Text is re-extracted from the stored bytes here, independent of the audit
/// path's earlier extraction; the two paths share no cache. With fewer than
/// two documents the waiting notice comes back and no LLM call is made.
pub async fn run_comparison(state: &AppState, session_id: &Uuid) -> Result<CompareResponse> {
    let Some((doc1, doc2)) = state.session_documents(session_id)? else {
        return Ok(CompareResponse::waiting());
    };

    let start = Instant::now();

    let extracted = extraction::extract_text(&doc1.content)
        .and_then(|text1| extraction::extract_text(&doc2.content).map(|text2| (text1, text2)));

    let (text1, text2) = match extracted {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(%session_id, "re-extraction failed: {}", e);
            return Ok(CompareResponse::Failed {
                error: e.to_string(),
            });
        }
    };

    let request = ComparisonRequest::new(text1, text2);

    match state.engine().compare(&request).await {
        Ok(markdown) => {
            let processing_time_ms = start.elapsed().as_millis() as u64;
            tracing::info!(
                %session_id,
                processing_time_ms,
                "comparison analysis complete"
            );
            Ok(CompareResponse::Ready {
                markdown,
                model: state.llm_provider().model().to_string(),
                processing_time_ms,
            })
        }
        Err(e) => {
            tracing::error!(%session_id, "comparison failed: {}", e);
            Ok(CompareResponse::Failed {
                error: e.to_string(),
            })
        }
    }
}
