//! Document upload endpoint

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::document::{DocumentSlot, UploadedDocument};
use crate::types::response::UploadResponse;

/// POST /api/sessions/:id/documents - Upload a document into a slot
///
/// Multipart form: a `slot` text field ("1" or "2") and one file field.
pub async fn upload_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    if !state.session_exists(&id) {
        return Err(Error::SessionNotFound(id));
    }

    let (slot, filename, data) = read_upload_fields(multipart).await?;
    tracing::info!(
        session_id = %id,
        %slot,
        filename = %filename,
        bytes = data.len(),
        "document received"
    );

    let doc = UploadedDocument::new(slot, filename, data);
    Ok(Json(handle_upload(&state, &id, doc).await?))
}

/// Run the upload pipeline for one document: audit email first, then slot
/// storage, with the banner chosen by what failed.
///
/// A parse failure leaves the slot empty so a bad payload can never satisfy
/// the comparison readiness predicate; a send failure still fills the slot,
/// since the document itself was read successfully.
pub async fn handle_upload(
    state: &AppState,
    session_id: &Uuid,
    doc: UploadedDocument,
) -> Result<UploadResponse> {
    let slot = doc.slot;
    let filename = doc.filename.clone();

    match state.audit().record_upload(&doc).await {
        Ok(report) => {
            let transition = state.insert_document(session_id, doc)?;
            Ok(UploadResponse::uploaded(
                slot,
                filename,
                transition == crate::session::SlotTransition::Replaced,
                report.warnings,
            ))
        }
        Err(Error::DocumentParse(e)) => {
            tracing::warn!(session_id = %session_id, %slot, "rejected malformed document: {}", e);
            Ok(UploadResponse::parse_failed(slot, filename, e))
        }
        Err(e) => {
            tracing::error!(session_id = %session_id, %slot, "audit email failed: {}", e);
            state.insert_document(session_id, doc)?;
            Ok(UploadResponse::audit_failed(slot, filename, e.to_string()))
        }
    }
}

/// Pull the slot field and the file field out of the multipart body
async fn read_upload_fields(mut multipart: Multipart) -> Result<(DocumentSlot, String, Vec<u8>)> {
    let mut slot = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(format!("failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "slot" {
            let value = field
                .text()
                .await
                .map_err(|e| Error::InvalidRequest(format!("failed to read slot field: {}", e)))?;
            slot = Some(
                DocumentSlot::parse(&value)
                    .ok_or_else(|| Error::InvalidRequest(format!("invalid slot: {}", value)))?,
            );
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("file_{}.docx", Uuid::new_v4()));

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidRequest(format!("failed to read file: {}", e)))?;

        file = Some((filename, data.to_vec()));
    }

    let slot = slot.ok_or_else(|| Error::InvalidRequest("missing slot field".to_string()))?;
    let (filename, data) =
        file.ok_or_else(|| Error::InvalidRequest("missing file field".to_string()))?;

    Ok((slot, filename, data))
}
