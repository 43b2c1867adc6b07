//! API response types
//!
//! Tagged enums so the client branches on `status`, never on message text.
//! The `message` fields carry the banner wording shown in the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::DocumentSlot;

/// Notice shown while fewer than two documents are present
pub const WAITING_NOTICE: &str = "Please upload both documents to see the comparison.";

/// Response to a session create request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    /// Session id to use for uploads and comparison
    pub session_id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Outcome of one document upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadResponse {
    /// Document stored in its slot and audit email dispatched
    Uploaded {
        slot: DocumentSlot,
        filename: String,
        /// True when the slot already held a document
        replaced: bool,
        /// Success banner text
        message: String,
        /// Per-attachment warnings from the notifier (missing paths)
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        warnings: Vec<String>,
    },
    /// Document was stored but the audit email could not be sent
    AuditFailed {
        slot: DocumentSlot,
        filename: String,
        /// Error banner text
        message: String,
        error: String,
    },
    /// The payload is not a well-formed document; the slot stays empty
    ParseFailed {
        slot: DocumentSlot,
        filename: String,
        /// Error banner text
        message: String,
        error: String,
    },
}

impl UploadResponse {
    /// Success banner for a stored upload
    pub fn uploaded(
        slot: DocumentSlot,
        filename: impl Into<String>,
        replaced: bool,
        warnings: Vec<String>,
    ) -> Self {
        Self::Uploaded {
            slot,
            filename: filename.into(),
            replaced,
            message: format!("Document #{} uploaded.", slot),
            warnings,
        }
    }

    /// Error banner when the audit email failed
    pub fn audit_failed(
        slot: DocumentSlot,
        filename: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::AuditFailed {
            slot,
            filename: filename.into(),
            message: format!(
                "Failed to send email for Document #{}. Please try again.",
                slot
            ),
            error: error.into(),
        }
    }

    /// Error banner when the document could not be read
    pub fn parse_failed(
        slot: DocumentSlot,
        filename: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::ParseFailed {
            slot,
            filename: filename.into(),
            message: format!("Could not read Document #{}. Please upload a .docx file.", slot),
            error: error.into(),
        }
    }

    /// True for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

/// Outcome of a comparison request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompareResponse {
    /// Both slots were filled and the model answered
    Ready {
        /// Markdown comparison + risk assessment, verbatim from the model
        markdown: String,
        /// Model that produced the result
        model: String,
        /// Processing time in milliseconds
        processing_time_ms: u64,
    },
    /// Fewer than two documents present; no LLM call was made
    Waiting {
        /// Waiting banner text
        message: String,
    },
    /// Extraction or LLM invocation failed; no comparison section to render
    Failed {
        /// Error banner text
        error: String,
    },
}

impl CompareResponse {
    /// The "waiting for both documents" notice
    pub fn waiting() -> Self {
        Self::Waiting {
            message: WAITING_NOTICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_banners() {
        let ok = UploadResponse::uploaded(DocumentSlot::One, "a.docx", false, Vec::new());
        assert!(ok.is_success());
        match ok {
            UploadResponse::Uploaded { message, .. } => {
                assert_eq!(message, "Document #1 uploaded.");
            }
            _ => panic!("expected Uploaded"),
        }

        let failed = UploadResponse::audit_failed(DocumentSlot::Two, "b.docx", "550 relay denied");
        assert!(!failed.is_success());
        match failed {
            UploadResponse::AuditFailed { message, .. } => {
                assert_eq!(
                    message,
                    "Failed to send email for Document #2. Please try again."
                );
            }
            _ => panic!("expected AuditFailed"),
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let resp = CompareResponse::waiting();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "waiting");
        assert_eq!(json["message"], WAITING_NOTICE);

        let resp = UploadResponse::uploaded(DocumentSlot::One, "a.docx", true, Vec::new());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "uploaded");
        assert_eq!(json["slot"], 1);
        assert_eq!(json["replaced"], true);
        // Empty warnings are omitted from the wire format
        assert!(json.get("warnings").is_none());
    }
}
