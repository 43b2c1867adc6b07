//! Error types for the document comparison service
//!
//! Failures are caught at the boundary of the operation that produced them
//! and converted to user-visible banner payloads; callers branch on the
//! variant, never on message content. Nothing here escalates to a crash.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uuid::Uuid;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the document comparison service
#[derive(Debug, Error)]
pub enum Error {
    /// The uploaded payload is not a well-formed .docx document
    #[error("failed to parse document: {0}")]
    DocumentParse(String),

    /// Transport, auth, or provider failure during the LLM call
    #[error("error generating responses: {0}")]
    LlmInvocation(String),

    /// SMTP transport or authentication failure
    #[error("error sending email: {0}")]
    EmailSend(String),

    /// Attachment path missing at send time (non-fatal, reported per path)
    #[error("attachment file not found: {0}")]
    MissingAttachment(PathBuf),

    /// Malformed client request (bad multipart, unknown slot, ...)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No comparison session with this id
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// Configuration error at startup
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error (temp file handling)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Document parse failure with context
    pub fn document_parse(msg: impl Into<String>) -> Self {
        Self::DocumentParse(msg.into())
    }

    /// LLM invocation failure with context
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::LlmInvocation(msg.into())
    }

    /// Email send failure with context
    pub fn email(msg: impl Into<String>) -> Self {
        Self::EmailSend(msg.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::DocumentParse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Error::LlmInvocation(_) | Error::EmailSend(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operation() {
        let e = Error::document_parse("not a zip archive");
        assert!(e.to_string().contains("failed to parse document"));

        let e = Error::llm("connection refused");
        assert!(e.to_string().contains("error generating responses"));

        let e = Error::email("535 authentication failed");
        assert!(e.to_string().contains("error sending email"));
    }

    #[test]
    fn test_missing_attachment_includes_path() {
        let e = Error::MissingAttachment(PathBuf::from("/tmp/document_1_x.txt"));
        assert!(e.to_string().contains("document_1_x.txt"));
    }
}
