//! Audit trail: one email per upload with the extracted content attached

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AuditConfig;
use crate::error::Result;
use crate::extraction;
use crate::notify::{eastern_timestamp, Notifier, SendReport};
use crate::types::document::UploadedDocument;
use crate::types::message::EmailMessage;

/// Side-channel notification sent on every upload, independent of
/// comparison outcome.
pub struct AuditTrail {
    notifier: Arc<dyn Notifier>,
    config: AuditConfig,
}

impl AuditTrail {
    /// Create an audit trail over the given notifier
    pub fn new(notifier: Arc<dyn Notifier>, config: AuditConfig) -> Self {
        Self { notifier, config }
    }

    /// Extract the document text, stage it as a transient attachment file,
    /// and email it to the fixed audit recipient.
    ///
    /// The staged file carries the slot and an Eastern timestamp in its name
    /// to keep simultaneous sessions from colliding, and is deleted after the
    /// notifier returns, success or failure. A payload that fails extraction
    /// returns [`crate::Error::DocumentParse`] before any file or email I/O.
    pub async fn record_upload(&self, doc: &UploadedDocument) -> Result<SendReport> {
        let extracted = extraction::extract_text(&doc.content)?;

        let path = self.staging_path(doc);
        if let Err(e) = tokio::fs::write(&path, extracted.content.as_bytes()).await {
            // A partial write must not outlive this call either
            let _ = tokio::fs::remove_file(&path).await;
            return Err(e.into());
        }

        let message = EmailMessage::new(
            self.config.recipient.clone(),
            format!("New File Upload - Document #{}", doc.slot),
            format!(
                "A new document (#{}) has been uploaded for comparison. Please find the content attached.",
                doc.slot
            ),
            vec![path.clone()],
            doc.filename.clone(),
        );

        let outcome = self.notifier.send(&message).await;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("failed to remove staged file {}: {}", path.display(), e);
        }

        outcome
    }

    /// `document_{slot}_{timestamp}.txt` inside the configured work dir
    fn staging_path(&self, doc: &UploadedDocument) -> PathBuf {
        self.config
            .work_dir
            .join(format!("document_{}_{}.txt", doc.slot, eastern_timestamp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::notify::SendReport;
    use crate::types::document::DocumentSlot;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::io::Cursor;

    /// Notifier that records messages and checks the attachment exists at
    /// send time; can be scripted to fail.
    struct RecordingNotifier {
        fail: bool,
        sent: Mutex<Vec<EmailMessage>>,
        attachment_seen: Mutex<Vec<bool>>,
    }

    impl RecordingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
                attachment_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, message: &EmailMessage) -> Result<SendReport> {
            let all_present = message.attachments.iter().all(|p| p.exists());
            self.attachment_seen.lock().push(all_present);
            self.sent.lock().push(message.clone());

            if self.fail {
                Err(Error::email("535 authentication failed"))
            } else {
                Ok(SendReport::default())
            }
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = docx_rs::Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*text)),
            );
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    fn trail(notifier: Arc<RecordingNotifier>, work_dir: &std::path::Path) -> AuditTrail {
        AuditTrail::new(
            notifier,
            AuditConfig {
                recipient: "audit@example.com".to_string(),
                work_dir: work_dir.to_path_buf(),
            },
        )
    }

    fn staged_files(dir: &std::path::Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[tokio::test]
    async fn test_staged_file_deleted_after_successful_send() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new(false));
        let trail = trail(notifier.clone(), dir.path());

        let doc = UploadedDocument::new(DocumentSlot::One, "a.docx", docx_bytes(&["Hello"]));
        trail.record_upload(&doc).await.unwrap();

        // The attachment existed while the notifier ran, and is gone now
        assert_eq!(*notifier.attachment_seen.lock(), vec![true]);
        assert!(staged_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_staged_file_deleted_after_failed_send() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new(true));
        let trail = trail(notifier.clone(), dir.path());

        let doc = UploadedDocument::new(DocumentSlot::Two, "b.docx", docx_bytes(&["Hello"]));
        let outcome = trail.record_upload(&doc).await;

        assert!(matches!(outcome, Err(Error::EmailSend(_))));
        assert!(staged_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_message_shape() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new(false));
        let trail = trail(notifier.clone(), dir.path());

        let doc = UploadedDocument::new(DocumentSlot::Two, "draft_v2.docx", docx_bytes(&["x"]));
        trail.record_upload(&doc).await.unwrap();

        let sent = notifier.sent.lock();
        assert_eq!(sent.len(), 1);
        let message = &sent[0];
        assert_eq!(message.to, "audit@example.com");
        assert_eq!(message.subject, "New File Upload - Document #2");
        assert!(message.body.contains("(#2)"));
        assert_eq!(message.original_filename, "draft_v2.docx");
        assert_eq!(message.attachments.len(), 1);
        let name = message.attachments[0].file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("document_2_"));
        assert!(name.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_malformed_document_skips_notifier_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new(false));
        let trail = trail(notifier.clone(), dir.path());

        let doc = UploadedDocument::new(DocumentSlot::One, "bad.docx", b"not a docx".to_vec());
        let outcome = trail.record_upload(&doc).await;

        assert!(matches!(outcome, Err(Error::DocumentParse(_))));
        assert!(notifier.sent.lock().is_empty());
        assert!(staged_files(dir.path()).is_empty());
    }
}
