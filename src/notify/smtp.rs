//! SMTP transport over a per-send authenticated STARTTLS session

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::error::{Error, Result};
use crate::types::message::EmailMessage;

use super::{timestamped_subject, Notifier, SendReport};

/// Notifier that opens and tears down one authenticated SMTP session per
/// send. No pooling, no retry, no queue.
pub struct SmtpNotifier {
    config: SmtpConfig,
}

impl SmtpNotifier {
    /// Create a notifier from the injected configuration
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Assemble the wire message and collect per-attachment warnings.
    ///
    /// Attachment paths are checked at assembly time; a missing path yields
    /// a warning for that attachment while the rest of the message is built
    /// normally.
    pub fn build_message(&self, message: &EmailMessage) -> Result<(Message, SendReport)> {
        let subject = timestamped_subject(&message.subject, &message.original_filename);
        let mut report = SendReport::default();

        let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(message.body.clone()));

        for path in &message.attachments {
            if !path.exists() {
                tracing::warn!("attachment file not found: {}", path.display());
                report
                    .warnings
                    .push(Error::MissingAttachment(path.clone()).to_string());
                continue;
            }

            let data = match std::fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("failed to read attachment {}: {}", path.display(), e);
                    report
                        .warnings
                        .push(format!("failed to read attachment {}: {}", path.display(), e));
                    continue;
                }
            };

            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());

            let content_type = ContentType::parse("application/octet-stream")
                .map_err(|e| Error::Internal(format!("invalid content type: {}", e)))?;

            multipart = multipart.singlepart(Attachment::new(filename).body(data, content_type));
        }

        let wire = Message::builder()
            .from(
                self.config
                    .address
                    .parse()
                    .map_err(|e| Error::email(format!("invalid sender address: {}", e)))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| Error::email(format!("invalid recipient address: {}", e)))?)
            .subject(subject)
            .multipart(multipart)
            .map_err(|e| Error::email(format!("failed to build message: {}", e)))?;

        Ok((wire, report))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<SendReport> {
        let (wire, report) = self.build_message(message)?;

        let credentials = Credentials::new(
            self.config.address.clone(),
            self.config.password.clone(),
        );

        // Fresh transport per call: plain connection upgraded via STARTTLS,
        // then authenticated, then dropped.
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .map_err(|e| Error::email(format!("failed to configure relay: {}", e)))?
            .port(self.config.port)
            .credentials(credentials)
            .build();

        mailer
            .send(wire)
            .await
            .map_err(|e| Error::email(e.to_string()))?;

        tracing::info!(
            to = %message.to,
            attachments = message.attachments.len() - report.warnings.len(),
            "audit email sent"
        );

        Ok(report)
    }

    fn name(&self) -> &str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn notifier() -> SmtpNotifier {
        SmtpNotifier::new(SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            address: "sender@example.com".to_string(),
            password: "secret".to_string(),
        })
    }

    fn message(attachments: Vec<PathBuf>) -> EmailMessage {
        EmailMessage::new(
            "audit@example.com",
            "New File Upload - Document #1",
            "A new document (#1) has been uploaded for comparison.",
            attachments,
            "contract.docx",
        )
    }

    #[test]
    fn test_message_builds_with_existing_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document_1_20240715_120000.txt");
        std::fs::write(&path, "Hello\nWorld").unwrap();

        let (wire, report) = notifier().build_message(&message(vec![path])).unwrap();
        assert!(report.warnings.is_empty());

        let formatted = String::from_utf8(wire.formatted()).unwrap();
        assert!(formatted.contains("document_1_20240715_120000.txt"));
    }

    #[test]
    fn test_missing_attachment_warns_but_message_still_builds() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "content").unwrap();
        let missing_a = dir.path().join("missing_a.txt");
        let missing_b = dir.path().join("missing_b.txt");

        let (wire, report) = notifier()
            .build_message(&message(vec![missing_a.clone(), present, missing_b.clone()]))
            .unwrap();

        // Exactly one warning per missing path
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("missing_a.txt"));
        assert!(report.warnings[1].contains("missing_b.txt"));

        let formatted = String::from_utf8(wire.formatted()).unwrap();
        assert!(formatted.contains("present.txt"));
        assert!(!formatted.contains("missing_a.txt"));
    }

    #[test]
    fn test_subject_is_timestamped() {
        let (wire, _) = notifier().build_message(&message(Vec::new())).unwrap();
        let formatted = String::from_utf8(wire.formatted()).unwrap();
        assert!(formatted.contains("New File Upload - Document #1 - contract.docx - "));
    }

    #[test]
    fn test_invalid_recipient_is_email_send_error() {
        let mut msg = message(Vec::new());
        msg.to = "not an address".to_string();

        assert!(matches!(
            notifier().build_message(&msg),
            Err(Error::EmailSend(_))
        ));
    }
}
