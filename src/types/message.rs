//! Outbound email message type

use std::path::PathBuf;

/// One outbound email. Constructed per send and discarded afterwards.
///
/// `subject` is the base subject; the notifier renders the final
/// `"{subject} - {original_filename} - {timestamp}"` form at send time.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Base subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Local paths to attach; missing paths are reported, not fatal
    pub attachments: Vec<PathBuf>,
    /// Original filename of the upload this message is about
    pub original_filename: String,
}

impl EmailMessage {
    /// Create a new message
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        attachments: Vec<PathBuf>,
        original_filename: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            attachments,
            original_filename: original_filename.into(),
        }
    }
}
