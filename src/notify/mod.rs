//! Email notification over SMTP

mod smtp;

pub use smtp::SmtpNotifier;

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::America::New_York;

use crate::error::Result;
use crate::types::message::EmailMessage;

/// Outcome of a dispatched send.
///
/// `warnings` holds one entry per attachment path that was missing at send
/// time; the message itself still went out.
#[derive(Debug, Clone, Default)]
pub struct SendReport {
    /// Per-attachment warnings, user-visible
    pub warnings: Vec<String>,
}

/// Trait for outbound notification transports.
///
/// Implementations:
/// - [`SmtpNotifier`]: authenticated STARTTLS session per send
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one message. Exactly one outbound email per successful call;
    /// a failed send is not persisted for replay.
    async fn send(&self, message: &EmailMessage) -> Result<SendReport>;

    /// Transport name for logging
    fn name(&self) -> &str;
}

/// Wall-clock timestamp in US Eastern time, formatted `YYYYMMDD_HHMMSS`.
///
/// Used both for email subjects and for transient attachment filenames.
pub fn eastern_timestamp() -> String {
    Utc::now()
        .with_timezone(&New_York)
        .format("%Y%m%d_%H%M%S")
        .to_string()
}

/// Render the final subject line: `"{base} - {filename} - {timestamp}"`
pub fn timestamped_subject(base: &str, original_filename: &str) -> String {
    format!("{} - {} - {}", base, original_filename, eastern_timestamp())
}
