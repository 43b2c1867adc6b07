//! Uploaded document and slot types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the two document positions in a comparison session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DocumentSlot {
    /// Document #1, the base for comparison
    One,
    /// Document #2, compared against document #1
    Two,
}

impl DocumentSlot {
    /// All slots, in display order
    pub const ALL: [DocumentSlot; 2] = [DocumentSlot::One, DocumentSlot::Two];

    /// Slot number as shown to the user (1 or 2)
    pub fn number(&self) -> u8 {
        match self {
            DocumentSlot::One => 1,
            DocumentSlot::Two => 2,
        }
    }

    /// Zero-based index for slot storage
    pub fn index(&self) -> usize {
        (self.number() - 1) as usize
    }

    /// Parse a user-supplied slot field ("1" or "2")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(DocumentSlot::One),
            "2" => Some(DocumentSlot::Two),
            _ => None,
        }
    }

    /// The other slot of the pair
    pub fn other(&self) -> Self {
        match self {
            DocumentSlot::One => DocumentSlot::Two,
            DocumentSlot::Two => DocumentSlot::One,
        }
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<DocumentSlot> for u8 {
    fn from(slot: DocumentSlot) -> Self {
        slot.number()
    }
}

impl TryFrom<u8> for DocumentSlot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DocumentSlot::One),
            2 => Ok(DocumentSlot::Two),
            other => Err(format!("invalid document slot: {}", other)),
        }
    }
}

/// A document uploaded into one slot of a comparison session.
///
/// Transient: lives only as long as the session that owns it.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Slot this document fills
    pub slot: DocumentSlot,
    /// Original filename as supplied by the client
    pub filename: String,
    /// Raw .docx bytes
    pub content: Vec<u8>,
    /// Upload time
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedDocument {
    /// Create an uploaded document stamped with the current time
    pub fn new(slot: DocumentSlot, filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            slot,
            filename: filename.into(),
            content,
            uploaded_at: Utc::now(),
        }
    }
}
