//! Core types for the document comparison service

pub mod document;
pub mod message;
pub mod response;

pub use document::{DocumentSlot, UploadedDocument};
pub use message::EmailMessage;
pub use response::{CompareResponse, SessionCreated, UploadResponse};
