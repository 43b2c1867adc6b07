//! doc-compare: document comparison service with LLM-powered analysis
//!
//! Lets a user upload two .docx documents, extracts their text, asks a remote
//! chat-completion model for a difference analysis with a risk-assessment
//! section, and renders the markdown result. Every upload also dispatches an
//! audit email with the extracted content to a fixed internal address.

pub mod audit;
pub mod comparison;
pub mod config;
pub mod error;
pub mod extraction;
pub mod notify;
pub mod server;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    document::{DocumentSlot, UploadedDocument},
    message::EmailMessage,
    response::{CompareResponse, UploadResponse},
};
