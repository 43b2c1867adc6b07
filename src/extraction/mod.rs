//! Document text extraction

mod docx;

pub use docx::{extract_text, ExtractedText};
