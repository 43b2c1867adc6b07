//! Plain-text extraction from .docx documents

use crate::error::{Error, Result};

/// Plain-text rendering of a document's paragraphs, order-preserved.
///
/// Immutable once produced. One line per paragraph; empty paragraphs are
/// preserved as empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Paragraphs joined by newlines, in document order
    pub content: String,
    /// Number of paragraphs in the source document
    pub paragraph_count: usize,
}

impl ExtractedText {
    /// Iterate over the extracted paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// Extract paragraph text from a .docx payload.
///
/// Walks the document tree the same way for every paragraph: runs are
/// concatenated, non-text children are skipped. A payload that is not a
/// well-formed .docx fails with [`Error::DocumentParse`].
pub fn extract_text(data: &[u8]) -> Result<ExtractedText> {
    let doc = docx_rs::read_docx(data).map_err(|e| Error::document_parse(e.to_string()))?;

    let mut paragraphs = Vec::new();

    for child in doc.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(p) => {
                let mut line = String::new();
                for child in p.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(t) = child {
                                line.push_str(&t.text);
                            }
                        }
                    }
                }
                paragraphs.push(line);
            }
            docx_rs::DocumentChild::Table(_) => {
                // Tables are not part of the paragraph stream
            }
            _ => {}
        }
    }

    Ok(ExtractedText {
        paragraph_count: paragraphs.len(),
        content: paragraphs.join("\n"),
    })
}
