//! Resume text extraction.
//!
//! PDFs are read page by page and the page texts are joined in document order.
//! Plain-text resumes are read as-is.

mod pdf;

use crate::error::{Error, Result};
use std::{fs, path::Path};

pub use pdf::extract_pdf_pages;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Picks a kind from the extension, falling back to sniffing the file header.
    pub fn detect(path: &Path, contents: &[u8]) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" | "md" => Ok(Self::PlainText),
            _ if contents.starts_with(PDF_MAGIC) => Ok(Self::Pdf),
            "" => Err(Error::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Reads the resume at `path` and returns its full text.
pub fn extract_text(path: &Path) -> Result<String> {
    let contents = fs::read(path).map_err(|e| Error::io(path, e))?;

    let text = match DocumentKind::detect(path, &contents)? {
        DocumentKind::Pdf => extract_pdf_pages(path, &contents)?.concat(),
        DocumentKind::PlainText => String::from_utf8(contents).map_err(|e| {
            Error::Extraction {
                path: path.to_path_buf(),
                reason: format!("not valid UTF-8: {e}"),
            }
        })?,
    };

    if text.trim().is_empty() {
        tracing::warn!("No extractable text in {}", path.display());
    } else {
        tracing::debug!("Extracted {} characters from {}", text.len(), path.display());
    }

    Ok(text)
}
