use crate::error::{Error, Result};
use std::{panic, path::Path};

/// Extracts the text of every page, in document order.
///
/// `pdf-extract` panics on some unsupported font encodings, so panics are turned
/// into `Error::Extraction` like any other parse failure.
pub fn extract_pdf_pages(path: &Path, contents: &[u8]) -> Result<Vec<String>> {
    let extraction = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(contents));

    let pages = match extraction {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            return Err(Error::Extraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "PDF parser panicked".to_string());

            return Err(Error::Extraction {
                path: path.to_path_buf(),
                reason,
            });
        }
    };

    tracing::debug!("Read {} pages from {}", pages.len(), path.display());

    Ok(pages)
}
