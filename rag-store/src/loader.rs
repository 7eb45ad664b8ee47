//! Source document loading.
//!
//! PDFs are read page by page with `lopdf`; any other extension is read as a
//! single UTF-8 page. Pages whose text cannot be extracted are skipped with a
//! warning, but a document without any text is an error.

use std::path::Path;

use tracing::{debug, warn};

use crate::{errors::RagError, record::PageText};

/// Loads `path` into per-page text.
///
/// # Errors
/// - `RagError::MissingDocument` if the file does not exist
/// - `RagError::Io` / `RagError::Pdf` on read or parse failures
/// - `RagError::EmptyDocument` if no page yields text
pub fn load_document(path: &Path) -> Result<Vec<PageText>, RagError> {
    if !path.is_file() {
        return Err(RagError::MissingDocument(path.to_path_buf()));
    }

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let pages = if is_pdf {
        load_pdf(path)?
    } else {
        load_text(path)?
    };

    if pages.iter().all(|p| p.text.trim().is_empty()) {
        return Err(RagError::EmptyDocument(path.to_path_buf()));
    }
    Ok(pages)
}

fn load_pdf(path: &Path) -> Result<Vec<PageText>, RagError> {
    let doc = lopdf::Document::load(path).map_err(|e| RagError::Pdf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut pages = Vec::new();
    for page in doc.get_pages().into_keys() {
        match doc.extract_text(&[page]) {
            Ok(text) => {
                debug!(page, chars = text.chars().count(), "pdf page extracted");
                pages.push(PageText { page, text });
            }
            Err(e) => warn!(page, error = %e, "skipping pdf page without extractable text"),
        }
    }
    Ok(pages)
}

fn load_text(path: &Path) -> Result<Vec<PageText>, RagError> {
    let text = std::fs::read_to_string(path).map_err(|source| RagError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(vec![PageText { page: 1, text }])
}
