//! Raw text extraction from manifest documents.

use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;

/// Page separator recognized in plain-text documents.
pub const FORM_FEED: char = '\x0c';

/// Returns the raw text of a document, one string per page, in page order.
pub trait TextSource {
    /// Extracts page text from the document at `path`.
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// PDF text extraction backed by `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        std::fs::metadata(path).map_err(|e| DocumentError::from_io(path, &e))?;

        let document = lopdf::Document::load(path).map_err(|e| DocumentError::Other {
            path: path.to_path_buf(),
            message: format!("failed to parse PDF: {e}"),
        })?;

        // get_pages is keyed by 1-based page number, so iteration is in page order
        let mut pages = Vec::new();
        for page_number in document.get_pages().into_keys() {
            let text = document
                .extract_text(&[page_number])
                .map_err(|e| DocumentError::Other {
                    path: path.to_path_buf(),
                    message: format!("failed to extract text from page {page_number}: {e}"),
                })?;
            debug!(page = page_number, chars = text.len(), "extracted page text");
            pages.push(text);
        }

        Ok(pages)
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

/// UTF-8 text documents, with pages separated by form feeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::from_io(path, &e))?;
        Ok(content.split(FORM_FEED).map(str::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Picks a text source from the document extension.
///
/// `.txt` and `.text` are read as plain text; everything else is treated as
/// PDF, which is what return letters are delivered as.
#[must_use]
pub fn source_for(path: &Path) -> Box<dyn TextSource> {
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt") || e.eq_ignore_ascii_case("text"));

    if is_text {
        Box::new(PlainTextSource)
    } else {
        Box::new(PdfTextSource)
    }
}
