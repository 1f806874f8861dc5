//! OCR adapter interface
//!
//! Text recognition is delegated to a pluggable provider, so the extraction
//! pipeline can run against local engines (e.g. Tesseract) or remote ones
//! without knowing which is installed. A missing backend is a distinct
//! error kind from a failed recognition pass: callers are expected to
//! degrade or skip when the backend is simply not installed.

use crate::engine::EngineDocument;

/// Result type for OCR operations
pub type OcrResult<T> = Result<T, OcrError>;

/// Errors that can occur during OCR processing
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    /// The OCR backend is not installed or not configured
    #[error("OCR backend not available: {0}")]
    BackendUnavailable(String),

    /// The OCR pass ran but failed
    #[error("OCR processing failed: {0}")]
    Processing(String),
}

/// A text-recognition backend operating on one document page.
pub trait OcrProvider {
    /// Recognize the text of `page`, rendered from `doc`, using the given
    /// recognition language (e.g. `"eng"`).
    fn ocr_page(&self, doc: &dyn EngineDocument, page: usize, language: &str)
        -> OcrResult<String>;
}

/// A configurable OCR provider for tests.
///
/// Returns a fixed text for every page, or a backend-unavailable error when
/// built with [`MockOcrProvider::unavailable`].
#[derive(Debug, Clone)]
pub struct MockOcrProvider {
    text: String,
    available: bool,
}

impl MockOcrProvider {
    /// A provider that recognizes every page as `text`
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            available: true,
        }
    }

    /// A provider whose backend is not installed
    pub fn unavailable() -> Self {
        Self {
            text: String::new(),
            available: false,
        }
    }
}

impl OcrProvider for MockOcrProvider {
    fn ocr_page(
        &self,
        _doc: &dyn EngineDocument,
        _page: usize,
        _language: &str,
    ) -> OcrResult<String> {
        if !self.available {
            return Err(OcrError::BackendUnavailable(
                "tesseract is not installed".to_string(),
            ));
        }
        Ok(self.text.clone())
    }
}
