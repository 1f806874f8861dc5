use thiserror::Error;

use crate::engine::EngineError;
use crate::ocr::OcrError;

/// Result type for redaction operations
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors reported by the redaction pipeline and its sibling operations.
///
/// Per-entry problems inside an XFDF document are never errors: malformed
/// entries are skipped and counted, and the count is surfaced in the
/// operation outcome instead.
#[derive(Error, Debug)]
pub enum RedactError {
    /// A required input was empty (document bytes or XFDF text)
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// The document bytes could not be opened, or the document is
    /// encrypted and the operation needs content access
    #[error("Invalid or corrupt PDF: {0}")]
    InvalidDocument(String),

    /// The XFDF text is not well-formed XML
    #[error("Malformed XFDF: {0}")]
    MalformedXfdf(String),

    /// An explicit page selection referenced pages outside the document
    #[error("Page numbers out of range: {0:?} (document has {1} pages)")]
    PageOutOfRange(Vec<usize>, usize),

    /// A style option failed validation (e.g. a bad hex color)
    #[error("Invalid style configuration: {0}")]
    InvalidStyle(String),

    /// OCR adapter error
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Document engine error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// XFDF serialization error
    #[error("XFDF serialization error: {0}")]
    XfdfWrite(#[from] quick_xml::Error),
}

impl RedactError {
    /// Whether this error should map to a caller-error class at a
    /// transport boundary, as opposed to an unexpected internal failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RedactError::EmptyInput(_)
                | RedactError::InvalidDocument(_)
                | RedactError::MalformedXfdf(_)
                | RedactError::PageOutOfRange(_, _)
                | RedactError::InvalidStyle(_)
        )
    }
}
