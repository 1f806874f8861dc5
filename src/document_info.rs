//! Whole-document analysis
//!
//! Summarizes a document before any redaction work: page geometry, text
//! and image presence, a scanned-page heuristic, existing annotations, and
//! the metadata subset callers care about. Encrypted documents are
//! rejected because none of these facts can be read without content
//! access.

use tracing::info;

use crate::engine::{DocumentEngine, DocumentMetadata};
use crate::error::{RedactError, Result};

/// Per-page facts
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    /// 0-based page index
    pub page_number: usize,
    /// Whether the page has any extractable text
    pub has_text: bool,
    /// Whether the page carries embedded images
    pub has_images: bool,
    /// Images but no text: probably a scan that needs OCR
    pub likely_scanned: bool,
    /// Page width in page units
    pub width: f64,
    /// Page height in page units
    pub height: f64,
}

/// Document-level summary returned by [`get_document_info`]
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    /// Number of pages
    pub page_count: usize,
    /// Size of the input bytes
    pub file_size_bytes: usize,
    /// Whether the document is encrypted
    pub is_encrypted: bool,
    /// Whether any page has extractable text
    pub has_text_content: bool,
    /// Whether any page carries annotations
    pub has_annotations: bool,
    /// Total annotations across all pages
    pub existing_annotation_count: usize,
    /// Title, author, producer, and creator metadata
    pub metadata: DocumentMetadata,
    /// Per-page facts, in page order
    pub pages: Vec<PageInfo>,
}

/// Analyze `pdf_data` and summarize its structure.
pub fn get_document_info(engine: &dyn DocumentEngine, pdf_data: &[u8]) -> Result<DocumentInfo> {
    if pdf_data.is_empty() {
        return Err(RedactError::EmptyInput("Empty PDF data"));
    }

    let doc = engine
        .open(pdf_data)
        .map_err(|e| RedactError::InvalidDocument(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(RedactError::InvalidDocument("PDF is encrypted".to_string()));
    }

    let mut has_text_content = false;
    let mut has_annotations = false;
    let mut existing_annotation_count = 0;
    let mut pages = Vec::with_capacity(doc.page_count());

    for page_number in 0..doc.page_count() {
        let has_text = !doc.page_text(page_number).trim().is_empty();
        let has_images = doc.page_has_images(page_number);
        has_text_content |= has_text;

        let annotations = doc.annotation_count(page_number);
        if annotations > 0 {
            has_annotations = true;
            existing_annotation_count += annotations;
        }

        let (width, height) = doc.page_size(page_number);
        pages.push(PageInfo {
            page_number,
            has_text,
            has_images,
            likely_scanned: has_images && !has_text,
            width,
            height,
        });
    }

    info!(
        pages = doc.page_count(),
        bytes = pdf_data.len(),
        annotations = existing_annotation_count,
        "analyzed document"
    );

    Ok(DocumentInfo {
        page_count: doc.page_count(),
        file_size_bytes: pdf_data.len(),
        is_encrypted: doc.is_encrypted(),
        has_text_content,
        has_annotations,
        existing_annotation_count,
        metadata: doc.metadata(),
        pages,
    })
}
