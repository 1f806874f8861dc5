//! Text extraction
//!
//! Pulls plain text (and optionally positioned line blocks) from a subset
//! of pages, with an OCR pass for pages that have no extractable text.
//! The recognition language is threaded explicitly through the options
//! rather than read from process-wide state.

use tracing::info;

use crate::engine::{DocumentEngine, TextBlock};
use crate::error::{RedactError, Result};
use crate::ocr::OcrProvider;

/// OCR settings for [`extract_text`]
pub struct OcrOptions<'a> {
    /// The recognition backend
    pub provider: &'a dyn OcrProvider,
    /// Recognition language, `"eng"` when not set
    pub language: Option<&'a str>,
    /// Run OCR even on pages that already have extractable text
    pub force: bool,
}

/// Options for [`extract_text`]
#[derive(Default)]
pub struct ExtractOptions<'a> {
    /// 0-based pages to extract, all pages when `None`
    pub pages: Option<&'a [usize]>,
    /// Also return positioned line blocks per page
    pub include_positions: bool,
    /// Recognize text on scanned pages
    pub ocr: Option<OcrOptions<'a>>,
}

/// Extracted text for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    /// 0-based page index
    pub page_number: usize,
    /// Plain text content, from the page or from OCR
    pub text: String,
    /// Positioned lines, empty unless requested
    pub blocks: Vec<TextBlock>,
    /// Whether the text came from an OCR pass
    pub ocr_applied: bool,
}

/// Extract text from the selected pages of `pdf_data`.
///
/// When OCR options are given, pages without extractable text are run
/// through the provider (every page with `force`). Provider failures,
/// including a backend that turns out not to be installed, surface as
/// [`RedactError::Ocr`] so the caller can decide whether to retry without
/// OCR.
pub fn extract_text(
    engine: &dyn DocumentEngine,
    pdf_data: &[u8],
    options: &ExtractOptions<'_>,
) -> Result<Vec<PageText>> {
    if pdf_data.is_empty() {
        return Err(RedactError::EmptyInput("Empty PDF data"));
    }

    let doc = engine
        .open(pdf_data)
        .map_err(|e| RedactError::InvalidDocument(e.to_string()))?;
    let page_count = doc.page_count();

    let selected: Vec<usize> = match options.pages {
        Some(pages) => {
            let invalid: Vec<usize> = pages.iter().copied().filter(|&p| p >= page_count).collect();
            if !invalid.is_empty() {
                return Err(RedactError::PageOutOfRange(invalid, page_count));
            }
            pages.to_vec()
        }
        None => (0..page_count).collect(),
    };

    let mut results = Vec::with_capacity(selected.len());

    for &page in &selected {
        let mut text = doc.page_text(page);
        let mut ocr_applied = false;

        if let Some(ocr) = &options.ocr {
            if ocr.force || text.trim().is_empty() {
                let language = ocr.language.unwrap_or("eng");
                text = ocr.provider.ocr_page(doc.as_ref(), page, language)?;
                ocr_applied = true;
            }
        }

        let blocks = if options.include_positions {
            doc.text_blocks(page)
        } else {
            Vec::new()
        };

        results.push(PageText {
            page_number: page,
            text,
            blocks,
            ocr_applied,
        });
    }

    info!(
        pages = results.len(),
        ocr_pages = results.iter().filter(|p| p.ocr_applied).count(),
        "extracted text"
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MockDocumentBuilder, MockDocumentEngine};
    use crate::geometry::Rect;
    use crate::ocr::{MockOcrProvider, OcrError};

    fn two_page_pdf() -> Vec<u8> {
        MockDocumentBuilder::new()
            .page(612.0, 792.0)
            .text("First page text", Rect::new(10.0, 10.0, 120.0, 24.0))
            .page(612.0, 792.0)
            .image(Rect::new(0.0, 0.0, 612.0, 792.0))
            .bytes()
    }

    #[test]
    fn test_extracts_all_pages() {
        let pdf = two_page_pdf();
        let pages =
            extract_text(&MockDocumentEngine::new(), &pdf, &ExtractOptions::default()).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text, "First page text");
        assert!(pages[1].text.is_empty());
        assert!(!pages[0].ocr_applied);
    }

    #[test]
    fn test_page_selection() {
        let pdf = two_page_pdf();
        let options = ExtractOptions {
            pages: Some(&[1]),
            ..Default::default()
        };
        let pages = extract_text(&MockDocumentEngine::new(), &pdf, &options).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);
    }

    #[test]
    fn test_invalid_pages_are_listed() {
        let pdf = two_page_pdf();
        let options = ExtractOptions {
            pages: Some(&[0, 5, 9]),
            ..Default::default()
        };
        match extract_text(&MockDocumentEngine::new(), &pdf, &options) {
            Err(RedactError::PageOutOfRange(invalid, count)) => {
                assert_eq!(invalid, vec![5, 9]);
                assert_eq!(count, 2);
            }
            other => panic!("Expected PageOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_positions_are_numbered() {
        let pdf = MockDocumentBuilder::new()
            .page(612.0, 792.0)
            .text("Alpha", Rect::new(10.0, 10.0, 50.0, 24.0))
            .text("Beta", Rect::new(10.0, 30.0, 50.0, 44.0))
            .bytes();
        let options = ExtractOptions {
            include_positions: true,
            ..Default::default()
        };
        let pages = extract_text(&MockDocumentEngine::new(), &pdf, &options).unwrap();
        assert_eq!(pages[0].blocks.len(), 2);
        assert_eq!(pages[0].blocks[0].text, "Alpha");
        assert_eq!(pages[0].blocks[0].block_number, 0);
        assert_eq!(pages[0].blocks[1].block_number, 1);
        assert_eq!(pages[0].blocks[1].rect, Rect::new(10.0, 30.0, 50.0, 44.0));
    }

    #[test]
    fn test_ocr_fills_blank_pages_only() {
        let pdf = two_page_pdf();
        let provider = MockOcrProvider::new("Recognized scan");
        let options = ExtractOptions {
            ocr: Some(OcrOptions {
                provider: &provider,
                language: None,
                force: false,
            }),
            ..Default::default()
        };
        let pages = extract_text(&MockDocumentEngine::new(), &pdf, &options).unwrap();
        assert_eq!(pages[0].text, "First page text");
        assert!(!pages[0].ocr_applied);
        assert_eq!(pages[1].text, "Recognized scan");
        assert!(pages[1].ocr_applied);
    }

    #[test]
    fn test_forced_ocr_replaces_existing_text() {
        let pdf = two_page_pdf();
        let provider = MockOcrProvider::new("Recognized scan");
        let options = ExtractOptions {
            ocr: Some(OcrOptions {
                provider: &provider,
                language: Some("deu"),
                force: true,
            }),
            ..Default::default()
        };
        let pages = extract_text(&MockDocumentEngine::new(), &pdf, &options).unwrap();
        assert_eq!(pages[0].text, "Recognized scan");
        assert!(pages[0].ocr_applied);
    }

    #[test]
    fn test_missing_backend_error_surfaces() {
        let pdf = two_page_pdf();
        let provider = MockOcrProvider::unavailable();
        let options = ExtractOptions {
            ocr: Some(OcrOptions {
                provider: &provider,
                language: None,
                force: false,
            }),
            ..Default::default()
        };
        match extract_text(&MockDocumentEngine::new(), &pdf, &options) {
            Err(RedactError::Ocr(OcrError::BackendUnavailable(_))) => {}
            other => panic!("Expected backend-unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_backend_irrelevant_when_ocr_not_needed() {
        // Page 0 has text and force is off, so the provider is never asked
        let pdf = two_page_pdf();
        let provider = MockOcrProvider::unavailable();
        let options = ExtractOptions {
            pages: Some(&[0]),
            ocr: Some(OcrOptions {
                provider: &provider,
                language: None,
                force: false,
            }),
            ..Default::default()
        };
        let pages = extract_text(&MockDocumentEngine::new(), &pdf, &options).unwrap();
        assert_eq!(pages[0].text, "First page text");
        assert!(!pages[0].ocr_applied);
    }

    #[test]
    fn test_rejects_empty_and_corrupt() {
        let engine = MockDocumentEngine::new();
        assert!(matches!(
            extract_text(&engine, b"", &ExtractOptions::default()),
            Err(RedactError::EmptyInput(_))
        ));
        assert!(matches!(
            extract_text(&engine, b"junk", &ExtractOptions::default()),
            Err(RedactError::InvalidDocument(_))
        ));
    }
}
