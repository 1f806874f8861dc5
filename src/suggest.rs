//! Redaction suggestion generation
//!
//! Searches a document for sensitive text and produces an XFDF exchange
//! document of highlight annotations, one per occurrence, that a reviewer
//! can edit before feeding it to [`crate::redaction::apply_redactions`].

use tracing::info;
use uuid::Uuid;

use crate::engine::DocumentEngine;
use crate::error::{RedactError, Result};
use crate::xfdf::{self, XfdfHighlight};

/// Occurrence summary for one searched text on one page
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionMatch {
    /// The searched text
    pub text: String,
    /// 0-based page index
    pub page: usize,
    /// Number of occurrences found on that page (always > 0)
    pub occurrences_found: usize,
}

/// Outcome of [`suggest_annotations`]
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionOutcome {
    /// Serialized XFDF exchange document
    pub xfdf: String,
    /// Total highlight entries emitted
    pub total_suggestions: usize,
    /// Per (text, page) summaries; pages without a match are omitted
    pub results: Vec<SuggestionMatch>,
}

/// Search `pdf_data` for every string in `texts` and build highlight
/// suggestions.
///
/// Search strings are processed in order and may repeat; every occurrence
/// gets a fresh globally unique annotation name. Rectangles are converted
/// to XFDF space against the height of the page they were found on.
pub fn suggest_annotations(
    engine: &dyn DocumentEngine,
    pdf_data: &[u8],
    texts: &[String],
) -> Result<SuggestionOutcome> {
    if pdf_data.is_empty() {
        return Err(RedactError::EmptyInput("Empty PDF data"));
    }

    let doc = engine
        .open(pdf_data)
        .map_err(|e| RedactError::InvalidDocument(e.to_string()))?;

    let mut entries = Vec::new();
    let mut results = Vec::new();

    for text in texts {
        for page in 0..doc.page_count() {
            let (_, page_height) = doc.page_size(page);
            let matches = doc.search_text(page, text);
            let occurrences = matches.len();

            for rect in matches {
                entries.push(XfdfHighlight {
                    name: Uuid::new_v4().to_string(),
                    page,
                    rect: rect.to_xfdf_space(page_height),
                    contents: text.clone(),
                });
            }

            if occurrences > 0 {
                results.push(SuggestionMatch {
                    text: text.clone(),
                    page,
                    occurrences_found: occurrences,
                });
            }
        }
    }

    let total_suggestions = entries.len();
    let xfdf = xfdf::write_highlights(&entries)?;

    info!(
        total_suggestions,
        queries = texts.len(),
        pages = doc.page_count(),
        "generated redaction suggestions"
    );

    Ok(SuggestionOutcome {
        xfdf,
        total_suggestions,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MockDocumentBuilder, MockDocumentEngine};
    use crate::geometry::Rect;
    use crate::xfdf::parse_candidates;

    fn sample_bytes() -> Vec<u8> {
        MockDocumentBuilder::new()
            .page(612.0, 792.0)
            .text("John Smith", Rect::new(72.0, 96.0, 160.0, 110.0))
            .text("SSN: 123-45-6789", Rect::new(72.0, 130.0, 190.0, 144.0))
            .page(612.0, 792.0)
            .text("John Smith", Rect::new(100.0, 200.0, 188.0, 214.0))
            .bytes()
    }

    #[test]
    fn test_finds_occurrences_across_pages() {
        let engine = MockDocumentEngine::new();
        let outcome =
            suggest_annotations(&engine, &sample_bytes(), &["John Smith".to_string()]).unwrap();
        assert_eq!(outcome.total_suggestions, 2);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].page, 0);
        assert_eq!(outcome.results[1].page, 1);
        assert!(outcome.results.iter().all(|r| r.occurrences_found == 1));
    }

    #[test]
    fn test_emitted_rects_are_xfdf_space() {
        let engine = MockDocumentEngine::new();
        let outcome =
            suggest_annotations(&engine, &sample_bytes(), &["John Smith".to_string()]).unwrap();
        // Page-space (72, 96, 160, 110) against height 792 flips to
        // (72, 682, 160, 696)
        assert!(outcome.xfdf.contains("rect=\"72.00,682.00,160.00,696.00\""));
        assert!(outcome.xfdf.contains("<contents>John Smith</contents>"));
    }

    #[test]
    fn test_output_parses_back_to_candidates() {
        let engine = MockDocumentEngine::new();
        let outcome =
            suggest_annotations(&engine, &sample_bytes(), &["John Smith".to_string()]).unwrap();
        let parsed = parse_candidates(&outcome.xfdf, &[792.0, 792.0]).unwrap();
        assert_eq!(parsed.candidates.len(), 2);
        assert_eq!(parsed.skipped, 0);
        let rect = parsed.candidates[0].rect;
        assert!((rect.y0 - 96.0).abs() < 1e-6);
        assert!((rect.y1 - 110.0).abs() < 1e-6);
    }

    #[test]
    fn test_names_are_unique() {
        let engine = MockDocumentEngine::new();
        let texts = vec!["John Smith".to_string(), "John Smith".to_string()];
        let outcome = suggest_annotations(&engine, &sample_bytes(), &texts).unwrap();
        assert_eq!(outcome.total_suggestions, 4);

        let mut names: Vec<&str> = outcome
            .xfdf
            .match_indices("name=\"")
            .map(|(i, _)| {
                let start = i + 6;
                let end = outcome.xfdf[start..].find('"').unwrap() + start;
                &outcome.xfdf[start..end]
            })
            .collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_no_matches_yields_empty_results() {
        let engine = MockDocumentEngine::new();
        let outcome =
            suggest_annotations(&engine, &sample_bytes(), &["Jane Doe".to_string()]).unwrap();
        assert_eq!(outcome.total_suggestions, 0);
        assert!(outcome.results.is_empty());
        assert!(outcome.xfdf.contains("<annots>"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let engine = MockDocumentEngine::new();
        match suggest_annotations(&engine, b"", &["x".to_string()]) {
            Err(RedactError::EmptyInput(msg)) => assert_eq!(msg, "Empty PDF data"),
            other => panic!("Expected EmptyInput, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_document_is_rejected() {
        let engine = MockDocumentEngine::new();
        match suggest_annotations(&engine, b"not a pdf", &["x".to_string()]) {
            Err(RedactError::InvalidDocument(_)) => {}
            other => panic!("Expected InvalidDocument, got {other:?}"),
        }
    }
}
