//! # redactr-core
//!
//! A PDF redaction pipeline built around a pluggable document engine.
//!
//! ## Features
//!
//! - **Suggestion**: Search a document for text and emit XFDF highlight
//!   annotations reviewers can load into any PDF viewer
//! - **XFDF Exchange**: Generate and parse XFDF with coordinate conversion
//!   between page space and the XFDF bottom-left origin
//! - **Redaction**: Destructively remove marked regions, draw branded
//!   overlays, and return an audit log with deterministic redaction IDs
//! - **Document Analysis**: Page-level text, image, and scanned-page facts
//! - **Text Extraction**: Positioned text blocks with an optional OCR pass
//!   through a pluggable provider
//!
//! ## Quick Start
//!
//! ```rust
//! use redactr_core::engine::{MockDocumentBuilder, MockDocumentEngine};
//! use redactr_core::geometry::Rect;
//! use redactr_core::{apply_redactions, suggest_annotations, Result};
//!
//! # fn main() -> Result<()> {
//! let engine = MockDocumentEngine::new();
//! let pdf = MockDocumentBuilder::new()
//!     .page(612.0, 792.0)
//!     .text("John Smith", Rect::new(72.0, 96.0, 160.0, 110.0))
//!     .bytes();
//!
//! // Find every occurrence and describe it as XFDF highlights.
//! let suggested = suggest_annotations(&engine, &pdf, &["John Smith".to_string()])?;
//! assert_eq!(suggested.total_suggestions, 1);
//!
//! // Apply the marked regions destructively and collect the audit log.
//! let outcome = apply_redactions(&engine, &pdf, &suggested.xfdf, None)?;
//! assert_eq!(outcome.redactions_applied, 1);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod document_info;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod ocr;
pub mod redaction;
pub mod suggest;
pub mod text_extraction;
pub mod xfdf;

pub use color::Color;
pub use document_info::{get_document_info, DocumentInfo, PageInfo};
pub use error::{RedactError, Result};
pub use geometry::{Point, Rect};
pub use ocr::{MockOcrProvider, OcrError, OcrProvider, OcrResult};
pub use redaction::{
    apply_redactions, draw_branding, redaction_id, BrandingStyle, BrandingTier,
    RedactionLogEntry, RedactionOutcome, RedactionStyleConfig,
};
pub use suggest::{suggest_annotations, SuggestionMatch, SuggestionOutcome};
pub use text_extraction::{extract_text, ExtractOptions, OcrOptions, PageText};
pub use xfdf::{parse_candidates, write_highlights, ParsedCandidates, RedactionCandidate, XfdfHighlight};
