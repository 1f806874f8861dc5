//! Document engine collaborator interface
//!
//! The page-rendering engine (open documents, search text, rasterize
//! drawing primitives, apply destructive redactions, serialize) is external
//! to this crate. This module defines the trait boundary the redaction
//! pipeline drives, in the same pluggable-collaborator style as
//! [`crate::ocr::OcrProvider`]: operations accept any [`DocumentEngine`]
//! implementation, and [`mock::MockDocumentEngine`] ships as a
//! deterministic in-memory implementation for tests and examples.

pub mod mock;

pub use mock::{
    MockAnnotation, MockDocument, MockDocumentBuilder, MockDocumentEngine, RecordedShape, TextSpan,
};

use thiserror::Error;

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Errors reported by a document engine implementation
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input bytes are not a document this engine can open
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Image bytes could not be decoded for embedding
    #[error("Unsupported image data: {0}")]
    UnsupportedImage(String),

    /// The document could not be serialized
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

/// Opens documents from raw bytes.
pub trait DocumentEngine {
    /// Open a document from raw bytes. Fails on corrupt or non-document
    /// input.
    fn open(&self, data: &[u8]) -> Result<Box<dyn EngineDocument>, EngineError>;
}

/// One open document, held exclusively for the duration of an operation.
///
/// Page indices are 0-based; callers must validate them against
/// [`EngineDocument::page_count`] before use.
pub trait EngineDocument {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Whether the document is encrypted
    fn is_encrypted(&self) -> bool;

    /// Width and height of a page, in page units
    fn page_size(&self, page: usize) -> (f64, f64);

    /// All occurrences of `needle` on a page, as page-space rectangles in
    /// reading order
    fn search_text(&self, page: usize, needle: &str) -> Vec<Rect>;

    /// Plain text content of a page
    fn page_text(&self, page: usize) -> String;

    /// Text content of a page with position metadata, one block per line
    fn text_blocks(&self, page: usize) -> Vec<TextBlock>;

    /// Whether a page carries any embedded images
    fn page_has_images(&self, page: usize) -> bool;

    /// Number of annotations currently present on a page
    fn annotation_count(&self, page: usize) -> usize;

    /// Mark a region for redaction. The region is not altered until
    /// [`EngineDocument::apply_redactions`] runs; marks added afterwards
    /// remain on the page as ordinary annotations.
    fn add_redact_annotation(&mut self, page: usize, rect: Rect, mark: RedactMark);

    /// Destructively remove all content under pending redaction marks,
    /// across every page, consuming the marks.
    fn apply_redactions(&mut self);

    /// Add a free-text annotation to a page
    fn add_free_text(&mut self, page: usize, annotation: FreeTextAnnotation);

    /// Embed an image into a page region. Fails if the bytes are not a
    /// decodable image.
    fn insert_image(&mut self, page: usize, rect: Rect, data: &[u8]) -> Result<(), EngineError>;

    /// Draw a filled and stroked vector shape on a page
    fn draw_shape(
        &mut self,
        page: usize,
        elements: &[PathElement],
        stroke: Color,
        fill: Color,
        width: f64,
    );

    /// Document metadata
    fn metadata(&self) -> DocumentMetadata;

    /// Overwrite the document's producer metadata field
    fn set_producer(&mut self, producer: &str);

    /// Serialize the document to bytes
    fn save(&mut self, options: SaveOptions) -> Result<Vec<u8>, EngineError>;
}

/// One line of positioned page text
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// The line's text content
    pub text: String,
    /// Bounding box in page space
    pub rect: Rect,
    /// 0-based index of the containing text block
    pub block_number: usize,
    /// 0-based line index within the block
    pub line_number: usize,
}

/// Parameters for a redaction annotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedactMark {
    /// Fill color painted over the region once redactions are applied
    pub fill: Option<Color>,
    /// Whether to draw diagonal cross-out lines over the region
    pub cross_out: bool,
    /// Annotation opacity, 0.0 (invisible) to 1.0
    pub opacity: f64,
}

impl RedactMark {
    /// An opaque black mark: the classic blackout box
    pub fn blackout() -> Self {
        Self {
            fill: Some(Color::black()),
            cross_out: true,
            opacity: 1.0,
        }
    }

    /// A plain opaque black fill with no cross-out, used to mark content
    /// for removal ahead of a flatten
    pub fn removal() -> Self {
        Self {
            fill: Some(Color::black()),
            cross_out: false,
            opacity: 1.0,
        }
    }

    /// A fully transparent mark with no cross-out, left on the page purely
    /// so verification tooling can discover that the region was redacted
    pub fn structural() -> Self {
        Self {
            fill: None,
            cross_out: false,
            opacity: 0.0,
        }
    }
}

/// Horizontal alignment of free-text annotation content
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextAlign {
    /// Left-aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

/// Annotation flags, the subset of ISO 32000-1 Section 12.5.3 this crate
/// uses
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnnotationFlags {
    /// Annotation is read-only
    pub read_only: bool,
    /// Annotation may not be deleted or moved
    pub locked: bool,
    /// Annotation content may not be modified
    pub locked_contents: bool,
}

impl AnnotationFlags {
    /// All three protection flags set
    pub fn protected() -> Self {
        Self {
            read_only: true,
            locked: true,
            locked_contents: true,
        }
    }
}

/// A free-text annotation placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct FreeTextAnnotation {
    /// Annotation rectangle in page space
    pub rect: Rect,
    /// Text content
    pub text: String,
    /// Font name (engine-defined, e.g. "helv")
    pub font: String,
    /// Font size in page units
    pub font_size: f64,
    /// Text foreground color
    pub text_color: Color,
    /// Background fill color
    pub fill_color: Color,
    /// Horizontal alignment
    pub align: TextAlign,
    /// Annotation flags
    pub flags: AnnotationFlags,
}

/// One segment of a vector drawing path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// A straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// A cubic Bezier curve
    Bezier {
        /// Start point
        from: Point,
        /// First control point
        ctrl1: Point,
        /// Second control point
        ctrl2: Point,
        /// End point
        to: Point,
    },
}

/// Document metadata fields surfaced by this crate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,
    /// Document author
    pub author: String,
    /// Producing software
    pub producer: String,
    /// Creating software
    pub creator: String,
}

/// Serialization options for [`EngineDocument::save`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOptions {
    /// Garbage collection level: 0 disables, higher levels remove and
    /// deduplicate more unreferenced objects
    pub garbage: u8,
    /// Whether to compress content streams
    pub deflate: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            garbage: 0,
            deflate: false,
        }
    }
}

impl SaveOptions {
    /// Full compaction: maximum garbage collection plus stream compression.
    /// Used by the redaction pipeline so removed content does not survive
    /// in the output bytes.
    pub fn compact() -> Self {
        Self {
            garbage: 4,
            deflate: true,
        }
    }
}
