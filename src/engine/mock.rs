//! Deterministic in-memory document engine
//!
//! [`MockDocumentEngine`] implements the [`DocumentEngine`] boundary over a
//! simple line-oriented byte format, so pipeline behavior (search, blackout,
//! re-annotation, serialization, hashing) can be exercised end-to-end
//! without a real PDF engine. Documents are built with
//! [`MockDocumentBuilder`], serialized with [`EngineDocument::save`], and
//! reopened from the produced bytes.
//!
//! Search is substring-based over placed text spans and returns the span's
//! rectangle. Applying redactions deletes every span and image that
//! overlaps a pending redaction mark, mirroring a destructive
//! content-removal flatten.

use super::{
    AnnotationFlags, DocumentEngine, DocumentMetadata, EngineDocument, EngineError,
    FreeTextAnnotation, PathElement, RedactMark, SaveOptions, TextAlign, TextBlock,
};
use crate::color::Color;
use crate::geometry::{Point, Rect};

const MAGIC: &str = "%MOCKPDF";

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = b"\xff\xd8\xff";

/// A positioned run of text on a mock page
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Text content (single line)
    pub text: String,
    /// Bounding box in page space
    pub rect: Rect,
}

/// An annotation recorded on a mock page
#[derive(Debug, Clone, PartialEq)]
pub enum MockAnnotation {
    /// A redaction mark
    Redact {
        /// Marked region
        rect: Rect,
        /// Mark parameters
        mark: RedactMark,
    },
    /// A free-text annotation
    FreeText(FreeTextAnnotation),
}

/// A vector shape recorded on a mock page
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedShape {
    /// Path segments in draw order
    pub elements: Vec<PathElement>,
    /// Stroke color
    pub stroke: Color,
    /// Fill color
    pub fill: Color,
    /// Stroke width
    pub width: f64,
}

#[derive(Debug, Clone, Default)]
struct MockPage {
    width: f64,
    height: f64,
    spans: Vec<TextSpan>,
    images: Vec<Rect>,
    annotations: Vec<MockAnnotation>,
    shapes: Vec<RecordedShape>,
}

/// An in-memory document produced by [`MockDocumentEngine`] or
/// [`MockDocumentBuilder`].
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
    pages: Vec<MockPage>,
    metadata: DocumentMetadata,
    encrypted: bool,
}

impl MockDocument {
    /// Parse the mock byte format into a concrete document, for callers
    /// that need the inspection accessors rather than a boxed
    /// [`EngineDocument`]
    pub fn from_bytes(data: &[u8]) -> Result<Self, EngineError> {
        Self::parse(data)
    }

    /// Annotations currently present on a page, in insertion order
    pub fn annotations(&self, page: usize) -> &[MockAnnotation] {
        &self.pages[page].annotations
    }

    /// Shapes drawn on a page, in draw order
    pub fn shapes(&self, page: usize) -> &[RecordedShape] {
        &self.pages[page].shapes
    }

    /// Regions of images embedded in a page
    pub fn images(&self, page: usize) -> &[Rect] {
        &self.pages[page].images
    }

    /// Free-text annotations on a page, in insertion order
    pub fn free_text_annotations(&self, page: usize) -> Vec<&FreeTextAnnotation> {
        self.pages[page]
            .annotations
            .iter()
            .filter_map(|a| match a {
                MockAnnotation::FreeText(ft) => Some(ft),
                MockAnnotation::Redact { .. } => None,
            })
            .collect()
    }

    fn serialize(&self) -> Vec<u8> {
        let mut out = String::new();
        out.push_str(MAGIC);
        out.push('\n');
        if self.encrypted {
            out.push_str("encrypted\n");
        }
        for (key, value) in [
            ("title", &self.metadata.title),
            ("author", &self.metadata.author),
            ("producer", &self.metadata.producer),
            ("creator", &self.metadata.creator),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("meta {key} {value}\n"));
            }
        }
        for page in &self.pages {
            out.push_str(&format!("page {} {}\n", page.width, page.height));
            for span in &page.spans {
                let r = span.rect;
                out.push_str(&format!(
                    "span {} {} {} {} {}\n",
                    r.x0, r.y0, r.x1, r.y1, span.text
                ));
            }
            for rect in &page.images {
                out.push_str(&format!(
                    "image {} {} {} {}\n",
                    rect.x0, rect.y0, rect.x1, rect.y1
                ));
            }
            for annotation in &page.annotations {
                match annotation {
                    MockAnnotation::Redact { rect, mark } => {
                        let fill = match mark.fill {
                            Some(c) => format!("{},{},{}", c.r, c.g, c.b),
                            None => "none".to_string(),
                        };
                        out.push_str(&format!(
                            "redact {} {} {} {} {} {} {}\n",
                            rect.x0,
                            rect.y0,
                            rect.x1,
                            rect.y1,
                            fill,
                            u8::from(mark.cross_out),
                            mark.opacity
                        ));
                    }
                    MockAnnotation::FreeText(ft) => {
                        let r = ft.rect;
                        out.push_str(&format!(
                            "freetext {} {} {} {} {} {} {} {},{},{} {},{},{} {} {}\n",
                            r.x0,
                            r.y0,
                            r.x1,
                            r.y1,
                            ft.font_size,
                            align_code(ft.align),
                            flags_code(ft.flags),
                            ft.text_color.r,
                            ft.text_color.g,
                            ft.text_color.b,
                            ft.fill_color.r,
                            ft.fill_color.g,
                            ft.fill_color.b,
                            ft.font,
                            ft.text
                        ));
                    }
                }
            }
            for shape in &page.shapes {
                out.push_str(&format!(
                    "shape {} {},{},{} {},{},{}\n",
                    shape.width,
                    shape.stroke.r,
                    shape.stroke.g,
                    shape.stroke.b,
                    shape.fill.r,
                    shape.fill.g,
                    shape.fill.b
                ));
                for element in &shape.elements {
                    match element {
                        PathElement::Line { from, to } => {
                            out.push_str(&format!(
                                "line {} {} {} {}\n",
                                from.x, from.y, to.x, to.y
                            ));
                        }
                        PathElement::Bezier {
                            from,
                            ctrl1,
                            ctrl2,
                            to,
                        } => {
                            out.push_str(&format!(
                                "bezier {} {} {} {} {} {} {} {}\n",
                                from.x, from.y, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                            ));
                        }
                    }
                }
                out.push_str("endshape\n");
            }
        }
        out.into_bytes()
    }

    fn parse(data: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(data)
            .map_err(|_| EngineError::InvalidDocument("not a mock document".to_string()))?;
        let mut lines = text.lines();
        if lines.next() != Some(MAGIC) {
            return Err(EngineError::InvalidDocument(
                "missing mock document header".to_string(),
            ));
        }

        let mut doc = MockDocument::default();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let (kind, rest) = line.split_once(' ').unwrap_or((line, ""));
            match kind {
                "encrypted" => doc.encrypted = true,
                "meta" => {
                    let (key, value) = rest
                        .split_once(' ')
                        .ok_or_else(|| malformed("meta", line))?;
                    let field = match key {
                        "title" => &mut doc.metadata.title,
                        "author" => &mut doc.metadata.author,
                        "producer" => &mut doc.metadata.producer,
                        "creator" => &mut doc.metadata.creator,
                        _ => return Err(malformed("meta", line)),
                    };
                    *field = value.to_string();
                }
                "page" => {
                    let nums = parse_floats(rest, 2).ok_or_else(|| malformed("page", line))?;
                    doc.pages.push(MockPage {
                        width: nums[0],
                        height: nums[1],
                        ..MockPage::default()
                    });
                }
                "span" => {
                    let (rect, text) = parse_rect_prefix(rest).ok_or_else(|| malformed("span", line))?;
                    current(&mut doc, line)?.spans.push(TextSpan {
                        text: text.to_string(),
                        rect,
                    });
                }
                "image" => {
                    let nums = parse_floats(rest, 4).ok_or_else(|| malformed("image", line))?;
                    current(&mut doc, line)?
                        .images
                        .push(Rect::new(nums[0], nums[1], nums[2], nums[3]));
                }
                "redact" => {
                    let fields: Vec<&str> = rest.split(' ').collect();
                    if fields.len() != 7 {
                        return Err(malformed("redact", line));
                    }
                    let nums = parse_floats(&fields[..4].join(" "), 4)
                        .ok_or_else(|| malformed("redact", line))?;
                    let fill = if fields[4] == "none" {
                        None
                    } else {
                        Some(parse_color(fields[4]).ok_or_else(|| malformed("redact", line))?)
                    };
                    let cross_out = fields[5] == "1";
                    let opacity = fields[6]
                        .parse::<f64>()
                        .map_err(|_| malformed("redact", line))?;
                    current(&mut doc, line)?.annotations.push(MockAnnotation::Redact {
                        rect: Rect::new(nums[0], nums[1], nums[2], nums[3]),
                        mark: RedactMark {
                            fill,
                            cross_out,
                            opacity,
                        },
                    });
                }
                "freetext" => {
                    let fields: Vec<&str> = rest.splitn(11, ' ').collect();
                    if fields.len() != 11 {
                        return Err(malformed("freetext", line));
                    }
                    let nums = parse_floats(&fields[..5].join(" "), 5)
                        .ok_or_else(|| malformed("freetext", line))?;
                    let annotation = FreeTextAnnotation {
                        rect: Rect::new(nums[0], nums[1], nums[2], nums[3]),
                        font_size: nums[4],
                        align: parse_align(fields[5]).ok_or_else(|| malformed("freetext", line))?,
                        flags: parse_flags(fields[6]).ok_or_else(|| malformed("freetext", line))?,
                        text_color: parse_color(fields[7])
                            .ok_or_else(|| malformed("freetext", line))?,
                        fill_color: parse_color(fields[8])
                            .ok_or_else(|| malformed("freetext", line))?,
                        font: fields[9].to_string(),
                        text: fields[10].to_string(),
                    };
                    current(&mut doc, line)?
                        .annotations
                        .push(MockAnnotation::FreeText(annotation));
                }
                "shape" => {
                    let fields: Vec<&str> = rest.split(' ').collect();
                    if fields.len() != 3 {
                        return Err(malformed("shape", line));
                    }
                    let width = fields[0]
                        .parse::<f64>()
                        .map_err(|_| malformed("shape", line))?;
                    let stroke = parse_color(fields[1]).ok_or_else(|| malformed("shape", line))?;
                    let fill = parse_color(fields[2]).ok_or_else(|| malformed("shape", line))?;
                    current(&mut doc, line)?.shapes.push(RecordedShape {
                        elements: Vec::new(),
                        stroke,
                        fill,
                        width,
                    });
                }
                "line" => {
                    let nums = parse_floats(rest, 4).ok_or_else(|| malformed("line", line))?;
                    let shape = current_shape(&mut doc, line)?;
                    shape.elements.push(PathElement::Line {
                        from: Point::new(nums[0], nums[1]),
                        to: Point::new(nums[2], nums[3]),
                    });
                }
                "bezier" => {
                    let nums = parse_floats(rest, 8).ok_or_else(|| malformed("bezier", line))?;
                    let shape = current_shape(&mut doc, line)?;
                    shape.elements.push(PathElement::Bezier {
                        from: Point::new(nums[0], nums[1]),
                        ctrl1: Point::new(nums[2], nums[3]),
                        ctrl2: Point::new(nums[4], nums[5]),
                        to: Point::new(nums[6], nums[7]),
                    });
                }
                "endshape" => {}
                _ => return Err(malformed("record", line)),
            }
        }
        Ok(doc)
    }
}

fn malformed(record: &str, line: &str) -> EngineError {
    EngineError::InvalidDocument(format!("malformed {record} record: {line:?}"))
}

fn current<'a>(doc: &'a mut MockDocument, line: &str) -> Result<&'a mut MockPage, EngineError> {
    doc.pages
        .last_mut()
        .ok_or_else(|| EngineError::InvalidDocument(format!("record before any page: {line:?}")))
}

fn current_shape<'a>(
    doc: &'a mut MockDocument,
    line: &str,
) -> Result<&'a mut RecordedShape, EngineError> {
    current(doc, line)?
        .shapes
        .last_mut()
        .ok_or_else(|| EngineError::InvalidDocument(format!("path outside a shape: {line:?}")))
}

fn parse_floats(s: &str, count: usize) -> Option<Vec<f64>> {
    let values: Vec<f64> = s
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    (values.len() == count).then_some(values)
}

fn parse_rect_prefix(s: &str) -> Option<(Rect, &str)> {
    let mut tokens = s.splitn(5, ' ');
    let mut nums = [0.0; 4];
    for value in &mut nums {
        *value = tokens.next()?.parse::<f64>().ok()?;
    }
    let text = tokens.next().unwrap_or("");
    Some((Rect::new(nums[0], nums[1], nums[2], nums[3]), text))
}

fn parse_color(s: &str) -> Option<Color> {
    let mut parts = s.split(',');
    let r = parts.next()?.parse::<f64>().ok()?;
    let g = parts.next()?.parse::<f64>().ok()?;
    let b = parts.next()?.parse::<f64>().ok()?;
    parts.next().is_none().then_some(Color::rgb(r, g, b))
}

fn align_code(align: TextAlign) -> u8 {
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => 1,
        TextAlign::Right => 2,
    }
}

fn parse_align(s: &str) -> Option<TextAlign> {
    match s {
        "0" => Some(TextAlign::Left),
        "1" => Some(TextAlign::Center),
        "2" => Some(TextAlign::Right),
        _ => None,
    }
}

fn flags_code(flags: AnnotationFlags) -> u8 {
    u8::from(flags.read_only) | (u8::from(flags.locked) << 1) | (u8::from(flags.locked_contents) << 2)
}

fn parse_flags(s: &str) -> Option<AnnotationFlags> {
    let bits = s.parse::<u8>().ok()?;
    (bits < 8).then_some(AnnotationFlags {
        read_only: bits & 1 != 0,
        locked: bits & 2 != 0,
        locked_contents: bits & 4 != 0,
    })
}

impl EngineDocument for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    fn page_size(&self, page: usize) -> (f64, f64) {
        let p = &self.pages[page];
        (p.width, p.height)
    }

    fn search_text(&self, page: usize, needle: &str) -> Vec<Rect> {
        self.pages[page]
            .spans
            .iter()
            .filter(|span| span.text.contains(needle))
            .map(|span| span.rect)
            .collect()
    }

    fn page_text(&self, page: usize) -> String {
        self.pages[page]
            .spans
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn text_blocks(&self, page: usize) -> Vec<TextBlock> {
        self.pages[page]
            .spans
            .iter()
            .enumerate()
            .map(|(i, span)| TextBlock {
                text: span.text.clone(),
                rect: span.rect,
                block_number: i,
                line_number: 0,
            })
            .collect()
    }

    fn page_has_images(&self, page: usize) -> bool {
        !self.pages[page].images.is_empty()
    }

    fn annotation_count(&self, page: usize) -> usize {
        self.pages[page].annotations.len()
    }

    fn add_redact_annotation(&mut self, page: usize, rect: Rect, mark: RedactMark) {
        self.pages[page]
            .annotations
            .push(MockAnnotation::Redact { rect, mark });
    }

    fn apply_redactions(&mut self) {
        for page in &mut self.pages {
            let marked: Vec<Rect> = page
                .annotations
                .iter()
                .filter_map(|a| match a {
                    MockAnnotation::Redact { rect, .. } => Some(*rect),
                    MockAnnotation::FreeText(_) => None,
                })
                .collect();
            if marked.is_empty() {
                continue;
            }
            page.spans
                .retain(|span| !marked.iter().any(|m| m.intersects(&span.rect)));
            page.images
                .retain(|image| !marked.iter().any(|m| m.intersects(image)));
            // Applying consumes the marks
            page.annotations
                .retain(|a| matches!(a, MockAnnotation::FreeText(_)));
        }
    }

    fn add_free_text(&mut self, page: usize, annotation: FreeTextAnnotation) {
        self.pages[page]
            .annotations
            .push(MockAnnotation::FreeText(annotation));
    }

    fn insert_image(&mut self, page: usize, rect: Rect, data: &[u8]) -> Result<(), EngineError> {
        if !data.starts_with(PNG_SIGNATURE) && !data.starts_with(JPEG_SIGNATURE) {
            return Err(EngineError::UnsupportedImage(
                "bytes are not PNG or JPEG".to_string(),
            ));
        }
        self.pages[page].images.push(rect);
        Ok(())
    }

    fn draw_shape(
        &mut self,
        page: usize,
        elements: &[PathElement],
        stroke: Color,
        fill: Color,
        width: f64,
    ) {
        self.pages[page].shapes.push(RecordedShape {
            elements: elements.to_vec(),
            stroke,
            fill,
            width,
        });
    }

    fn metadata(&self) -> DocumentMetadata {
        self.metadata.clone()
    }

    fn set_producer(&mut self, producer: &str) {
        self.metadata.producer = producer.to_string();
    }

    fn save(&mut self, _options: SaveOptions) -> Result<Vec<u8>, EngineError> {
        // The mock format only ever serializes live objects, so compaction
        // options have no further effect.
        Ok(self.serialize())
    }
}

/// [`DocumentEngine`] over the mock byte format.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDocumentEngine;

impl MockDocumentEngine {
    /// Create a new mock engine
    pub fn new() -> Self {
        Self
    }
}

impl DocumentEngine for MockDocumentEngine {
    fn open(&self, data: &[u8]) -> Result<Box<dyn EngineDocument>, EngineError> {
        Ok(Box::new(MockDocument::parse(data)?))
    }
}

/// Builder for mock documents.
///
/// ```
/// use redactr_core::engine::MockDocumentBuilder;
/// use redactr_core::geometry::Rect;
///
/// let pdf_data = MockDocumentBuilder::new()
///     .page(612.0, 792.0)
///     .text("John Smith", Rect::new(72.0, 96.0, 160.0, 110.0))
///     .bytes();
/// assert!(pdf_data.starts_with(b"%MOCKPDF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDocumentBuilder {
    doc: MockDocument,
}

impl MockDocumentBuilder {
    /// Start an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of the given size; subsequent content lands on it
    pub fn page(mut self, width: f64, height: f64) -> Self {
        self.doc.pages.push(MockPage {
            width,
            height,
            ..MockPage::default()
        });
        self
    }

    /// Place a single-line text span on the current page
    pub fn text(mut self, text: &str, rect: Rect) -> Self {
        self.current().spans.push(TextSpan {
            text: text.to_string(),
            rect,
        });
        self
    }

    /// Place an image on the current page
    pub fn image(mut self, rect: Rect) -> Self {
        self.current().images.push(rect);
        self
    }

    /// Mark the document as encrypted
    pub fn encrypted(mut self) -> Self {
        self.doc.encrypted = true;
        self
    }

    /// Set document metadata
    pub fn metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.doc.metadata = metadata;
        self
    }

    fn current(&mut self) -> &mut MockPage {
        if self.doc.pages.is_empty() {
            // US Letter, the builder's implicit default page
            self.doc.pages.push(MockPage {
                width: 612.0,
                height: 792.0,
                ..MockPage::default()
            });
        }
        let last = self.doc.pages.len() - 1;
        &mut self.doc.pages[last]
    }

    /// Finish building the in-memory document
    pub fn build(self) -> MockDocument {
        self.doc
    }

    /// Finish building and serialize to the mock byte format
    pub fn bytes(self) -> Vec<u8> {
        self.doc.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bytes() -> Vec<u8> {
        MockDocumentBuilder::new()
            .page(612.0, 792.0)
            .text("John Smith", Rect::new(72.0, 96.0, 160.0, 110.0))
            .text("SSN: 123-45-6789", Rect::new(72.0, 130.0, 190.0, 144.0))
            .bytes()
    }

    #[test]
    fn test_open_round_trip() {
        let engine = MockDocumentEngine::new();
        let doc = engine.open(&sample_bytes()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page_size(0), (612.0, 792.0));
        assert!(doc.page_text(0).contains("John Smith"));
        assert!(doc.page_text(0).contains("123-45-6789"));
    }

    #[test]
    fn test_open_rejects_garbage() {
        let engine = MockDocumentEngine::new();
        assert!(engine.open(b"not a document").is_err());
        assert!(engine.open(b"").is_err());
        assert!(engine.open(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_search_returns_span_rect() {
        let engine = MockDocumentEngine::new();
        let doc = engine.open(&sample_bytes()).unwrap();
        let hits = doc.search_text(0, "John Smith");
        assert_eq!(hits, vec![Rect::new(72.0, 96.0, 160.0, 110.0)]);
        assert!(doc.search_text(0, "Jane Doe").is_empty());
        // Substring matches report the containing span
        assert_eq!(doc.search_text(0, "123-45-6789").len(), 1);
    }

    #[test]
    fn test_apply_redactions_removes_overlapping_spans() {
        let engine = MockDocumentEngine::new();
        let mut doc = engine.open(&sample_bytes()).unwrap();
        doc.add_redact_annotation(0, Rect::new(72.0, 96.0, 160.0, 110.0), RedactMark::blackout());
        doc.apply_redactions();
        assert!(!doc.page_text(0).contains("John Smith"));
        assert!(doc.page_text(0).contains("123-45-6789"));
        // The pending marks were consumed
        assert_eq!(doc.annotation_count(0), 0);
    }

    #[test]
    fn test_apply_redactions_removes_overlapping_images() {
        let mut doc = MockDocumentBuilder::new()
            .page(612.0, 792.0)
            .image(Rect::new(10.0, 10.0, 50.0, 50.0))
            .build();
        doc.add_redact_annotation(0, Rect::new(0.0, 0.0, 100.0, 100.0), RedactMark::blackout());
        doc.apply_redactions();
        assert!(!doc.page_has_images(0));
    }

    #[test]
    fn test_insert_image_sniffs_signature() {
        let mut doc = MockDocumentBuilder::new().page(612.0, 792.0).build();
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(doc.insert_image(0, rect, b"not a png").is_err());
        assert!(!doc.page_has_images(0));

        let png = [PNG_SIGNATURE, &[0u8; 8]].concat();
        doc.insert_image(0, rect, &png).unwrap();
        assert!(doc.page_has_images(0));
    }

    #[test]
    fn test_save_round_trips_annotations_and_metadata() {
        let mut doc = MockDocumentBuilder::new().page(612.0, 792.0).build();
        doc.add_redact_annotation(
            0,
            Rect::new(10.0, 10.0, 60.0, 30.0),
            RedactMark::structural(),
        );
        doc.add_free_text(
            0,
            FreeTextAnnotation {
                rect: Rect::new(10.0, 20.0, 60.0, 30.0),
                text: "ID: abc123def456".to_string(),
                font: "helv".to_string(),
                font_size: 5.5,
                text_color: Color::white(),
                fill_color: Color::black(),
                align: TextAlign::Right,
                flags: AnnotationFlags::protected(),
            },
        );
        doc.set_producer("PDF Core v0.1.0 by redactr.io");

        let bytes = doc.save(SaveOptions::compact()).unwrap();
        let engine = MockDocumentEngine::new();
        let reopened = engine.open(&bytes).unwrap();
        assert_eq!(reopened.annotation_count(0), 2);
        assert_eq!(reopened.metadata().producer, "PDF Core v0.1.0 by redactr.io");
    }

    #[test]
    fn test_save_is_deterministic() {
        let mut a = MockDocumentEngine::new().open(&sample_bytes()).unwrap();
        let mut b = MockDocumentEngine::new().open(&sample_bytes()).unwrap();
        assert_eq!(
            a.save(SaveOptions::compact()).unwrap(),
            b.save(SaveOptions::compact()).unwrap()
        );
    }

    #[test]
    fn test_shape_round_trip() {
        let mut doc = MockDocumentBuilder::new().page(612.0, 792.0).build();
        let elements = vec![
            PathElement::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
            },
            PathElement::Bezier {
                from: Point::new(10.0, 0.0),
                ctrl1: Point::new(12.0, 0.0),
                ctrl2: Point::new(13.0, 1.0),
                to: Point::new(13.0, 3.0),
            },
        ];
        doc.draw_shape(0, &elements, Color::black(), Color::white(), 0.5);

        let bytes = doc.save(SaveOptions::default()).unwrap();
        let reparsed = MockDocument::parse(&bytes).unwrap();
        assert_eq!(reparsed.shapes(0).len(), 1);
        assert_eq!(reparsed.shapes(0)[0].elements, elements);
    }

    #[test]
    fn test_encrypted_flag_survives_round_trip() {
        let bytes = MockDocumentBuilder::new().page(612.0, 792.0).encrypted().bytes();
        let doc = MockDocumentEngine::new().open(&bytes).unwrap();
        assert!(doc.is_encrypted());
    }

    #[test]
    fn test_text_blocks_positions() {
        let doc = MockDocumentEngine::new().open(&sample_bytes()).unwrap();
        let blocks = doc.text_blocks(0);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "John Smith");
        assert_eq!(blocks[0].block_number, 0);
        assert_eq!(blocks[1].block_number, 1);
        assert_eq!(blocks[0].rect, Rect::new(72.0, 96.0, 160.0, 110.0));
    }
}
