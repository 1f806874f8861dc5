//! XFDF annotation-exchange document support
//!
//! The suggestion stage serializes highlight entries into an XFDF document
//! (root `xfdf` in the Adobe namespace, `annots` child) and the redaction
//! stage parses such documents back into validated candidates. The parser
//! deliberately tolerates producers that omit the namespace: it looks for
//! namespaced `highlight`/`redact`/`square` elements first and falls back
//! to bare element names only when the namespaced pass finds nothing.
//!
//! Per-entry problems never fail a parse. An entry is skipped and counted
//! when its rect is missing, its page index is absent from the document, or
//! its rect does not split into exactly four numeric fields.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{RedactError, Result};
use crate::geometry::Rect;

/// The XFDF XML namespace
pub const XFDF_NAMESPACE: &str = "http://ns.adobe.com/xfdf/";

/// Annotation element names that qualify as redaction candidates
const CANDIDATE_TAGS: [&str; 3] = ["highlight", "redact", "square"];

/// One highlight entry ready for serialization.
///
/// The rectangle is already in XFDF space (bottom-left origin).
#[derive(Debug, Clone, PartialEq)]
pub struct XfdfHighlight {
    /// Globally unique annotation name
    pub name: String,
    /// 0-based page index
    pub page: usize,
    /// Highlight region in XFDF space
    pub rect: Rect,
    /// The matched text
    pub contents: String,
}

/// A validated redaction region parsed from an exchange document.
///
/// The rectangle has been converted back to page space (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedactionCandidate {
    /// 0-based page index, verified against the document
    pub page: usize,
    /// Redaction region in page space
    pub rect: Rect,
}

/// Outcome of parsing an exchange document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCandidates {
    /// Valid candidates in exchange-document order
    pub candidates: Vec<RedactionCandidate>,
    /// Number of entries dropped for bad page indices or rect strings
    pub skipped: usize,
}

/// Serialize highlight entries into an XFDF document.
///
/// Coordinates are written with fixed 2-decimal precision.
pub fn write_highlights(entries: &[XfdfHighlight]) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("xfdf");
    root.push_attribute(("xmlns", XFDF_NAMESPACE));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("annots")))?;

    for entry in entries {
        let mut highlight = BytesStart::new("highlight");
        highlight.push_attribute(("name", entry.name.as_str()));
        highlight.push_attribute(("page", entry.page.to_string().as_str()));
        let rect = format!(
            "{:.2},{:.2},{:.2},{:.2}",
            entry.rect.x0, entry.rect.y0, entry.rect.x1, entry.rect.y1
        );
        highlight.push_attribute(("rect", rect.as_str()));
        writer.write_event(Event::Start(highlight))?;

        writer.write_event(Event::Start(BytesStart::new("contents")))?;
        writer.write_event(Event::Text(BytesText::new(&entry.contents)))?;
        writer.write_event(Event::End(BytesEnd::new("contents")))?;

        writer.write_event(Event::End(BytesEnd::new("highlight")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("annots")))?;
    writer.write_event(Event::End(BytesEnd::new("xfdf")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes)
        .map_err(|e| RedactError::MalformedXfdf(format!("non-UTF-8 output: {e}")))
}

/// Parse an exchange document into validated page-space candidates.
///
/// `page_heights[i]` is the height of page `i`; its length is the page
/// count entries are validated against.
pub fn parse_candidates(xfdf: &str, page_heights: &[f64]) -> Result<ParsedCandidates> {
    let doc = roxmltree::Document::parse(xfdf)
        .map_err(|e| RedactError::MalformedXfdf(e.to_string()))?;

    // Namespaced lookup first; bare fallback only when nothing matched.
    let mut nodes: Vec<roxmltree::Node> = collect_entries(&doc, Some(XFDF_NAMESPACE));
    if nodes.is_empty() {
        nodes = collect_entries(&doc, None);
    }

    let mut parsed = ParsedCandidates::default();
    for node in nodes {
        match parse_entry(&node, page_heights) {
            Some(candidate) => parsed.candidates.push(candidate),
            None => parsed.skipped += 1,
        }
    }
    Ok(parsed)
}

fn collect_entries<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    namespace: Option<&str>,
) -> Vec<roxmltree::Node<'a, 'input>> {
    let mut nodes = Vec::new();
    for tag in CANDIDATE_TAGS {
        nodes.extend(doc.descendants().filter(|n| {
            n.is_element() && n.tag_name().name() == tag && n.tag_name().namespace() == namespace
        }));
    }
    nodes
}

fn parse_entry(node: &roxmltree::Node, page_heights: &[f64]) -> Option<RedactionCandidate> {
    let page: i64 = node.attribute("page").unwrap_or("0").parse().ok()?;
    let rect_str = node.attribute("rect").unwrap_or("");
    if rect_str.is_empty() || page < 0 || page as usize >= page_heights.len() {
        return None;
    }
    let page = page as usize;

    let coords: Vec<f64> = rect_str
        .split(',')
        .map(|v| v.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    if coords.len() != 4 {
        return None;
    }

    let xfdf_rect = Rect::new(coords[0], coords[1], coords[2], coords[3]);
    Some(RedactionCandidate {
        page,
        rect: xfdf_rect.to_page_space(page_heights[page]),
    })
}
