//! The redaction pipeline
//!
//! Takes a document plus an XFDF exchange document, permanently removes the
//! content under every valid candidate region, re-marks the regions so
//! verification tooling can find them, optionally draws the branded
//! overlay, and returns the new document bytes together with a content
//! hash and an audit log.
//!
//! Within one document, regions are marked first and flattened second;
//! the flatten must see every blackout mark. The whole call is synchronous
//! and owns its document handle exclusively, so concurrent calls on
//! different documents need no coordination.

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::engine::{DocumentEngine, RedactMark, SaveOptions};
use crate::error::{RedactError, Result};
use crate::geometry::Rect;
use crate::redaction::branding::draw_branding;
use crate::redaction::id::redaction_id;
use crate::redaction::style::{BrandingStyle, RedactionStyleConfig};
use crate::xfdf;

/// One audit-log row, exported per applied redaction
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionLogEntry {
    /// Deterministic 12-hex-character region ID
    pub redaction_id: String,
    /// 0-based page index
    pub page: usize,
    /// Left edge of the redacted region, page space
    pub x0: f64,
    /// Top edge of the redacted region, page space
    pub y0: f64,
    /// Right edge of the redacted region, page space
    pub x1: f64,
    /// Bottom edge of the redacted region, page space
    pub y1: f64,
}

/// Outcome of [`apply_redactions`]
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionOutcome {
    /// The redacted document, serialized with full compaction
    pub pdf_data: Vec<u8>,
    /// Number of candidate regions actually redacted
    pub redactions_applied: usize,
    /// SHA-256 over `pdf_data`
    pub content_hash: [u8; 32],
    /// One entry per redacted region, grouped by first-seen page order
    pub redaction_log: Vec<RedactionLogEntry>,
}

/// Redaction records for one page, in insertion order
struct PageRecords {
    page: usize,
    entries: Vec<(Rect, String)>,
}

/// Permanently redact every valid region in `xfdf` out of `pdf_data`.
///
/// Candidate validation never fails the call: malformed entries are
/// skipped, counted, and logged at warning level. When `style_config` is
/// supplied, each blacked-out region is re-marked with a transparent
/// structural redact annotation and a branded overlay is drawn on top;
/// without a style the region gets the plain opaque cross-out mark. The
/// audit log is produced either way.
pub fn apply_redactions(
    engine: &dyn DocumentEngine,
    pdf_data: &[u8],
    xfdf_text: &str,
    style_config: Option<&RedactionStyleConfig>,
) -> Result<RedactionOutcome> {
    if pdf_data.is_empty() {
        return Err(RedactError::EmptyInput("Empty PDF data"));
    }
    if xfdf_text.is_empty() {
        return Err(RedactError::EmptyInput("Empty XFDF data"));
    }

    let mut doc = engine
        .open(pdf_data)
        .map_err(|e| RedactError::InvalidDocument(e.to_string()))?;

    let branding_style = BrandingStyle::from_config(style_config)?;

    let page_heights: Vec<f64> = (0..doc.page_count())
        .map(|page| doc.page_size(page).1)
        .collect();
    let parsed = xfdf::parse_candidates(xfdf_text, &page_heights)?;
    if parsed.skipped > 0 {
        warn!(
            skipped = parsed.skipped,
            "skipped annotations with invalid page or rect"
        );
    }

    // Mark every candidate for blackout, recording (rect, id) per page in
    // first-seen page order for the re-marking pass and the audit log.
    let mut groups: Vec<PageRecords> = Vec::new();
    for candidate in &parsed.candidates {
        let rect = candidate.rect;
        doc.add_redact_annotation(candidate.page, rect, RedactMark::removal());
        let rid = redaction_id(candidate.page as i32, rect.x0, rect.y0, rect.x1, rect.y1);
        match groups.iter_mut().find(|g| g.page == candidate.page) {
            Some(group) => group.entries.push((rect, rid)),
            None => groups.push(PageRecords {
                page: candidate.page,
                entries: vec![(rect, rid)],
            }),
        }
    }
    let redactions_applied = parsed.candidates.len();

    doc.apply_redactions();

    // Re-mark the now-blacked-out regions. The structural marker keeps the
    // region discoverable by verification tooling even under an overlay.
    for group in &groups {
        for (rect, rid) in &group.entries {
            match &branding_style {
                Some(style) => {
                    doc.add_redact_annotation(group.page, *rect, RedactMark::structural());
                    draw_branding(doc.as_mut(), group.page, *rect, rid, style);
                }
                None => {
                    doc.add_redact_annotation(group.page, *rect, RedactMark::blackout());
                }
            }
        }
    }

    let redaction_log: Vec<RedactionLogEntry> = groups
        .iter()
        .flat_map(|group| {
            group.entries.iter().map(|(rect, rid)| RedactionLogEntry {
                redaction_id: rid.clone(),
                page: group.page,
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
            })
        })
        .collect();

    doc.set_producer(&format!(
        "PDF Core v{} by redactr.io",
        env!("CARGO_PKG_VERSION")
    ));

    let pdf_data = doc.save(SaveOptions::compact())?;
    let content_hash: [u8; 32] = Sha256::digest(&pdf_data).into();

    info!(
        redactions_applied,
        pages = doc.page_count(),
        "applied redactions"
    );

    Ok(RedactionOutcome {
        pdf_data,
        redactions_applied,
        content_hash,
        redaction_log,
    })
}
