//! Branded redaction overlay rendering
//!
//! After a region has been blacked out, the renderer draws a styled frame
//! around it: always a filled rounded rectangle, optionally a corner icon,
//! and on regions large enough a non-extractable label carrying the
//! redaction ID. How much decoration a region receives is decided by a
//! pure size classification ([`BrandingTier::classify`]) so the tier logic
//! stays testable independently of any drawing.

use tracing::debug;

use crate::engine::{
    AnnotationFlags, EngineDocument, FreeTextAnnotation, PathElement, TextAlign,
};
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::redaction::style::BrandingStyle;

/// Minimum target width for the Large tier
pub const LARGE_MIN_WIDTH: f64 = 80.0;
/// Minimum target height for the Large tier
pub const LARGE_MIN_HEIGHT: f64 = 20.0;
/// Minimum target width for the Medium tier
pub const MEDIUM_MIN_WIDTH: f64 = 30.0;
/// Minimum target height for the Medium tier
pub const MEDIUM_MIN_HEIGHT: f64 = 10.0;

/// Padding between the icon and the frame edges
const ICON_PADDING: f64 = 2.0;
/// Upper bound on the icon's square size
const ICON_MAX_SIZE: f64 = 20.0;
/// Rounded-corner radius, clamped to half the smaller frame dimension
const BORDER_RADIUS: f64 = 3.0;
/// Outward expansion of the frame beyond the redaction rect
const FRAME_PADDING: f64 = 3.0;
/// Frame border stroke width
const BORDER_WIDTH: f64 = 0.5;
/// Quadratic-to-cubic conversion factor for a 90-degree arc
const BEZIER_ARC_FACTOR: f64 = 2.0 / 3.0;
/// Minimum usable font size; below this the label is suppressed
const MIN_FONT_SIZE: f64 = 4.0;

/// Size tier of a redaction region, controlling how much decoration the
/// branded overlay receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BrandingTier {
    /// Below the Medium thresholds: frame and icon only
    Small,
    /// At least 30x10: frame, icon, and ID label
    Medium,
    /// At least 80x20: as Medium, with a larger label font
    Large,
}

impl BrandingTier {
    /// Classify a target region by its page-space width and height.
    pub fn classify(width: f64, height: f64) -> Self {
        if width >= LARGE_MIN_WIDTH && height >= LARGE_MIN_HEIGHT {
            BrandingTier::Large
        } else if width >= MEDIUM_MIN_WIDTH && height >= MEDIUM_MIN_HEIGHT {
            BrandingTier::Medium
        } else {
            BrandingTier::Small
        }
    }
}

/// Draw the branded overlay for one redaction region.
///
/// `rect` is the redaction region itself; the visible frame expands
/// outward from it so that the branding surrounds the viewer's black box.
/// All degradation is internal: a corrupt icon or insufficient label space
/// reduces the decoration but never fails the call.
pub fn draw_branding(
    doc: &mut dyn EngineDocument,
    page: usize,
    rect: Rect,
    redaction_id: &str,
    style: &BrandingStyle,
) {
    let frame = rect.expand(FRAME_PADDING);

    draw_rounded_rect(
        doc,
        page,
        frame,
        BORDER_RADIUS,
        style.border_color,
        style.fill_color,
    );

    let tier = BrandingTier::classify(rect.width(), rect.height());

    // Icon rect is computed up front: the label's left edge must clear it.
    let icon_rect = style.icon_png.as_deref().and_then(|_| {
        let icon_size = (frame.height() - 2.0 * ICON_PADDING).min(ICON_MAX_SIZE);
        (icon_size > 4.0).then(|| {
            Rect::new(
                frame.x0,
                frame.y0,
                frame.x0 + icon_size,
                frame.y0 + icon_size,
            )
        })
    });

    if tier >= BrandingTier::Medium {
        let label = format!("{} {}", style.label_prefix, redaction_id);
        let base_size: f64 = if tier == BrandingTier::Large { 7.0 } else { 5.5 };
        let font_size = base_size.min(frame.height() - 4.0);
        if font_size >= MIN_FONT_SIZE {
            let text_x0 = icon_rect.map_or(frame.x0, |r| r.x1);
            let text_rect = Rect::new(
                text_x0,
                frame.y1 - font_size - 2.0,
                frame.x1 - 2.5,
                frame.y1,
            );
            doc.add_free_text(
                page,
                FreeTextAnnotation {
                    rect: text_rect,
                    text: label,
                    font: "helv".to_string(),
                    font_size,
                    text_color: style.text_color,
                    // Match the frame background so the label blends in
                    fill_color: style.fill_color,
                    align: TextAlign::Right,
                    flags: AnnotationFlags::protected(),
                },
            );
        }
    }

    if let (Some(icon_rect), Some(icon)) = (icon_rect, style.icon_png.as_deref()) {
        // Corrupt icon bytes degrade to a frame without an icon
        if let Err(e) = doc.insert_image(page, icon_rect, icon) {
            debug!(page, error = %e, "icon embedding failed, continuing without icon");
        }
    }
}

/// Draw a filled rounded rectangle with cubic-Bezier corner arcs.
fn draw_rounded_rect(
    doc: &mut dyn EngineDocument,
    page: usize,
    rect: Rect,
    radius: f64,
    border_color: Color,
    fill_color: Color,
) {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let k = BEZIER_ARC_FACTOR;
    let elements = [
        // Top edge
        PathElement::Line {
            from: Point::new(rect.x0 + r, rect.y0),
            to: Point::new(rect.x1 - r, rect.y0),
        },
        // Top-right corner
        PathElement::Bezier {
            from: Point::new(rect.x1 - r, rect.y0),
            ctrl1: Point::new(rect.x1 - r + k * r, rect.y0),
            ctrl2: Point::new(rect.x1, rect.y0 + r - k * r),
            to: Point::new(rect.x1, rect.y0 + r),
        },
        // Right edge
        PathElement::Line {
            from: Point::new(rect.x1, rect.y0 + r),
            to: Point::new(rect.x1, rect.y1 - r),
        },
        // Bottom-right corner
        PathElement::Bezier {
            from: Point::new(rect.x1, rect.y1 - r),
            ctrl1: Point::new(rect.x1, rect.y1 - r + k * r),
            ctrl2: Point::new(rect.x1 - r + k * r, rect.y1),
            to: Point::new(rect.x1 - r, rect.y1),
        },
        // Bottom edge
        PathElement::Line {
            from: Point::new(rect.x1 - r, rect.y1),
            to: Point::new(rect.x0 + r, rect.y1),
        },
        // Bottom-left corner
        PathElement::Bezier {
            from: Point::new(rect.x0 + r, rect.y1),
            ctrl1: Point::new(rect.x0 + r - k * r, rect.y1),
            ctrl2: Point::new(rect.x0, rect.y1 - r + k * r),
            to: Point::new(rect.x0, rect.y1 - r),
        },
        // Left edge
        PathElement::Line {
            from: Point::new(rect.x0, rect.y1 - r),
            to: Point::new(rect.x0, rect.y0 + r),
        },
        // Top-left corner
        PathElement::Bezier {
            from: Point::new(rect.x0, rect.y0 + r),
            ctrl1: Point::new(rect.x0, rect.y0 + r - k * r),
            ctrl2: Point::new(rect.x0 + r - k * r, rect.y0),
            to: Point::new(rect.x0 + r, rect.y0),
        },
    ];
    doc.draw_shape(page, &elements, border_color, fill_color, BORDER_WIDTH);
}
