//! Basic geometric types and coordinate-space conversion
//!
//! Two coordinate spaces coexist in this crate: *page space* (the rendering
//! engine's convention, origin top-left, y grows downward) and *XFDF space*
//! (the annotation-exchange convention, origin bottom-left, y grows upward).
//! A [`Rect`] is only meaningful together with the page height it was
//! computed against; the conversion between the two spaces is the same
//! self-inverse formula in both directions.

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its two corner coordinates.
///
/// Invariant: `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x0: f64,
    /// Top edge in page space, bottom edge in XFDF space
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge in page space, top edge in XFDF space
    pub y1: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether all bounds are finite and correctly ordered
    pub fn is_valid(&self) -> bool {
        self.x0.is_finite()
            && self.y0.is_finite()
            && self.x1.is_finite()
            && self.y1.is_finite()
            && self.x0 <= self.x1
            && self.y0 <= self.y1
    }

    /// Grow the rectangle outward by `margin` on all four sides
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            x0: self.x0 - margin,
            y0: self.y0 - margin,
            x1: self.x1 + margin,
            y1: self.y1 + margin,
        }
    }

    /// Whether this rectangle and `other` overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    /// Convert a page-space rectangle to XFDF space.
    ///
    /// `page_height` must be the height of the page the rectangle was
    /// computed against; pages in a single document may have distinct
    /// heights.
    pub fn to_xfdf_space(&self, page_height: f64) -> Self {
        Self {
            x0: self.x0,
            y0: page_height - self.y1,
            x1: self.x1,
            y1: page_height - self.y0,
        }
    }

    /// Convert an XFDF-space rectangle to page space.
    ///
    /// The formula is its own inverse, so composing this with
    /// [`Rect::to_xfdf_space`] under the same page height is the identity
    /// up to floating-point rounding.
    pub fn to_page_space(&self, page_height: f64) -> Self {
        self.to_xfdf_space(page_height)
    }
}
