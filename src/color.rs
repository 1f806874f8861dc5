//! RGB color type used by redaction marks, branding frames, and labels

use crate::error::RedactError;

/// An RGB color with components normalized to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Parse a `"#RRGGBB"` hex color (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, RedactError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(RedactError::InvalidStyle(format!(
                "invalid hex color: {hex:?}"
            )));
        }
        let parse = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| RedactError::InvalidStyle(format!("invalid hex color: {hex:?}")))
        };
        let r = parse(&h[0..2])?;
        let g = parse(&h[2..4])?;
        let b = parse(&h[4..6])?;
        Ok(Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_black() {
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::black());
    }

    #[test]
    fn test_parses_white() {
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::white());
    }

    #[test]
    fn test_parses_color() {
        let c = Color::from_hex("#005941").unwrap();
        assert!((c.r - 0.0).abs() < 0.01);
        assert!((c.g - 0.349).abs() < 0.01);
        assert!((c.b - 0.255).abs() < 0.01);
    }

    #[test]
    fn test_parses_without_hash() {
        assert_eq!(
            Color::from_hex("FF0000").unwrap(),
            Color::rgb(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_rejects_short() {
        assert!(Color::from_hex("#FFF").is_err());
    }

    #[test]
    fn test_rejects_invalid_chars() {
        assert!(Color::from_hex("#ZZZZZZ").is_err());
    }

    #[test]
    fn test_rgb_clamps() {
        let c = Color::rgb(1.5, -0.5, 0.5);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5 });
    }
}
