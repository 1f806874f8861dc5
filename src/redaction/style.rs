//! Branding style configuration
//!
//! The wire-level style options are all optional strings and bytes; they
//! are validated and defaulted in one place, [`BrandingStyle::from_config`],
//! so everything downstream works with typed colors only.

use crate::color::Color;
use crate::error::Result;

/// Recognized style options, as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedactionStyleConfig {
    /// Frame fill color, hex `"#RRGGBB"` (default `#000000`)
    pub fill_color: Option<String>,
    /// Frame border color, hex (defaults to the fill color)
    pub border_color: Option<String>,
    /// Label text color, hex (default `#FFFFFF`)
    pub text_color: Option<String>,
    /// Raw icon image bytes, drawn at the frame's top-left corner
    pub icon_png: Option<Vec<u8>>,
    /// Label prefix shown before the redaction ID (default `"ID:"`)
    pub label_prefix: Option<String>,
}

/// Validated, immutable branding style.
///
/// Built once per redaction operation and reused for every region.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingStyle {
    /// Frame fill color
    pub fill_color: Color,
    /// Frame border color
    pub border_color: Color,
    /// Label text color
    pub text_color: Color,
    /// Raw icon image bytes, if any
    pub icon_png: Option<Vec<u8>>,
    /// Label prefix shown before the redaction ID
    pub label_prefix: String,
}

impl BrandingStyle {
    /// Build a style from caller configuration.
    ///
    /// Returns `Ok(None)` when no configuration was supplied (redactions
    /// stay plain black boxes). An unset or empty border color falls back
    /// to the fill color.
    pub fn from_config(config: Option<&RedactionStyleConfig>) -> Result<Option<Self>> {
        let Some(config) = config else {
            return Ok(None);
        };

        let fill_color = match config.fill_color.as_deref() {
            Some(hex) => Color::from_hex(hex)?,
            None => Color::black(),
        };
        let border_color = match config.border_color.as_deref() {
            Some(hex) if !hex.is_empty() => Color::from_hex(hex)?,
            _ => fill_color,
        };
        let text_color = match config.text_color.as_deref() {
            Some(hex) => Color::from_hex(hex)?,
            None => Color::white(),
        };

        Ok(Some(Self {
            fill_color,
            border_color,
            text_color,
            icon_png: config.icon_png.clone(),
            label_prefix: config
                .label_prefix
                .clone()
                .unwrap_or_else(|| "ID:".to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedactError;

    #[test]
    fn test_no_config_yields_no_style() {
        assert_eq!(BrandingStyle::from_config(None).unwrap(), None);
    }

    #[test]
    fn test_defaults() {
        let style = BrandingStyle::from_config(Some(&RedactionStyleConfig::default()))
            .unwrap()
            .unwrap();
        assert_eq!(style.fill_color, Color::black());
        assert_eq!(style.border_color, Color::black());
        assert_eq!(style.text_color, Color::white());
        assert_eq!(style.icon_png, None);
        assert_eq!(style.label_prefix, "ID:");
    }

    #[test]
    fn test_overrides() {
        let config = RedactionStyleConfig {
            fill_color: Some("#005941".to_string()),
            border_color: Some("#FF0000".to_string()),
            text_color: Some("#0000FF".to_string()),
            icon_png: None,
            label_prefix: Some("CASE:".to_string()),
        };
        let style = BrandingStyle::from_config(Some(&config)).unwrap().unwrap();
        assert_eq!(style.fill_color, Color::from_hex("#005941").unwrap());
        assert_eq!(style.border_color, Color::from_hex("#FF0000").unwrap());
        assert_eq!(style.text_color, Color::from_hex("#0000FF").unwrap());
        assert_eq!(style.label_prefix, "CASE:");
    }

    #[test]
    fn test_border_defaults_to_fill() {
        let config = RedactionStyleConfig {
            fill_color: Some("#005941".to_string()),
            ..RedactionStyleConfig::default()
        };
        let style = BrandingStyle::from_config(Some(&config)).unwrap().unwrap();
        assert_eq!(style.border_color, style.fill_color);

        // An empty border string also falls back to fill
        let config = RedactionStyleConfig {
            fill_color: Some("#005941".to_string()),
            border_color: Some(String::new()),
            ..RedactionStyleConfig::default()
        };
        let style = BrandingStyle::from_config(Some(&config)).unwrap().unwrap();
        assert_eq!(style.border_color, style.fill_color);
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let config = RedactionStyleConfig {
            fill_color: Some("#XYZ".to_string()),
            ..RedactionStyleConfig::default()
        };
        match BrandingStyle::from_config(Some(&config)) {
            Err(RedactError::InvalidStyle(_)) => {}
            other => panic!("Expected InvalidStyle, got {other:?}"),
        }
    }
}
