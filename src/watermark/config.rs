//! Watermark configuration types.
//!
//! `TextWatermarkConfig` is the serializable form read from YAML;
//! `WatermarkSpec` is the validated form used while processing images.

use super::text_renderer::{parse_hex_color, Color};
use super::WatermarkError;
use crate::constants::{PHOTO_COLOR, PHOTO_MARGIN_FRACTION, PHOTO_OPACITY, PHOTO_WATERMARK_TEXT};
use serde::{Deserialize, Serialize};

// Default values
fn default_text() -> String {
    PHOTO_WATERMARK_TEXT.to_string()
}

fn default_color() -> String {
    PHOTO_COLOR.to_string()
}

fn default_opacity() -> f32 {
    PHOTO_OPACITY
}

fn default_margin() -> f64 {
    PHOTO_MARGIN_FRACTION
}

/// Watermark anchor on the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkPosition {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

/// Text watermark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextWatermarkConfig {
    /// Watermark text (default: "© All rights reserved")
    #[serde(default = "default_text")]
    pub text: String,

    /// Text color as hex string (default: "#FFFFFF")
    #[serde(default = "default_color")]
    pub color: String,

    /// Opacity from 0.0 (transparent) to 1.0 (opaque) (default: 0.25)
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Anchor on the image (default: bottom-right)
    #[serde(default)]
    pub position: WatermarkPosition,

    /// Margin from the edge as a fraction of image width (default: 0.03)
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Clamp the anchor so the text stays inside the image (default: false)
    #[serde(default)]
    pub clamp_to_image: bool,
}

impl Default for TextWatermarkConfig {
    fn default() -> Self {
        Self {
            text: default_text(),
            color: default_color(),
            opacity: default_opacity(),
            position: WatermarkPosition::default(),
            margin: default_margin(),
            clamp_to_image: false,
        }
    }
}

impl TextWatermarkConfig {
    /// Validate the text watermark configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.is_empty() {
            return Err("Text watermark 'text' field cannot be empty".to_string());
        }

        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(format!(
                "Text watermark opacity must be a finite value between 0.0 and 1.0, got {}",
                self.opacity
            ));
        }

        if !self.margin.is_finite() || !(0.0..=1.0).contains(&self.margin) {
            return Err(format!(
                "Text watermark margin must be a fraction between 0.0 and 1.0, got {}",
                self.margin
            ));
        }

        if let Some(hex_part) = self.color.strip_prefix('#') {
            let len = hex_part.len();
            if (len != 3 && len != 6) || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(format!(
                    "Text watermark color must be in #RGB or #RRGGBB format with valid hex characters, got '{}'",
                    self.color
                ));
            }
        } else {
            return Err(format!(
                "Text watermark color must be a hex string starting with '#', got '{}'",
                self.color
            ));
        }

        Ok(())
    }

    /// Validate and convert into the `WatermarkSpec` used during processing.
    pub fn to_spec(&self) -> Result<WatermarkSpec, WatermarkError> {
        self.validate().map_err(WatermarkError::ConfigError)?;

        Ok(WatermarkSpec {
            text: self.text.clone(),
            opacity: self.opacity,
            color: parse_hex_color(&self.color)?,
            margin_fraction: self.margin,
            position: self.position,
            clamp_to_image: self.clamp_to_image,
        })
    }
}

/// Validated watermark settings, immutable for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkSpec {
    pub text: String,
    pub opacity: f32,
    pub color: Color,
    pub margin_fraction: f64,
    pub position: WatermarkPosition,
    pub clamp_to_image: bool,
}

impl Default for WatermarkSpec {
    fn default() -> Self {
        Self {
            text: default_text(),
            opacity: default_opacity(),
            color: Color::white(),
            margin_fraction: default_margin(),
            position: WatermarkPosition::BottomRight,
            clamp_to_image: false,
        }
    }
}
