//! Text watermark rendering.
//!
//! This module measures and renders text watermarks to RGBA layers that can
//! be composited onto target images.
//!
//! Font sizes are em sizes in pixels, the same convention TrueType point
//! sizes use at 72 DPI, so a 45px watermark has a 45px em square.
//!
//! # Example
//!
//! ```ignore
//! use batch_watermark::watermark::{builtin_font, render_text, Color, TextRenderOptions};
//!
//! let options = TextRenderOptions {
//!     text: "© 2025".to_string(),
//!     font_size: 45.0,
//!     color: Color::white(),
//!     opacity: 0.25,
//! };
//!
//! let layer = render_text(&options, builtin_font())?;
//! ```

use super::WatermarkError;
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

/// Parsed RGB color from hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White color.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Options for text rendering.
#[derive(Debug, Clone)]
pub struct TextRenderOptions {
    /// The text to render.
    pub text: String,
    /// Font em size in pixels.
    pub font_size: f32,
    /// Text color (RGB).
    pub color: Color,
    /// Opacity (0.0 to 1.0).
    pub opacity: f32,
}

/// Parse a hex color string into RGB components.
///
/// Supports both #RGB and #RRGGBB formats.
///
/// # Examples
///
/// ```
/// use batch_watermark::watermark::{parse_hex_color, Color};
///
/// let white = parse_hex_color("#FFF").unwrap();
/// assert_eq!(white, Color::new(255, 255, 255));
///
/// let red = parse_hex_color("#FF0000").unwrap();
/// assert_eq!(red, Color::new(255, 0, 0));
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Color, WatermarkError> {
    let hex = hex
        .strip_prefix('#')
        .ok_or_else(|| WatermarkError::ConfigError("Color must start with '#'".to_string()))?;

    if !hex.is_ascii() {
        return Err(WatermarkError::ConfigError(format!(
            "Color must contain only hex digits, got '#{}'",
            hex
        )));
    }

    let digit = |s: &str| {
        u8::from_str_radix(s, 16)
            .map_err(|_| WatermarkError::ConfigError(format!("Invalid hex digit in '{}'", s)))
    };

    match hex.len() {
        3 => {
            // #RGB format - each digit is doubled: 0xF -> 0xFF
            let r = digit(&hex[0..1])?;
            let g = digit(&hex[1..2])?;
            let b = digit(&hex[2..3])?;
            Ok(Color::new(r * 17, g * 17, b * 17))
        }
        6 => Ok(Color::new(
            digit(&hex[0..2])?,
            digit(&hex[2..4])?,
            digit(&hex[4..6])?,
        )),
        _ => Err(WatermarkError::ConfigError(format!(
            "Color must be #RGB or #RRGGBB format, got {} characters",
            hex.len()
        ))),
    }
}

/// Pixel scale whose em square is `font_size` pixels tall.
pub fn em_scale(font: &FontArc, font_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(font_size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(font_size),
    }
}

/// Horizontal advance of `text` in pixels, kerning included, rounded up.
///
/// This is the width used to anchor the watermark.
pub fn text_advance(font: &FontArc, text: &str, font_size: f32) -> u32 {
    let scaled_font = font.as_scaled(em_scale(font, font_size));

    let mut width = 0.0f32;
    let mut prev_glyph: Option<GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }

        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.max(0.0).ceil() as u32
}

/// Calculate the canvas dimensions needed to render `text`.
///
/// Returns (width, height) in pixels, with a small padding so antialiased
/// edges are not cut off.
pub fn measure_text(font: &FontArc, text: &str, font_size: f32) -> (u32, u32) {
    let scaled_font = font.as_scaled(em_scale(font, font_size));
    let width = text_advance(font, text, font_size);
    let height = scaled_font.height();

    let padding = 2;
    (width + padding, height.ceil() as u32 + padding)
}

/// Render text to an RGBA image.
///
/// Creates a new image with transparent background containing the rendered
/// text. Glyph coverage is scaled by `opacity`, so the returned layer already
/// carries the watermark transparency.
pub fn render_text(options: &TextRenderOptions, font: &FontArc) -> Result<RgbaImage, WatermarkError> {
    if options.text.is_empty() {
        return Err(WatermarkError::RenderError(
            "Cannot render empty text".to_string(),
        ));
    }

    if options.font_size.is_nan() || options.font_size <= 0.0 {
        return Err(WatermarkError::RenderError(format!(
            "Font size must be greater than 0, got {}",
            options.font_size
        )));
    }

    let scale = em_scale(font, options.font_size);
    let scaled_font = font.as_scaled(scale);

    let (width, height) = measure_text(font, &options.text, options.font_size);
    let (canvas_width, canvas_height) = (width.max(1), height.max(1));

    let mut image = RgbaImage::new(canvas_width, canvas_height);

    let alpha = (options.opacity.clamp(0.0, 1.0) * 255.0) as u8;

    let baseline_y = scaled_font.ascent();

    let mut cursor_x = 0.0f32;
    let mut prev_glyph: Option<GlyphId> = None;

    for c in options.text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && x < canvas_width as i32 && y < canvas_height as i32 {
                    let pixel_alpha = (coverage * alpha as f32) as u8;
                    let pixel = Rgba([
                        options.color.r,
                        options.color.g,
                        options.color.b,
                        pixel_alpha,
                    ]);

                    // Overlapping glyph edges
                    let existing = image.get_pixel(x as u32, y as u32);
                    let blended = blend_pixels(*existing, pixel);
                    image.put_pixel(x as u32, y as u32, blended);
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    Ok(image)
}

/// Blend two RGBA pixels using alpha compositing.
fn blend_pixels(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let top_alpha = top[3] as f32 / 255.0;
    let bottom_alpha = bottom[3] as f32 / 255.0;

    let out_alpha = top_alpha + bottom_alpha * (1.0 - top_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |t: u8, b: u8| -> u8 {
        let t = t as f32 / 255.0;
        let b = b as f32 / 255.0;
        let result = (t * top_alpha + b * bottom_alpha * (1.0 - top_alpha)) / out_alpha;
        (result * 255.0) as u8
    };

    Rgba([
        blend(top[0], bottom[0]),
        blend(top[1], bottom[1]),
        blend(top[2], bottom[2]),
        (out_alpha * 255.0) as u8,
    ])
}
