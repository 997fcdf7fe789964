//! Position and size calculation for watermark placement.
//!
//! The font size follows the smaller image dimension and the margin follows
//! the image width, so the watermark keeps the same proportions on every
//! photo regardless of resolution or orientation.
//!
//! # Example
//!
//! ```
//! use batch_watermark::watermark::{compute_placement, ImageDimensions, PlacementPosition, WatermarkSpec};
//!
//! let image = ImageDimensions { width: 3000, height: 4000 };
//! let placement = compute_placement(&image, &WatermarkSpec::default(), 300);
//!
//! assert_eq!(placement.font_size, 45);
//! // 3000 - 300 - 90, 4000 - 45 - 90
//! assert_eq!(placement.position, PlacementPosition::new(2610, 3865));
//! ```
//!
//! Coordinates are signed and are not clamped unless `clamp_to_image` is set:
//! a long text on a small image yields a negative `x`.

use super::config::{WatermarkPosition, WatermarkSpec};
use crate::constants::FONT_SCALE;

/// Dimensions of the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Dimensions of the watermark to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkDimensions {
    pub width: u32,
    pub height: u32,
}

/// Top-left corner where a watermark should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Font size and anchor computed for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementResult {
    pub font_size: u32,
    pub position: PlacementPosition,
}

/// Font size for an image: 1.5% of the smaller dimension, rounded down.
///
/// A 3000x4000 photo gets 45px; a 4000x6000 photo gets 60px.
pub fn font_size_for(image: &ImageDimensions) -> u32 {
    let min_dimension = image.width.min(image.height);
    (min_dimension as f64 * FONT_SCALE).floor() as u32
}

/// Margin in pixels: `margin_fraction` of the image width, rounded down.
pub fn margin_pixels(image: &ImageDimensions, margin_fraction: f64) -> u32 {
    (image.width as f64 * margin_fraction).floor() as u32
}

/// Compute font size and anchor for a watermark of the given measured width.
///
/// `measured_text_width` must have been measured at `font_size_for(image)`.
pub fn compute_placement(
    image: &ImageDimensions,
    spec: &WatermarkSpec,
    measured_text_width: u32,
) -> PlacementResult {
    place(image, spec, font_size_for(image), measured_text_width)
}

/// Same as [`compute_placement`] with an explicit font size.
///
/// Used when the font in use caps the size below `font_size_for(image)`.
/// The font size doubles as the text height.
pub fn place(
    image: &ImageDimensions,
    spec: &WatermarkSpec,
    font_size: u32,
    measured_text_width: u32,
) -> PlacementResult {
    let margin = margin_pixels(image, spec.margin_fraction);
    let text_box = WatermarkDimensions {
        width: measured_text_width,
        height: font_size,
    };

    let mut position = calculate_position(spec.position, image, &text_box, margin);
    if spec.clamp_to_image {
        position = clamp_to_bounds(position, image, &text_box);
    }

    PlacementResult {
        font_size,
        position,
    }
}

/// Calculate the anchor for a single watermark placement.
///
/// # Arguments
///
/// * `position` - The configured anchor
/// * `image` - Dimensions of the target image
/// * `watermark` - Dimensions of the watermark
/// * `margin` - Margin from edges in pixels
///
/// # Returns
///
/// The (x, y) coordinates where the watermark should be placed.
/// Coordinates may be negative if the watermark is larger than the image.
pub fn calculate_position(
    position: WatermarkPosition,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
    margin: u32,
) -> PlacementPosition {
    let img_w = image.width as i32;
    let img_h = image.height as i32;
    let wm_w = watermark.width as i32;
    let wm_h = watermark.height as i32;
    let m = margin as i32;

    match position {
        // Top row
        WatermarkPosition::TopLeft => PlacementPosition::new(m, m),
        WatermarkPosition::TopCenter => PlacementPosition::new((img_w - wm_w) / 2, m),
        WatermarkPosition::TopRight => PlacementPosition::new(img_w - wm_w - m, m),

        // Center row
        WatermarkPosition::CenterLeft => PlacementPosition::new(m, (img_h - wm_h) / 2),
        WatermarkPosition::Center => PlacementPosition::new((img_w - wm_w) / 2, (img_h - wm_h) / 2),
        WatermarkPosition::CenterRight => {
            PlacementPosition::new(img_w - wm_w - m, (img_h - wm_h) / 2)
        }

        // Bottom row
        WatermarkPosition::BottomLeft => PlacementPosition::new(m, img_h - wm_h - m),
        WatermarkPosition::BottomCenter => {
            PlacementPosition::new((img_w - wm_w) / 2, img_h - wm_h - m)
        }
        WatermarkPosition::BottomRight => PlacementPosition::new(img_w - wm_w - m, img_h - wm_h - m),
    }
}

/// Clamp a position to ensure the watermark stays within image bounds.
///
/// When the watermark is larger than the image the position is pinned to 0.
pub fn clamp_to_bounds(
    pos: PlacementPosition,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> PlacementPosition {
    let max_x = (image.width as i32 - watermark.width as i32).max(0);
    let max_y = (image.height as i32 - watermark.height as i32).max(0);

    PlacementPosition::new(pos.x.clamp(0, max_x), pos.y.clamp(0, max_y))
}

/// Check if the whole watermark lies within the image.
pub fn is_fully_inside(
    pos: &PlacementPosition,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> bool {
    pos.x >= 0
        && pos.y >= 0
        && pos.x + watermark.width as i32 <= image.width as i32
        && pos.y + watermark.height as i32 <= image.height as i32
}
