//! Watermark compositor for blending rendered text onto photos.
//!
//! The rendered text layer is blended with the Porter-Duff "over" operator
//! at its placement position. Parts of the layer that fall outside the target are clipped.
//!
//! # Example
//!
//! ```ignore
//! use batch_watermark::watermark::{stamp_text, FontChain, WatermarkSpec};
//!
//! let font = FontChain::new(names, dirs).resolve();
//! let mut photo = image::open("jpeg/IMG_0001.jpg")?.to_rgba8();
//! let placement = stamp_text(&mut photo, &WatermarkSpec::default(), &font)?;
//! println!("Font: {}px", placement.font_size);
//! ```

use super::config::WatermarkSpec;
use super::fonts::ResolvedFont;
use super::position::{
    font_size_for, is_fully_inside, place, ImageDimensions, PlacementPosition, PlacementResult,
    WatermarkDimensions,
};
use super::text_renderer::{render_text, text_advance, TextRenderOptions};
use super::WatermarkError;
use image::{Rgba, RgbaImage};

/// Render `spec.text` and blend it onto `target`.
///
/// The font size is derived from the image, then capped by the font in use.
/// Returns the size and anchor actually used.
pub fn stamp_text(
    target: &mut RgbaImage,
    spec: &WatermarkSpec,
    font: &ResolvedFont,
) -> Result<PlacementResult, WatermarkError> {
    let image = ImageDimensions {
        width: target.width(),
        height: target.height(),
    };

    let font_size = font.effective_size(font_size_for(&image));
    if font_size == 0 {
        return Err(WatermarkError::RenderError(format!(
            "Image {}x{} is too small for a watermark (font size 0)",
            image.width, image.height
        )));
    }

    let text_width = text_advance(&font.font, &spec.text, font_size as f32);
    let placement = place(&image, spec, font_size, text_width);

    let text_box = WatermarkDimensions {
        width: text_width,
        height: font_size,
    };
    if !is_fully_inside(&placement.position, &image, &text_box) {
        tracing::warn!(
            x = placement.position.x,
            y = placement.position.y,
            text_width,
            image_width = image.width,
            image_height = image.height,
            "Watermark extends beyond the image and will be clipped"
        );
    }

    let layer = render_text(
        &TextRenderOptions {
            text: spec.text.clone(),
            font_size: font_size as f32,
            color: spec.color,
            opacity: spec.opacity,
        },
        &font.font,
    )?;

    blend_layer(target, &layer, placement.position);

    Ok(placement)
}

/// Blend `layer` onto `target` with its top-left corner at `position`.
pub fn blend_layer(target: &mut RgbaImage, layer: &RgbaImage, position: PlacementPosition) {
    let target_width = target.width() as i32;
    let target_height = target.height() as i32;

    let wm_width = layer.width() as i32;
    let wm_height = layer.height() as i32;

    // Visible region
    let x_start = position.x.max(0);
    let y_start = position.y.max(0);
    let x_end = (position.x + wm_width).min(target_width);
    let y_end = (position.y + wm_height).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let wx = (tx - position.x) as u32;
            let wy = (ty - position.y) as u32;

            let wm_pixel = layer.get_pixel(wx, wy);
            let target_pixel = target.get_pixel(tx as u32, ty as u32);

            let blended = blend_pixels(*target_pixel, *wm_pixel);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}

/// Porter-Duff "over".
fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = foreground[3] as f32 / 255.0;
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
