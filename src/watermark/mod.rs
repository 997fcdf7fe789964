//! Text watermarking for still images.
//!
//! The watermark text is rendered once per image at a size proportional to
//! the image, anchored near a corner and alpha-blended onto the pixels.
//!
//! # Configuration Example
//!
//! ```yaml
//! photos:
//!   text: "© Studio North"
//!   color: "#FFFFFF"
//!   opacity: 0.25
//!   position: bottom-right
//!   margin: 0.03
//! ```
//!
//! # Sizing
//!
//! - font size: 1.5% of `min(width, height)`, rounded down
//! - margin: 3% of the width, rounded down
//! - anchor: `(W - text_width - margin, H - font_size - margin)` for bottom-right

pub mod compositor;
pub mod config;
pub mod error;
pub mod fonts;
pub mod position;
pub mod text_renderer;

// Re-export main types for convenience
pub use compositor::{blend_layer, stamp_text};
pub use config::{TextWatermarkConfig, WatermarkPosition, WatermarkSpec};
pub use error::WatermarkError;
pub use fonts::{builtin_font, load_font_file, FontChain, FontSource, ResolvedFont};
pub use position::{
    calculate_position, clamp_to_bounds, compute_placement, font_size_for, is_fully_inside,
    margin_pixels, place, ImageDimensions, PlacementPosition, PlacementResult, WatermarkDimensions,
};
pub use text_renderer::{
    measure_text, parse_hex_color, render_text, text_advance, Color, TextRenderOptions,
};
