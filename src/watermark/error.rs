//! Watermark error types.
//!
//! Defines errors that can occur while preparing or rendering a watermark.

use thiserror::Error;

/// Errors that can occur during watermark processing.
#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Failed to render text watermark
    #[error("Failed to render text watermark: {0}")]
    RenderError(String),

    /// Font file could not be located or parsed
    #[error("Failed to load font: {0}")]
    FontError(String),

    /// Invalid configuration
    #[error("Watermark configuration error: {0}")]
    ConfigError(String),
}
