// Error types module

use crate::watermark::WatermarkError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the photo and video batch jobs.
///
/// Job-level variants (`MissingFolder`, `Config`) abort a run. The rest are
/// reported against a single file and the batch moves on.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Configuration errors (invalid YAML, missing env vars, bad values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input folder does not exist
    #[error("Folder '{}' not found!", .0.display())]
    MissingFolder(PathBuf),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the console report failed
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Watermark(#[from] WatermarkError),

    /// Transcoder could not be started at all
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Transcoder ran and exited unsuccessfully
    #[error("Transcoder exited with {status} for '{}'", input.display())]
    TranscoderFailed { input: PathBuf, status: String },
}

impl BatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stops the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::MissingFolder(_) | Self::Output(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;
