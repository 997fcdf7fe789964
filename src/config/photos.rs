//! Photo batch configuration.
//!
//! The watermark fields (`text`, `color`, `opacity`, `position`, `margin`,
//! `clamp_to_image`) sit directly under `photos:` next to the batch
//! settings. Default values are sourced from `crate::constants`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{BACKUP_FOLDER, FONT_FALLBACKS, JPEG_QUALITY, PHOTOS_FOLDER, PHOTO_EXTENSIONS};
use crate::watermark::{FontChain, TextWatermarkConfig};

fn default_folder() -> PathBuf {
    PathBuf::from(PHOTOS_FOLDER)
}

fn default_backup_folder() -> PathBuf {
    PathBuf::from(BACKUP_FOLDER)
}

fn default_extensions() -> Vec<String> {
    PHOTO_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_jpeg_quality() -> u8 {
    JPEG_QUALITY
}

fn default_fonts() -> Vec<String> {
    FONT_FALLBACKS.iter().map(|f| f.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoConfig {
    /// Folder whose images are watermarked in place
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    #[serde(default = "default_backup_folder")]
    pub backup_folder: PathBuf,
    /// `None` means ask on the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Font files tried in order before the embedded default
    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,
    /// Extra directories searched (recursively) before the system font dirs
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,
    #[serde(flatten)]
    pub watermark: TextWatermarkConfig,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            backup_folder: default_backup_folder(),
            backup: None,
            extensions: default_extensions(),
            jpeg_quality: default_jpeg_quality(),
            fonts: default_fonts(),
            font_dirs: Vec::new(),
            watermark: TextWatermarkConfig::default(),
        }
    }
}

impl PhotoConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.watermark.validate()?;

        if self.extensions.is_empty() {
            return Err("photos.extensions cannot be empty".to_string());
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(format!(
                "photos.jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            ));
        }

        if self.folder == self.backup_folder {
            return Err(format!(
                "photos.backup_folder must differ from photos.folder ('{}')",
                self.folder.display()
            ));
        }

        Ok(())
    }

    pub fn font_chain(&self) -> FontChain {
        FontChain::new(self.fonts.clone(), self.font_dirs.clone())
    }
}
