//! Video batch configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    AUDIO_CODEC, VIDEO_CODEC, VIDEO_EXTENSIONS, VIDEO_FONT, VIDEO_FONT_COLOR, VIDEO_FONT_SIZE,
    VIDEO_INPUT_FOLDER, VIDEO_OFFSET_X, VIDEO_OFFSET_Y, VIDEO_OPACITY, VIDEO_OUTPUT_FOLDER,
    VIDEO_OUTPUT_PREFIX, VIDEO_QUALITY, VIDEO_WATERMARK_TEXT,
};

fn default_input_folder() -> PathBuf {
    PathBuf::from(VIDEO_INPUT_FOLDER)
}

fn default_output_folder() -> PathBuf {
    PathBuf::from(VIDEO_OUTPUT_FOLDER)
}

fn default_output_prefix() -> String {
    VIDEO_OUTPUT_PREFIX.to_string()
}

fn default_extensions() -> Vec<String> {
    VIDEO_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_text() -> String {
    VIDEO_WATERMARK_TEXT.to_string()
}

fn default_font() -> String {
    VIDEO_FONT.to_string()
}

fn default_font_size() -> u32 {
    VIDEO_FONT_SIZE
}

fn default_font_color() -> String {
    VIDEO_FONT_COLOR.to_string()
}

fn default_opacity() -> f32 {
    VIDEO_OPACITY
}

fn default_x() -> i32 {
    VIDEO_OFFSET_X
}

fn default_y() -> i32 {
    VIDEO_OFFSET_Y
}

fn default_video_codec() -> String {
    VIDEO_CODEC.to_string()
}

fn default_audio_codec() -> String {
    AUDIO_CODEC.to_string()
}

fn default_quality() -> u8 {
    VIDEO_QUALITY
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConfig {
    #[serde(default = "default_input_folder")]
    pub input_folder: PathBuf,
    #[serde(default = "default_output_folder")]
    pub output_folder: PathBuf,
    /// Outputs are named `<prefix>-001.mp4`, `<prefix>-002.mp4`, ...
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    // drawtext settings
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Color name or `0xRRGGBB`, as understood by the transcoder
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_x")]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,

    // encoder settings
    #[serde(default = "default_video_codec")]
    pub video_codec: String,
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,
    /// `-q:v` value, 1 (best) to 31
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Explicit transcoder binary; see `video::tools::ffmpeg_path`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            input_folder: default_input_folder(),
            output_folder: default_output_folder(),
            output_prefix: default_output_prefix(),
            extensions: default_extensions(),
            text: default_text(),
            font: default_font(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            opacity: default_opacity(),
            x: default_x(),
            y: default_y(),
            video_codec: default_video_codec(),
            audio_codec: default_audio_codec(),
            quality: default_quality(),
            ffmpeg_path: None,
        }
    }
}

impl VideoConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.is_empty() {
            return Err("videos.text cannot be empty".to_string());
        }

        if self.font.is_empty() {
            return Err("videos.font cannot be empty".to_string());
        }

        if self.font_size == 0 {
            return Err("videos.font_size must be greater than 0".to_string());
        }

        if self.font_color.is_empty()
            || !self
                .font_color
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '#')
        {
            return Err(format!(
                "videos.font_color must be a color name or hex value, got '{}'",
                self.font_color
            ));
        }

        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(format!(
                "videos.opacity must be a finite value between 0.0 and 1.0, got {}",
                self.opacity
            ));
        }

        if self.extensions.is_empty() {
            return Err("videos.extensions cannot be empty".to_string());
        }

        if self.output_prefix.is_empty() || self.output_prefix.contains(['/', '\\']) {
            return Err(format!(
                "videos.output_prefix must be a plain file name prefix, got '{}'",
                self.output_prefix
            ));
        }

        if self.video_codec.is_empty() || self.audio_codec.is_empty() {
            return Err("videos.video_codec and videos.audio_codec cannot be empty".to_string());
        }

        if !(1..=31).contains(&self.quality) {
            return Err(format!(
                "videos.quality must be between 1 and 31, got {}",
                self.quality
            ));
        }

        Ok(())
    }
}
