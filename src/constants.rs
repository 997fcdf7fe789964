// Default values for both batch jobs.
// Every field of the YAML config falls back to one of these.

// ----- Photos -----

pub const PHOTOS_FOLDER: &str = "jpeg";
pub const BACKUP_FOLDER: &str = "jpeg_originals";
pub const PHOTO_WATERMARK_TEXT: &str = "© All rights reserved";
pub const PHOTO_OPACITY: f32 = 0.25;
pub const PHOTO_COLOR: &str = "#FFFFFF";
pub const PHOTO_MARGIN_FRACTION: f64 = 0.03;
pub const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const JPEG_QUALITY: u8 = 95;

/// Font size as a fraction of the smaller image dimension.
pub const FONT_SCALE: f64 = 0.015;

/// Font files tried in order before the embedded default.
pub const FONT_FALLBACKS: [&str; 3] = ["arialbd.ttf", "arial.ttf", "DejaVuSans.ttf"];

/// Upper bound on the font size when the embedded default font is used.
pub const BUILTIN_FONT_MAX_SIZE: u32 = 72;

// ----- Videos -----

pub const VIDEO_INPUT_FOLDER: &str = "originals";
pub const VIDEO_OUTPUT_FOLDER: &str = "preview";
pub const VIDEO_OUTPUT_PREFIX: &str = "preview";
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "avi"];
pub const VIDEO_WATERMARK_TEXT: &str = "LICENSED";
pub const VIDEO_FONT: &str = "Arial";
pub const VIDEO_FONT_SIZE: u32 = 24;
pub const VIDEO_FONT_COLOR: &str = "white";
pub const VIDEO_OPACITY: f32 = 0.3;
pub const VIDEO_OFFSET_X: i32 = 10;
pub const VIDEO_OFFSET_Y: i32 = 10;
pub const VIDEO_CODEC: &str = "mpeg4";
pub const VIDEO_QUALITY: u8 = 3;
pub const AUDIO_CODEC: &str = "copy";

/// Environment variable that overrides the transcoder binary location.
pub const FFMPEG_PATH_ENV: &str = "BATCH_WATERMARK_FFMPEG_PATH";
pub const FFMPEG_BINARY: &str = "ffmpeg";
