// Configuration tests
// Loading from disk, defaults and validation through the public API

use batch_watermark::config::*;
use batch_watermark::error::BatchError;
use batch_watermark::watermark::WatermarkPosition;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_defaults_match_constants() {
    let config = Config::default();
    assert_eq!(config.photos.folder, PathBuf::from("jpeg"));
    assert_eq!(config.photos.watermark.text, "© All rights reserved");
    assert_eq!(config.photos.watermark.opacity, 0.25);
    assert_eq!(config.photos.watermark.position, WatermarkPosition::BottomRight);
    assert_eq!(config.videos.input_folder, PathBuf::from("originals"));
    assert_eq!(config.videos.output_folder, PathBuf::from("preview"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r##"
photos:
  folder: "/srv/photos"
  backup: true
  backup_folder: "/srv/photos-orig"
  extensions: [jpg, jpeg]
  jpeg_quality: 90
  fonts: ["Inter-Bold.ttf", "DejaVuSans.ttf"]
  font_dirs: ["/opt/fonts"]
  text: "© Studio"
  color: "#FFCC00"
  opacity: 0.5
  position: top-right
  margin: 0.05
videos:
  input_folder: "/srv/video/in"
  output_folder: "/srv/video/out"
  output_prefix: "proof"
  extensions: [mp4]
  text: "PROOF"
  font_size: 32
  font_color: yellow
  opacity: 0.6
  x: 20
  y: 30
  video_codec: libx264
  quality: 4
"##,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.photos.backup, Some(true));
    assert_eq!(config.photos.extensions, vec!["jpg", "jpeg"]);
    assert_eq!(config.photos.jpeg_quality, 90);
    assert_eq!(config.photos.fonts[0], "Inter-Bold.ttf");
    assert_eq!(config.photos.font_dirs, vec![PathBuf::from("/opt/fonts")]);
    assert_eq!(config.photos.watermark.position, WatermarkPosition::TopRight);
    assert_eq!(config.videos.output_prefix, "proof");
    assert_eq!(config.videos.font_color, "yellow");
    assert_eq!((config.videos.x, config.videos.y), (20, 30));
    assert_eq!(config.videos.video_codec, "libx264");
    assert_eq!(config.videos.audio_codec, "copy");
}

#[test]
fn test_load_reports_validation_error_as_config_error() {
    let file = write_config("videos:\n  quality: 99\n");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, BatchError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error: "));
}

#[test]
fn test_unknown_position_is_rejected() {
    let file = write_config("photos:\n  position: middle\n");
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn test_env_substitution_in_paths() {
    std::env::set_var("BW_IT_PHOTO_ROOT", "/data/shoot");
    let config = Config::from_yaml_with_env("photos:\n  folder: ${BW_IT_PHOTO_ROOT}/jpeg\n").unwrap();
    assert_eq!(config.photos.folder, PathBuf::from("/data/shoot/jpeg"));
    std::env::remove_var("BW_IT_PHOTO_ROOT");
}
