// Photo batch tests
// End-to-end runs over temporary folders

use batch_watermark::config::PhotoConfig;
use batch_watermark::error::BatchError;
use batch_watermark::photo::PhotoBatch;
use batch_watermark::watermark::{FontChain, ResolvedFont};
use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, PhotoConfig) {
    let temp_dir = TempDir::new().unwrap();
    let config = PhotoConfig {
        folder: temp_dir.path().join("jpeg"),
        backup_folder: temp_dir.path().join("jpeg_originals"),
        ..Default::default()
    };
    std::fs::create_dir(&config.folder).unwrap();
    (temp_dir, config)
}

fn write_photo(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([30, 60, 90]))
        .save(path)
        .unwrap();
}

fn run(config: PhotoConfig, backup: bool) -> (batch_watermark::report::BatchReport, String) {
    let batch = PhotoBatch::new(config, ResolvedFont::builtin()).unwrap();
    let mut out = Vec::new();
    let report = batch.run(backup, &mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn test_corrupt_file_is_counted_and_later_files_processed() {
    let (_temp_dir, config) = setup();
    write_photo(&config.folder.join("a.jpg"), 1000, 800);
    std::fs::write(config.folder.join("b.jpg"), b"definitely not a jpeg").unwrap();
    write_photo(&config.folder.join("c.png"), 800, 1000);

    let (report, output) = run(config, false);

    assert_eq!(report.found, 3);
    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.failures[0].0, "b.jpg");

    assert!(output.starts_with("Found 3 images to process...\n"));
    assert!(output.contains("✓ a.jpg (Font: 12px)\n"));
    assert!(output.contains("✗ Error in b.jpg: "));
    assert!(output.contains("✓ c.png (Font: 12px)\n"));
    assert!(output.contains("Total processed: 2 images\n"));
    assert!(output.ends_with("Errors: 1 images\n"));
}

#[test]
fn test_non_image_files_are_ignored_not_errors() {
    let (_temp_dir, config) = setup();
    write_photo(&config.folder.join("photo.JPEG"), 600, 600);
    std::fs::write(config.folder.join("readme.txt"), b"hello").unwrap();
    std::fs::write(config.folder.join("raw.cr2"), b"raw").unwrap();

    let (report, output) = run(config.clone(), false);

    assert_eq!(report.found, 1);
    assert_eq!(report.failed, 0);
    assert!(!output.contains("readme.txt"));
    assert!(!output.contains("Errors:"));
    assert_eq!(std::fs::read(config.folder.join("readme.txt")).unwrap(), b"hello");
}

#[test]
fn test_jpeg_is_rewritten_with_watermark() {
    let (_temp_dir, config) = setup();
    let path = config.folder.join("IMG_0001.jpg");
    write_photo(&path, 1200, 900);
    let before = image::open(&path).unwrap().to_rgb8();

    let (report, _) = run(config, false);
    assert_eq!(report.processed, 1);

    let after = image::open(&path).unwrap().to_rgb8();
    assert_eq!(after.dimensions(), (1200, 900));
    // The bottom-right corner region gets lighter where the text is
    let region_sum = |img: &RgbImage| -> u64 {
        (700..900)
            .flat_map(|y| (800..1200).map(move |x| (x, y)))
            .map(|(x, y)| img.get_pixel(x, y)[0] as u64)
            .sum()
    };
    assert!(region_sum(&after) > region_sum(&before));
}

#[test]
fn test_backup_keeps_original_bytes() {
    let (_temp_dir, config) = setup();
    let path = config.folder.join("a.png");
    write_photo(&path, 500, 500);
    let original = std::fs::read(&path).unwrap();

    let (report, _) = run(config.clone(), true);

    assert_eq!(report.processed, 1);
    assert_eq!(
        std::fs::read(config.backup_folder.join("a.png")).unwrap(),
        original
    );
}

#[test]
fn test_no_backup_folder_without_backup() {
    let (_temp_dir, config) = setup();
    write_photo(&config.folder.join("a.png"), 500, 500);

    run(config.clone(), false);

    assert!(!config.backup_folder.exists());
}

#[test]
fn test_tiny_image_is_a_per_file_error() {
    let (_temp_dir, config) = setup();
    write_photo(&config.folder.join("thumb.png"), 40, 40);
    write_photo(&config.folder.join("zz.png"), 400, 400);

    let (report, output) = run(config, false);

    assert_eq!(report.failed, 1);
    assert_eq!(report.processed, 1);
    assert!(output.contains("✗ Error in thumb.png: "));
}

#[test]
fn test_missing_folder_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let config = PhotoConfig {
        folder: temp_dir.path().join("nope"),
        ..Default::default()
    };
    let batch = PhotoBatch::new(config, ResolvedFont::builtin()).unwrap();

    let result = batch.run(false, &mut Vec::new());
    assert!(matches!(result, Err(BatchError::MissingFolder(_))));
}

#[test]
fn test_font_chain_from_config_resolves_custom_dir() {
    let (temp_dir, mut config) = setup();
    let fonts_dir = temp_dir.path().join("fonts");
    std::fs::create_dir(&fonts_dir).unwrap();
    // No font with this name exists anywhere, so the builtin wins
    config.fonts = vec!["no-such-font-file.ttf".to_string()];
    config.font_dirs = vec![fonts_dir];

    let chain: FontChain = config.font_chain();
    assert!(chain.resolve().is_builtin());
}

#[test]
fn test_invalid_watermark_config_is_rejected_up_front() {
    let mut config = PhotoConfig::default();
    config.watermark.opacity = 4.0;
    assert!(PhotoBatch::new(config, ResolvedFont::builtin()).is_err());
}
