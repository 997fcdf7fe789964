// Re-encoding and backup of photo files

use image::{DynamicImage, ImageFormat, ImageOutputFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{BatchError, Result};

/// Encode `image` in the format implied by `path` and overwrite the file.
///
/// JPEG uses `jpeg_quality`; other formats use the encoder defaults. The file
/// is only touched once encoding has succeeded.
pub fn save_in_place(path: &Path, image: RgbImage, jpeg_quality: u8) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    let output_format = match format {
        ImageFormat::Jpeg => ImageOutputFormat::Jpeg(jpeg_quality),
        other => ImageOutputFormat::from(other),
    };

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image).write_to(&mut buffer, output_format)?;

    std::fs::write(path, buffer.into_inner()).map_err(|e| BatchError::io(path, e))
}

/// Copy `path` byte-for-byte into `backup_dir`, keeping its file name.
pub fn backup_file(path: &Path, backup_dir: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        BatchError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;

    let target = backup_dir.join(file_name);
    std::fs::copy(path, &target).map_err(|e| BatchError::io(&target, e))?;
    Ok(target)
}
