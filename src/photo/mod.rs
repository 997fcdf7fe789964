//! Photo batch: stamp a text watermark onto every image in a folder, in place.

pub mod output;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::PhotoConfig;
use crate::error::{BatchError, Result};
use crate::report::BatchReport;
use crate::scan::scan_folder;
use crate::watermark::{stamp_text, PlacementResult, ResolvedFont, WatermarkSpec};

pub use output::{backup_file, save_in_place};

/// Question asked when neither the CLI nor the config decides on backups
pub const BACKUP_QUESTION: &str = "Do you want to backup original images? (y/n)";

pub struct PhotoBatch {
    config: PhotoConfig,
    spec: WatermarkSpec,
    font: ResolvedFont,
}

impl PhotoBatch {
    /// Validate the watermark settings and bind the font for the whole run.
    pub fn new(config: PhotoConfig, font: ResolvedFont) -> Result<Self> {
        let spec = config.watermark.to_spec()?;
        Ok(Self { config, spec, font })
    }

    pub fn config(&self) -> &PhotoConfig {
        &self.config
    }

    pub fn font(&self) -> &ResolvedFont {
        &self.font
    }

    /// Watermark every matching image in the folder and print the report.
    pub fn run<W: Write>(&self, backup: bool, out: &mut W) -> Result<BatchReport> {
        let folder = &self.config.folder;
        if !folder.is_dir() {
            return Err(BatchError::MissingFolder(folder.clone()));
        }

        if backup {
            std::fs::create_dir_all(&self.config.backup_folder)
                .map_err(|e| BatchError::io(&self.config.backup_folder, e))?;
        }

        let files = scan_folder(folder, &self.config.extensions)?;
        let mut report = BatchReport::new(files.len());

        if files.is_empty() {
            writeln!(out, "No images found in folder '{}'", folder.display())
                .map_err(BatchError::Output)?;
            return Ok(report);
        }

        writeln!(out, "Found {} images to process...\n", files.len()).map_err(BatchError::Output)?;
        tracing::info!(
            count = files.len(),
            folder = %folder.display(),
            font = %self.font.source,
            backup,
            "Processing photos"
        );

        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            match self.process_file(path, backup) {
                Ok(placement) => {
                    let detail = format!("(Font: {}px)", placement.font_size);
                    report
                        .success(out, &name, &detail)
                        .map_err(BatchError::Output)?;
                }
                Err(e) => {
                    report.failure(out, &name, &e).map_err(BatchError::Output)?;
                }
            }
        }

        report
            .write_summary(out, "images")
            .map_err(BatchError::Output)?;
        Ok(report)
    }

    /// Back up (optionally), watermark and overwrite a single image.
    pub fn process_file(&self, path: &Path, backup: bool) -> Result<PlacementResult> {
        if backup {
            backup_file(path, &self.config.backup_folder)?;
        }

        let mut image = image::open(path)?.to_rgba8();
        let placement = stamp_text(&mut image, &self.spec, &self.font)?;

        tracing::debug!(
            file = %path.display(),
            width = image.width(),
            height = image.height(),
            font_size = placement.font_size,
            x = placement.position.x,
            y = placement.position.y,
            "Watermark placed"
        );

        let rgb = image::DynamicImage::ImageRgba8(image).to_rgb8();
        save_in_place(path, rgb, self.config.jpeg_quality)?;

        Ok(placement)
    }
}

/// Ask a yes/no question; any answer starting with `y` or `Y` is yes.
///
/// End of input counts as no.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(out, "{}: ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim_start().to_lowercase().starts_with('y'))
}
