//! Video batch: watermark every video in a folder through an external transcoder.
//!
//! Outputs are numbered in scan order (`preview-001.mp4`, `preview-002.mp4`,
//! ...) regardless of the input names. A failing transcode is reported and
//! the batch moves on to the next video.

pub mod filter;
pub mod tools;
pub mod transcoder;

pub use filter::DrawTextFilter;
pub use tools::ffmpeg_path;
pub use transcoder::{FfmpegTranscoder, TranscodeJob, Transcoder};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::VideoConfig;
use crate::error::{BatchError, Result};
use crate::report::BatchReport;
use crate::scan::scan_folder;

/// Runs the video batch with a given transcoder.
pub struct VideoBatch<T: Transcoder> {
    config: VideoConfig,
    filter: String,
    transcoder: T,
}

impl<T: Transcoder> VideoBatch<T> {
    pub fn new(config: VideoConfig, transcoder: T) -> Self {
        let filter = DrawTextFilter::from_config(&config).to_string();
        Self {
            config,
            filter,
            transcoder,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Output path of the `index`-th video, counting from 1.
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.config
            .output_folder
            .join(format!("{}-{:03}.mp4", self.config.output_prefix, index))
    }

    pub fn job_for(&self, input: &Path, index: usize) -> TranscodeJob {
        TranscodeJob {
            input: input.to_path_buf(),
            output: self.output_path(index),
            filter: self.filter.clone(),
            audio_codec: self.config.audio_codec.clone(),
            video_codec: self.config.video_codec.clone(),
            quality: self.config.quality,
        }
    }

    /// Create the folders, transcode every video and print the report.
    ///
    /// An empty input folder is not an error: a hint is printed and the
    /// returned report has `found == 0`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        for dir in [&self.config.input_folder, &self.config.output_folder] {
            std::fs::create_dir_all(dir).map_err(|e| BatchError::io(dir, e))?;
        }

        let videos = scan_folder(&self.config.input_folder, &self.config.extensions)?;
        let mut report = BatchReport::new(videos.len());

        if videos.is_empty() {
            writeln!(
                out,
                "Place your videos in the '{}' folder",
                self.config.input_folder.display()
            )
            .map_err(BatchError::Output)?;
            return Ok(report);
        }

        tracing::info!(
            count = videos.len(),
            input = %self.config.input_folder.display(),
            output = %self.config.output_folder.display(),
            "Processing videos"
        );

        for (i, input) in videos.iter().enumerate() {
            let name = display_name(input);
            writeln!(out, "Processing {}...", name).map_err(BatchError::Output)?;

            let job = self.job_for(input, i + 1);
            match self.transcoder.run(&job) {
                Ok(()) => {
                    let detail = format!("-> {}", display_name(&job.output));
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
            .write_summary(out, "videos")
            .map_err(BatchError::Output)?;
        Ok(report)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
