// Transcoder invocation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BatchError, Result};

/// One input-to-output transcode with a video filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: String,
    pub audio_codec: String,
    pub video_codec: String,
    pub quality: u8,
}

impl TranscodeJob {
    /// Argument list: `-i <in> -vf <filter> -c:a <audio> -c:v <video> -q:v <q> -y <out>`.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-i".into(),
            self.input.clone().into_os_string(),
            "-vf".into(),
            self.filter.clone().into(),
            "-c:a".into(),
            self.audio_codec.clone().into(),
            "-c:v".into(),
            self.video_codec.clone().into(),
            "-q:v".into(),
            self.quality.to_string().into(),
            "-y".into(),
            self.output.clone().into_os_string(),
        ]
    }
}

/// Runs a [`TranscodeJob`] to completion.
#[cfg_attr(test, mockall::automock)]
pub trait Transcoder {
    fn run(&self, job: &TranscodeJob) -> Result<()>;
}

/// Spawns an ffmpeg process with inherited stdio and waits for it.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Transcoder for FfmpegTranscoder {
    fn run(&self, job: &TranscodeJob) -> Result<()> {
        tracing::debug!(
            program = %self.program.display(),
            input = %job.input.display(),
            output = %job.output.display(),
            filter = %job.filter,
            "Running transcoder"
        );

        let status = Command::new(&self.program)
            .args(job.args())
            .status()
            .map_err(|source| BatchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(BatchError::TranscoderFailed {
                input: job.input.clone(),
                status: status.to_string(),
            });
        }

        tracing::debug!(output = %job.output.display(), "Transcoder finished");
        Ok(())
    }
}
