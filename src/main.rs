use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use batch_watermark::config::{Config, PhotoConfig, VideoConfig};
use batch_watermark::error::BatchError;
use batch_watermark::photo::{prompt_yes_no, PhotoBatch, BACKUP_QUESTION};
use batch_watermark::video::{ffmpeg_path, FfmpegTranscoder, VideoBatch};

/// Batch Watermark - stamp a text watermark on photo folders and video previews
#[derive(Parser, Debug)]
#[command(name = "batch-watermark")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Watermark every photo in a folder, in place
    Photos {
        /// Folder with the photos (default: jpeg)
        #[arg(long)]
        folder: Option<PathBuf>,

        /// Back up originals without asking
        #[arg(long, conflicts_with = "no_backup")]
        backup: bool,

        /// Skip the backup without asking
        #[arg(long)]
        no_backup: bool,

        /// Watermark text
        #[arg(long)]
        text: Option<String>,
    },

    /// Render watermarked previews of every video in a folder
    Videos {
        /// Folder with the source videos (default: originals)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Folder for the previews (default: preview)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Watermark text
        #[arg(long)]
        text: Option<String>,
    },
}

fn main() {
    if let Err(e) = batch_watermark::logging::init_subscriber() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\nERROR: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}

fn run(args: Args) -> Result<i32> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        Commands::Photos {
            folder,
            backup,
            no_backup,
            text,
        } => {
            if let Some(folder) = folder {
                config.photos.folder = folder;
            }
            if let Some(text) = text {
                config.photos.watermark.text = text;
            }
            let backup_flag = match (backup, no_backup) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            run_photos(config.photos, backup_flag)
        }
        Commands::Videos {
            input,
            output,
            text,
        } => {
            if let Some(input) = input {
                config.videos.input_folder = input;
            }
            if let Some(output) = output {
                config.videos.output_folder = output;
            }
            if let Some(text) = text {
                config.videos.text = text;
            }
            run_videos(config.videos)
        }
    }
}

fn run_photos(config: PhotoConfig, backup_flag: Option<bool>) -> Result<i32> {
    config.validate().map_err(BatchError::Config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !config.folder.is_dir() {
        print_missing_folder(&mut out, &config)?;
        return Ok(1);
    }

    let backup = match backup_flag.or(config.backup) {
        Some(backup) => backup,
        None => {
            let stdin = std::io::stdin();
            prompt_yes_no(&mut stdin.lock(), &mut out, BACKUP_QUESTION)?
        }
    };
    if backup {
        writeln!(
            out,
            "Backup will be saved in folder '{}'",
            config.backup_folder.display()
        )?;
    }

    let font = config.font_chain().resolve();
    let batch = PhotoBatch::new(config, font)?;

    writeln!(out, "\n=== APPLYING PROFESSIONAL WATERMARK ===\n")?;
    let report = match batch.run(backup, &mut out) {
        Ok(report) => report,
        Err(BatchError::MissingFolder(_)) => {
            print_missing_folder(&mut out, batch.config())?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        found = report.found,
        processed = report.processed,
        failed = report.failed,
        "Photo batch finished"
    );

    writeln!(out, "\n✅ PROCESSING COMPLETED SUCCESSFULLY!")?;
    writeln!(
        out,
        "The images are in the '{}' folder",
        batch.config().folder.display()
    )?;
    Ok(0)
}

fn print_missing_folder<W: Write>(out: &mut W, config: &PhotoConfig) -> std::io::Result<()> {
    let folder = config.folder.display();
    writeln!(out, "\nERROR: Folder '{}' not found!", folder)?;
    writeln!(out, "Create the '{}' folder and put your photos inside", folder)
}

fn run_videos(config: VideoConfig) -> Result<i32> {
    config.validate().map_err(BatchError::Config)?;

    let program = ffmpeg_path(config.ffmpeg_path.as_deref());
    tracing::info!(ffmpeg = %program.display(), "Using transcoder");

    let batch = VideoBatch::new(config, FfmpegTranscoder::new(program));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = batch.run(&mut out)?;

    tracing::info!(
        found = report.found,
        processed = report.processed,
        failed = report.failed,
        "Video batch finished"
    );

    if report.found > 0 && !report.has_errors() {
        writeln!(out, "All videos processed successfully!")?;
    }
    Ok(0)
}
