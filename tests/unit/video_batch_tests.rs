// Video batch tests
// The transcoder is mocked; only the argument lists and reporting are checked

use batch_watermark::config::VideoConfig;
use batch_watermark::error::{BatchError, Result};
use batch_watermark::video::{DrawTextFilter, TranscodeJob, Transcoder, VideoBatch};
use mockall::mock;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

mock! {
    pub Ffmpeg {}

    impl Transcoder for Ffmpeg {
        fn run(&self, job: &TranscodeJob) -> Result<()>;
    }
}

fn config_in(root: &Path) -> VideoConfig {
    let config = VideoConfig {
        input_folder: root.join("originals"),
        output_folder: root.join("preview"),
        ..Default::default()
    };
    std::fs::create_dir_all(&config.input_folder).unwrap();
    config
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"\x00\x00\x00\x18ftypmp42").unwrap();
}

fn args_of(job: &TranscodeJob) -> Vec<String> {
    job.args()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_default_argument_list() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    touch(&config.input_folder, "holiday.mp4");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_mock = Arc::clone(&seen);
    let mut transcoder = MockFfmpeg::new();
    transcoder.expect_run().times(1).returning(move |job| {
        seen_in_mock.lock().unwrap().push(job.clone());
        Ok(())
    });

    let batch = VideoBatch::new(config.clone(), transcoder);
    let report = batch.run(&mut Vec::new()).unwrap();
    assert_eq!(report.processed, 1);

    let jobs = seen.lock().unwrap();
    let input = config.input_folder.join("holiday.mp4");
    let output = config.output_folder.join("preview-001.mp4");
    assert_eq!(
        args_of(&jobs[0]),
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-vf".to_string(),
            "drawtext=font=Arial:text='LICENSED':fontsize=24:fontcolor=white@0.3:x=10:y=10"
                .to_string(),
            "-c:a".to_string(),
            "copy".to_string(),
            "-c:v".to_string(),
            "mpeg4".to_string(),
            "-q:v".to_string(),
            "3".to_string(),
            "-y".to_string(),
            output.display().to_string(),
        ]
    );
}

#[test]
fn test_outputs_are_numbered_in_scan_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    for name in ["c.avi", "a.MP4", "b.mov"] {
        touch(&config.input_folder, name);
    }

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_mock = Arc::clone(&seen);
    let mut transcoder = MockFfmpeg::new();
    transcoder.expect_run().times(3).returning(move |job| {
        let input = job.input.file_name().unwrap().to_string_lossy().into_owned();
        let output = job.output.file_name().unwrap().to_string_lossy().into_owned();
        seen_in_mock.lock().unwrap().push((input, output));
        Ok(())
    });

    let batch = VideoBatch::new(config, transcoder);
    let mut out = Vec::new();
    batch.run(&mut out).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ("a.MP4".to_string(), "preview-001.mp4".to_string()),
            ("b.mov".to_string(), "preview-002.mp4".to_string()),
            ("c.avi".to_string(), "preview-003.mp4".to_string()),
        ]
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Processing a.MP4...\n"));
    assert!(text.contains("Total processed: 3 videos\n"));
}

#[test]
fn test_spawn_failure_is_reported_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    touch(&config.input_folder, "a.mp4");
    touch(&config.input_folder, "b.mp4");

    let mut transcoder = MockFfmpeg::new();
    transcoder.expect_run().times(2).returning(|_| {
        Err(BatchError::Spawn {
            program: "ffmpeg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    });

    let batch = VideoBatch::new(config, transcoder);
    let mut out = Vec::new();
    let report = batch.run(&mut out).unwrap();

    assert_eq!(report.failed, 2);
    assert_eq!(report.processed, 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("✗ Error in a.mp4: Failed to start 'ffmpeg': not found"));
    assert!(text.contains("Errors: 2 videos"));
}

#[test]
fn test_custom_text_reaches_filter() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_in(temp_dir.path());
    config.text = "Client: ACME".to_string();
    config.output_prefix = "acme".to_string();
    touch(&config.input_folder, "a.mp4");

    let mut transcoder = MockFfmpeg::new();
    transcoder
        .expect_run()
        .withf(|job| {
            job.filter.contains(r"text='Client\: ACME'") && job.output.ends_with("acme-001.mp4")
        })
        .times(1)
        .returning(|_| Ok(()));

    let batch = VideoBatch::new(config.clone(), transcoder);
    batch.run(&mut Vec::new()).unwrap();
    assert_eq!(batch.filter(), DrawTextFilter::from_config(&config).to_string());
}
