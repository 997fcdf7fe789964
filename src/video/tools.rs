// External transcoder resolver
//
// Resolution order:
// 1) Environment variable override (BATCH_WATERMARK_FFMPEG_PATH)
// 2) Path from the config file
// 3) Sidecar next to the executable (or in its bin/ subdirectory)
// 4) PATH fallback

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{FFMPEG_BINARY, FFMPEG_PATH_ENV};

/// Get the directory containing the current executable
fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Resolve a tool path from env override, configured path, sidecar, then PATH.
pub fn resolve_tool(env_key: &str, configured: Option<&Path>, default_name: &str) -> PathBuf {
    if let Ok(v) = env::var(env_key) {
        let p = PathBuf::from(&v);
        if p.exists() {
            return p;
        }
        tracing::warn!(env = env_key, path = %v, "Tool override does not exist, ignoring");
    }

    if let Some(p) = configured {
        return p.to_path_buf();
    }

    let mut filename = default_name.to_string();
    if cfg!(windows) && !filename.to_lowercase().ends_with(".exe") {
        filename.push_str(".exe");
    }

    if let Some(dir) = exe_dir() {
        let candidate = dir.join(&filename);
        if candidate.exists() {
            return candidate;
        }

        let bin_candidate = dir.join("bin").join(&filename);
        if bin_candidate.exists() {
            return bin_candidate;
        }
    }

    PathBuf::from(default_name)
}

/// Get path to the ffmpeg binary
pub fn ffmpeg_path(configured: Option<&Path>) -> PathBuf {
    resolve_tool(FFMPEG_PATH_ENV, configured, FFMPEG_BINARY)
}
