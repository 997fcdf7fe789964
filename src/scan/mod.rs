// Folder scanning for batch inputs

use crate::error::{BatchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the files directly inside `dir` whose extension is in `extensions`.
///
/// Matching is case-insensitive, subdirectories are not entered and the
/// result is sorted by file name.
pub fn scan_folder<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BatchError::MissingFolder(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
            BatchError::io(path, source)
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && has_allowed_extension(path, extensions) {
            files.push(path.to_path_buf());
        } else {
            tracing::trace!(path = %path.display(), "Skipping entry");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(folder = %dir.display(), found = files.len(), "Scanned folder");
    Ok(files)
}

/// Check a path's extension against an allowlist, ignoring case.
pub fn has_allowed_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e,
        None => return false,
    };

    extensions
        .iter()
        .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(ext))
}
