use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::CaptureError;

/// Extension of Codex session rollout files.
pub const SESSION_EXTENSION: &str = "jsonl";

/// Resolve an input path to the one session file to import.
///
/// A file is returned unchanged if it has the `.jsonl` extension. A directory
/// is scanned recursively and the most recently modified `.jsonl` file wins.
pub fn resolve_input(input: &Path) -> Result<PathBuf, CaptureError> {
    let metadata = std::fs::metadata(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            CaptureError::NotFound(format!("input not found: {}", input.display()))
        }
        _ => CaptureError::Io(e),
    })?;

    if metadata.is_dir() {
        return find_latest_session(input);
    }

    if !is_session_file(input) {
        return Err(CaptureError::InvalidInput(
            "expected a Codex session .jsonl file".into(),
        ));
    }

    Ok(input.to_path_buf())
}

/// Find the newest `.jsonl` file anywhere beneath `root`.
///
/// Files sharing the newest modification time are ordered by path and the
/// lexicographically greatest one is returned.
pub fn find_latest_session(root: &Path) -> Result<PathBuf, CaptureError> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| scan_error(root, e.into()))?;
        if entry.file_type().is_dir() || !is_session_file(entry.path()) {
            continue;
        }

        let modified = entry
            .metadata()
            .map_err(|e| scan_error(root, e.into()))?
            .modified()
            .map_err(|e| scan_error(root, e))?;

        let candidate = (modified, entry.into_path());
        let newer = match &latest {
            Some(current) => candidate > *current,
            None => true,
        };
        if newer {
            latest = Some(candidate);
        }
    }

    let (_, path) = latest.ok_or_else(|| {
        CaptureError::NotFound("no .jsonl session files found in input directory".into())
    })?;
    tracing::debug!("Resolved {} to latest session {}", root.display(), path.display());
    Ok(path)
}

fn is_session_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == SESSION_EXTENSION)
}

fn scan_error(root: &Path, source: std::io::Error) -> CaptureError {
    CaptureError::Scan {
        path: root.to_path_buf(),
        source,
    }
}
