//! Shared filesystem helpers for xtask workflows.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::Path;

/// Read a UTF-8 file, attaching the path to any failure.
pub fn read_text(path: &Path) -> XtaskResult<String> {
    fs::read_to_string(path).map_err(|err| {
        XtaskError::io(format!("failed to read {}: {err}", path.display())).with_path(path)
    })
}

/// Write `contents` to `path` unless the file already holds exactly those bytes.
///
/// Parent directories are created as needed. Returns `true` when the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> XtaskResult<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            XtaskError::io(format!("failed to create {}: {err}", parent.display()))
        })?;
    }
    fs::write(path, contents).map_err(|err| {
        XtaskError::io(format!("failed to write {}: {err}", path.display())).with_path(path)
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-fs-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn write_if_changed_skips_identical_contents() {
        let dir = unique_temp_dir();
        let path = dir.join("nested/out.css");

        assert!(write_if_changed(&path, ":root {}\n").expect("first write"));
        assert!(!write_if_changed(&path, ":root {}\n").expect("second write"));
        assert!(write_if_changed(&path, ".dark {}\n").expect("changed write"));
        assert_eq!(read_text(&path).expect("read back"), ".dark {}\n");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn read_text_reports_missing_file_as_io_error() {
        let path = unique_temp_dir().join("missing.json");
        let err = read_text(&path).expect_err("missing");
        assert_eq!(err.category, crate::runtime::error::XtaskErrorCategory::Io);
        assert!(err.to_string().contains("missing.json"));
    }
}
