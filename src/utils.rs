// ABOUTME: Utility functions for the reveal-deck compiler
// ABOUTME: Line handling, file timestamps and output directory helpers

use crate::errors::{DeckError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

/// Strip the line terminator (`\n` or `\r\n`) from a line produced by
/// `split_inclusive('\n')`
pub(crate) fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Last modification time of a file, or `None` when it does not exist
pub fn modified_time(path: &Path) -> Result<Option<SystemTime>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.modified()?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DeckError::FileReadError(e)),
    }
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(DeckError::FileReadError)
        }
        _ => Ok(()),
    }
}
