//! Text file loading
//!
//! Reads a file as UTF-8 and maps every failure to a [`ScanError`] variant
//! the CLI can report on its own line: missing path, directory, permission,
//! binary content.

use std::path::Path;

use crate::error::{Result, ScanError};

/// Load a UTF-8 text file
///
/// # Errors
///
/// - `FileNotFound` if the path does not exist
/// - `NotAFile` if the path is a directory or other non-regular file
/// - `PermissionDenied` if the file cannot be opened
/// - `Decode` if the content is not valid UTF-8
pub fn load_text(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| ScanError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(ScanError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| ScanError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
