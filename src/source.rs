//! Load config text from disk.
//!
//! A missing file is not an error here: callers get `None` and decide what a
//! missing input means for them. Directories count as missing. Only real I/O
//! failures (permissions, invalid UTF-8, etc.) are propagated.

use std::path::Path;

use tracing::debug;

use crate::error::DotconfError;

/// Read `path` to a string, or `None` if there is no file there.
///
/// An existing empty file yields `Some("")`, which is distinct from `None`.
pub fn read_config_text(path: &Path) -> Result<Option<String>, DotconfError> {
    if path.is_dir() {
        debug!(path = %path.display(), "config path is a directory");
        return Ok(None);
    }
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "loaded config text");
            Ok(Some(content))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found");
            Ok(None)
        }
        Err(e) => Err(DotconfError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
