//! Write operation output to disk.
//!
//! Creates parent directories as needed. Writing is last-writer-wins; nothing
//! here coordinates concurrent writers of the same file.

use std::path::Path;

use tracing::debug;

use crate::error::DotconfError;

/// Write `content` to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<(), DotconfError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DotconfError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| DotconfError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
