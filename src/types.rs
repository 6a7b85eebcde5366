use std::path::PathBuf;

use crate::constraint::ConstraintInput;

/// Matching policy threaded through every read and write.
///
/// `extend` controls whether properties outside the constraint list are kept
/// (reads) or appended (writes). Left as `None`, it resolves per operation:
/// a read extends only when it has no constraint list, a write always extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub extend: Option<bool>,
    pub ignore_case: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            extend: None,
            ignore_case: true,
        }
    }
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the extend flag instead of deriving it from the operation.
    pub fn extend(mut self, extend: bool) -> Self {
        self.extend = Some(extend);
        self
    }

    /// Compare property names case-insensitively (default: `true`).
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// The effective extend flag, falling back to `default` when unset.
    pub fn extend_or(&self, default: bool) -> bool {
        self.extend.unwrap_or(default)
    }
}

/// A file-level operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Read settings from `file`, optionally limited to `properties`.
    Get {
        file: PathBuf,
        properties: Option<ConstraintInput>,
        policy: Policy,
        dest: Option<PathBuf>,
        /// Pretty-print the JSON output.
        pretty: bool,
    },
    /// Apply `values` onto `file` and produce the patched text.
    Set {
        file: PathBuf,
        values: Option<ConstraintInput>,
        policy: Policy,
        dest: Option<PathBuf>,
    },
    /// Produce a commented template of the tool's own defaults file.
    Gen { output: Option<PathBuf> },
}
