//! Defaults for the `dotconf` command itself.
//!
//! Loaded with confique from `dotconf.toml` in the platform config directory
//! (`~/.config/dotconf/` on Linux) and from `DOTCONF_*` environment variables.
//! Env vars win over the file; command-line flags win over both.

use std::path::{Path, PathBuf};

use confique::Config;

use crate::error::DotconfError;
use crate::types::Policy;

#[derive(Config, Debug, PartialEq)]
pub struct ToolConfig {
    /// Compare property names case-insensitively.
    #[config(default = true, env = "DOTCONF_IGNORE_CASE")]
    pub ignore_case: bool,

    /// Keep (get) or append (set) properties outside the given list.
    /// Leave unset to let each command decide.
    #[config(env = "DOTCONF_EXTEND")]
    pub extend: Option<bool>,

    /// Pretty-print the JSON printed by `get`.
    #[config(default = false, env = "DOTCONF_PRETTY")]
    pub pretty: bool,
}

impl ToolConfig {
    /// The matching policy these defaults describe.
    pub fn policy(&self) -> Policy {
        Policy {
            extend: self.extend,
            ignore_case: self.ignore_case,
        }
    }
}

/// Location of the user's `dotconf.toml`, if a home directory can be found.
pub fn config_path() -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", "dotconf")?;
    Some(proj.config_dir().join("dotconf.toml"))
}

/// Load defaults from the platform config file and the environment.
pub fn load() -> Result<ToolConfig, DotconfError> {
    load_from(config_path().as_deref())
}

/// Load defaults from an explicit file (missing files are skipped) and the environment.
pub fn load_from(path: Option<&Path>) -> Result<ToolConfig, DotconfError> {
    let mut builder = ToolConfig::builder().env();
    if let Some(path) = path {
        builder = builder.file(path);
    }
    Ok(builder.load()?)
}

/// A commented TOML template of every setting and its default.
pub fn template() -> String {
    confique::toml::template::<ToolConfig>(confique::toml::FormatOptions::default())
}
