//! File-level operations: the logic behind `get` and `set`, and the
//! `ConfigResult` enum that callers use to display results.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constraint::ConstraintInput;
use crate::error::DotconfError;
use crate::persist;
use crate::read::read_settings;
use crate::settings::Settings;
use crate::source::read_config_text;
use crate::tool_config;
use crate::types::{ConfigAction, Policy};
use crate::write::write_settings;

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// Rendered output: settings JSON for `get`, patched text for `set`.
    Output(String),
    /// Confirmation that the output was written to a file.
    Written { path: PathBuf },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Output(s) => write!(f, "{s}"),
            ConfigResult::Written { path } => write!(f, "Wrote {}", path.display()),
        }
    }
}

/// Read the settings of the config file at `path`.
///
/// `defaults` seeds and, unless the policy extends, limits the result.
pub fn get_settings(
    path: &Path,
    defaults: Option<ConstraintInput>,
    policy: &Policy,
) -> Result<Settings, DotconfError> {
    let text = load(path)?;
    let names = defaults.map(ConstraintInput::into_names).transpose()?;
    Ok(read_settings(&text, &names.unwrap_or_default(), policy))
}

/// Apply `values` onto the config file at `path` and return the new text.
///
/// The file itself is left untouched.
pub fn set_settings(
    path: &Path,
    values: Option<ConstraintInput>,
    policy: &Policy,
) -> Result<String, DotconfError> {
    let text = load(path)?;
    let desired = values.map(ConstraintInput::into_values).transpose()?;
    Ok(write_settings(&text, &desired.unwrap_or_default(), policy))
}

fn load(path: &Path) -> Result<String, DotconfError> {
    read_config_text(path)?.ok_or_else(|| DotconfError::ConfigNotFound(path.to_path_buf()))
}

/// Render settings as a JSON object. Unset properties appear as `null`.
pub fn settings_to_json(settings: &Settings, pretty: bool) -> Result<String, DotconfError> {
    let json = if pretty {
        serde_json::to_string_pretty(settings)?
    } else {
        serde_json::to_string(settings)?
    };
    Ok(json)
}

/// Run a [`ConfigAction`], sending its output to `dest` when one is given.
pub fn handle(action: ConfigAction) -> Result<ConfigResult, DotconfError> {
    match action {
        ConfigAction::Get {
            file,
            properties,
            policy,
            dest,
            pretty,
        } => {
            debug!(file = %file.display(), ?policy, "get");
            let settings = get_settings(&file, properties, &policy)?;
            deliver(settings_to_json(&settings, pretty)?, dest)
        }
        ConfigAction::Set {
            file,
            values,
            policy,
            dest,
        } => {
            debug!(file = %file.display(), ?policy, "set");
            deliver(set_settings(&file, values, &policy)?, dest)
        }
        ConfigAction::Gen { output } => deliver(tool_config::template(), output),
    }
}

fn deliver(content: String, dest: Option<PathBuf>) -> Result<ConfigResult, DotconfError> {
    match dest {
        Some(path) => {
            persist::write_output(&path, &content)?;
            Ok(ConfigResult::Written { path })
        }
        None => Ok(ConfigResult::Output(content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{SAMPLE_CONF, names};
    use std::fs;
    use tempfile::TempDir;

    fn sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("server.conf");
        fs::write(&path, SAMPLE_CONF).unwrap();
        path
    }

    #[test]
    fn get_reads_file() {
        let dir = TempDir::new().unwrap();
        let settings = get_settings(&sample(&dir), None, &Policy::new()).unwrap();
        assert_eq!(settings.len(), 4);
    }

    #[test]
    fn get_with_defaults_limits_keys() {
        let dir = TempDir::new().unwrap();
        let defaults = ConstraintInput::NameList(names(&["LISTEN", "timeout"]));
        let settings = get_settings(&sample(&dir), Some(defaults), &Policy::new()).unwrap();
        let json = settings_to_json(&settings, false).unwrap();
        assert_eq!(json, r#"{"timeout":null,"listen":8080}"#);
    }

    #[test]
    fn get_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = get_settings(&dir.path().join("nope.conf"), None, &Policy::new());
        assert!(matches!(result, Err(DotconfError::ConfigNotFound(_))));
    }

    #[test]
    fn set_returns_patched_text_without_touching_file() {
        let dir = TempDir::new().unwrap();
        let path = sample(&dir);
        let values = ConstraintInput::JsonText(r#"{"debug": true, "workers": 4}"#.into());
        let text = set_settings(&path, Some(values), &Policy::new()).unwrap();
        assert!(text.contains("\ndebug true\n"));
        assert!(text.ends_with("\nworkers 4"));
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONF);
    }

    #[test]
    fn set_without_values_returns_input() {
        let dir = TempDir::new().unwrap();
        let text = set_settings(&sample(&dir), None, &Policy::new()).unwrap();
        assert_eq!(text, SAMPLE_CONF);
    }

    #[test]
    fn handle_get_prints_json() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Get {
            file: sample(&dir),
            properties: Some(ConstraintInput::ConfText("debug".into())),
            policy: Policy::new(),
            dest: None,
            pretty: false,
        };
        let result = handle(action).unwrap();
        assert_eq!(result, ConfigResult::Output(r#"{"debug":false}"#.into()));
    }

    #[test]
    fn handle_set_writes_dest() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out").join("server.conf");
        let action = ConfigAction::Set {
            file: sample(&dir),
            values: Some(ConstraintInput::NameList(names(&["host"]))),
            policy: Policy::new(),
            dest: Some(dest.clone()),
        };
        let result = handle(action).unwrap();
        assert_eq!(result, ConfigResult::Written { path: dest.clone() });
        let written = fs::read_to_string(&dest).unwrap();
        assert!(written.contains("  # host = example.org"));
    }

    #[test]
    fn handle_gen_returns_template() {
        match handle(ConfigAction::Gen { output: None }).unwrap() {
            ConfigResult::Output(t) => assert!(t.contains("ignore_case")),
            other => panic!("Expected Output, got {other:?}"),
        }
    }

    #[test]
    fn pretty_json() {
        let mut settings = Settings::new();
        settings.insert("a".into(), None);
        assert_eq!(settings_to_json(&settings, true).unwrap(), "{\n  \"a\": null\n}");
    }

    #[test]
    fn written_display() {
        let result = ConfigResult::Written {
            path: "/tmp/x.conf".into(),
        };
        assert_eq!(result.to_string(), "Wrote /tmp/x.conf");
    }
}
