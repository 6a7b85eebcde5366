//! Normalize the constraint parameter of an operation.
//!
//! Reads take a list of property names and writes take a map of desired
//! values, but callers hand either one over in several shapes: a path to a
//! file, JSON text, `.conf`-style text, a list of `name [value]` entries, or an
//! already-built map. [`ConstraintInput`] names the shape once, at the
//! boundary, so the core never has to guess.
//!
//! | Shape | Names | Values |
//! |-------|-------|--------|
//! | JSON array `["port", "host x"]` | entry names | entry values (`None` when bare) |
//! | JSON object `{"port": 80}` | keys | scalars (`null` ⇒ unset) |
//! | conf text `port 80` | property names | property values |
//! | file path | whatever the file holds, by the rules above | |

use std::path::{Path, PathBuf};

use crate::error::DotconfError;
use crate::read::read_settings;
use crate::settings::{ConstraintList, Settings};
use crate::source::read_config_text;
use crate::token::{is_property_name, tokenize};
use crate::types::Policy;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintInput {
    /// A file whose content is JSON or conf text.
    FilePath(PathBuf),
    /// A JSON array of entries or a JSON object of values.
    JsonText(String),
    /// Conf-style `name value` lines.
    ConfText(String),
    /// `name [value]` entries, one property each.
    NameList(Vec<String>),
    ValueMap(Settings),
}

impl ConstraintInput {
    /// Classify a free-form string: an existing file, JSON, or conf text.
    pub fn sniff(input: &str) -> Self {
        if Path::new(input).is_file() {
            return ConstraintInput::FilePath(PathBuf::from(input));
        }
        if is_json_container(input) {
            return ConstraintInput::JsonText(input.to_string());
        }
        ConstraintInput::ConfText(input.to_string())
    }

    /// Classify repeated command-line entries.
    ///
    /// A single entry may be a file path, JSON, or conf text and is sniffed.
    /// Several entries are a list of `name [value]` properties.
    pub fn from_entries(mut entries: Vec<String>) -> Option<Self> {
        match entries.len() {
            0 => None,
            1 => entries.pop().map(|e| Self::sniff(&e)),
            _ => Some(ConstraintInput::NameList(entries)),
        }
    }

    /// Resolve to a list of property names, in input order.
    pub fn into_names(self) -> Result<ConstraintList, DotconfError> {
        Ok(self.into_values()?.into_keys().collect())
    }

    /// Resolve to a map of desired values.
    ///
    /// Every key must be a single property name and every value must fit on
    /// one line; anything else is an [`DotconfError::InvalidValue`].
    pub fn into_values(self) -> Result<Settings, DotconfError> {
        let settings = match self {
            ConstraintInput::FilePath(path) => {
                let text = read_config_text(&path)?.ok_or(DotconfError::ConfigNotFound(path))?;
                if is_json_container(&text) {
                    json_to_settings(&text)
                } else {
                    Ok(conf_to_settings(&text))
                }
            }
            ConstraintInput::JsonText(text) => json_to_settings(&text),
            ConstraintInput::ConfText(text) => Ok(conf_to_settings(&text)),
            ConstraintInput::NameList(entries) => Ok(entries_to_settings(&entries)),
            ConstraintInput::ValueMap(map) => Ok(map),
        }?;
        for (key, value) in &settings {
            check_entry(key, value.as_ref())?;
        }
        Ok(settings)
    }
}

fn check_entry(key: &str, value: Option<&Value>) -> Result<(), DotconfError> {
    let reason = if !is_property_name(key) {
        "not a property name: must be non-empty, without whitespace, '#', '=' or ':'"
    } else if value.is_some_and(|v| v.to_string().contains(['\n', '\r'])) {
        "values must fit on a single line"
    } else {
        return Ok(());
    };
    Err(DotconfError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

fn is_json_container(text: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(text),
        Ok(serde_json::Value::Array(_) | serde_json::Value::Object(_))
    )
}

/// Conf text is read with every property kept and names compared exactly.
fn conf_to_settings(text: &str) -> Settings {
    read_settings(text, &[], &Policy::new().extend(true).ignore_case(false))
}

fn entries_to_settings<S: AsRef<str>>(entries: &[S]) -> Settings {
    entries
        .iter()
        .filter_map(|e| tokenize(e.as_ref()))
        .map(|t| (t.original_name, t.value))
        .collect()
}

fn json_to_settings(text: &str) -> Result<Settings, DotconfError> {
    match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Array(items) => {
            let mut entries = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    serde_json::Value::String(s) => entries.push(s.as_str()),
                    other => {
                        return Err(DotconfError::InvalidValue {
                            key: format!("[{i}]"),
                            reason: format!("expected a property entry string, got {other}"),
                        });
                    }
                }
            }
            Ok(entries_to_settings(&entries))
        }
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(key, json)| {
                Value::from_json(json)
                    .map(|value| (key.clone(), value))
                    .map_err(|reason| DotconfError::InvalidValue {
                        key: key.clone(),
                        reason,
                    })
            })
            .collect(),
        other => Err(DotconfError::InvalidValue {
            key: "<input>".into(),
            reason: format!("expected a JSON array or object, got {other}"),
        }),
    }
}
