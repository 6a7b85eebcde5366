//! Apply desired property values onto existing config text.
//!
//! The writer works line by line over the scanner's records and never drops a
//! physical line:
//!
//! - Lines without a targeted property are re-emitted verbatim.
//! - A targeted property with a value is rewritten as `name value`, keeping the
//!   file's name casing and indentation. A commented-out occurrence is
//!   reinstated only when no live line for that name exists.
//! - A targeted property without a value is commented out (`# ` prefix).
//! - Remaining targets are appended at the end, in map order, when extension
//!   is enabled.
//!
//! When names are compared case-insensitively, desired keys that differ only in
//! case name the same property; the last one wins.

use std::borrow::Cow;
use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::scan::scan_lines;
use crate::settings::Settings;
use crate::types::Policy;
use crate::value::Value;

/// Produce the text of `text` with `desired` applied.
///
/// `policy.extend` defaults to `true`. An empty `desired` map returns the input
/// unchanged.
pub fn write_settings(text: &str, desired: &Settings, policy: &Policy) -> String {
    if desired.is_empty() {
        return text.to_string();
    }

    let folded = if policy.ignore_case {
        fold_case_variants(desired)
    } else {
        Cow::Borrowed(desired)
    };
    let desired: &Settings = &folded;

    let extend = policy.extend_or(true);
    let targets: Vec<String> = desired.keys().cloned().collect();
    let records = scan_lines(text, &targets, extend, policy.ignore_case, false);

    let live: HashSet<&str> = records
        .iter()
        .filter(|r| !r.is_comment)
        .filter_map(|r| r.property.as_ref())
        .map(|p| p.name.as_str())
        .collect();
    let mut pending: HashSet<&str> = targets.iter().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + pending.len());
    for record in &records {
        let Some(property) = &record.property else {
            lines.push(record.verbatim());
            continue;
        };
        let Some(wanted) = desired.get(&property.name) else {
            lines.push(record.verbatim());
            continue;
        };
        let name = property.name.as_str();
        if record.is_comment && (live.contains(name) || !pending.contains(name)) {
            lines.push(record.verbatim());
            continue;
        }

        pending.remove(name);
        let line = match wanted {
            None if record.is_comment => record.verbatim(),
            None => format!("{}# {}", record.leading_space, record.raw_line),
            Some(value) => format!(
                "{}{} {value}",
                record.leading_space, property.original_name
            ),
        };
        lines.push(line);
    }

    let mut appended = 0;
    if extend {
        for (name, value) in desired {
            if let Some(value) = value
                && pending.contains(name.as_str())
            {
                lines.push(format!("{name} {value}"));
                appended += 1;
            }
        }
    }

    // A trailing blank line only survives the join if it is terminated.
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }

    debug!(lines = records.len(), appended, extend, "wrote settings");
    lines.join("\n")
}

/// Collapse keys equal under case folding into one entry, keeping the first
/// key's position and the last key's name and value.
fn fold_case_variants(desired: &Settings) -> Cow<'_, Settings> {
    let mut folded: IndexMap<String, (&String, &Option<Value>)> = IndexMap::new();
    for (name, value) in desired {
        folded.insert(name.to_lowercase(), (name, value));
    }
    if folded.len() == desired.len() {
        return Cow::Borrowed(desired);
    }
    debug!(
        before = desired.len(),
        after = folded.len(),
        "folded case-variant names"
    );
    Cow::Owned(
        folded
            .into_values()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    )
}
