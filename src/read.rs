//! Fold scanned lines into a [`Settings`] map.

use tracing::debug;

use crate::scan::scan_lines;
use crate::settings::Settings;
use crate::types::Policy;

/// Read the settings held in `text`.
///
/// Every name in `defaults` is seeded with `None` so callers can see which
/// expected properties the file leaves unset. Keys are stored under the
/// casing used in the file; when the matcher renamed a property, the seeded
/// entry under the constraint's casing is replaced.
///
/// `policy.extend` defaults to `true` only when `defaults` is empty. With
/// extension off, the result holds nothing but the default names.
pub fn read_settings(text: &str, defaults: &[String], policy: &Policy) -> Settings {
    let mut result = Settings::new();
    if text.is_empty() {
        return result;
    }

    let extend = policy.extend_or(defaults.is_empty());
    for name in defaults {
        result.insert(name.clone(), None);
    }

    let records = scan_lines(text, defaults, extend, policy.ignore_case, true);
    for record in records {
        let Some(property) = record.property else {
            continue;
        };
        if property.original_name != property.name {
            result.shift_remove(&property.name);
        }
        result.insert(property.original_name, property.value);
    }

    debug!(keys = result.len(), extend, "read settings");
    result
}
