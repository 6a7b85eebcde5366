//! Split one logical line into a property name and an optional value.
//!
//! The tokenizer is a three-state machine:
//!
//! ```text
//! Start ──non-separator──▶ Property ──separator──▶ Equal ──non-separator──▶ value
//! ```
//!
//! Separators are space, tab, `=` and `:`. Any run of them may sit between the
//! name and the value, so `port 80`, `port=80`, `port : 80` and `port = 80`
//! all produce the same token. The value is the rest of the line, trimmed.

use crate::value::{self, Value};

/// A property recovered from a line.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyToken {
    /// Resolved name. The matcher may replace it with a constraint's casing.
    pub name: String,
    /// The name exactly as written in the source line.
    pub original_name: String,
    /// `None` when the line holds a bare name.
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Property,
    Equal,
}

pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '=' | ':')
}

/// Whether `name` reads back as the same single property name when written
/// at the start of a line.
pub(crate) fn is_property_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '#' || c.is_whitespace() || is_separator(c))
}

/// Tokenize a line that has already lost its leading spaces and comment marker.
///
/// Returns `None` when no property name is present (empty input or separators only).
pub fn tokenize(line: &str) -> Option<PropertyToken> {
    let mut state = State::Start;
    let mut name = String::new();

    for (i, c) in line.char_indices() {
        match (state, is_separator(c)) {
            (State::Start, true) | (State::Equal, true) => {}
            (State::Start, false) => {
                state = State::Property;
                name.push(c);
            }
            (State::Property, false) => name.push(c),
            (State::Property, true) => state = State::Equal,
            (State::Equal, false) => {
                let value = value::coerce(line[i..].trim());
                return Some(PropertyToken {
                    original_name: name.clone(),
                    name,
                    value: Some(value),
                });
            }
        }
    }

    if name.is_empty() {
        return None;
    }
    Some(PropertyToken {
        original_name: name.clone(),
        name,
        value: None,
    })
}
