//! Typed values recovered from the text that follows a property name.
//!
//! Coercion never fails. The raw text is tried, in order, as a number, a
//! boolean literal, and a quoted string; anything else is kept as a literal.

use std::fmt;

use serde::{Serialize, Serializer};

/// A property value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    /// A string that was wrapped in matching quotes. `text` has them removed.
    Quoted { text: String, quote: char },
    Literal(String),
}

/// Convert trimmed value text into a [`Value`].
///
/// Tries: number → `true`/`false` (any case) → quoted string → literal.
pub fn coerce(raw: &str) -> Value {
    if let Some(n) = parse_number(raw) {
        return Value::Number(n);
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Some((text, quote)) = unquote(raw) {
        return Value::Quoted {
            text: text.to_string(),
            quote,
        };
    }
    Value::Literal(raw.to_string())
}

/// Strip one pair of matching `"` or `'` quotes.
fn unquote(raw: &str) -> Option<(&str, char)> {
    let mut chars = raw.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if (first == '"' || first == '\'') && first == last {
        Some((&raw[1..raw.len() - 1], first))
    } else {
        None
    }
}

/// Strict numeric parse of already-trimmed, non-empty text.
///
/// Accepts decimal and exponent forms with an optional sign, unsigned
/// `0x`/`0o`/`0b` radix literals, and `Infinity`. Rejects `NaN`, Rust's
/// `inf`/`nan` spellings, and digit separators.
fn parse_number(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }

    let radix = match raw.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        // Digits are validated, so only overflow can fail here.
        return u128::from_str_radix(digits, radix)
            .ok()
            .map(|n| n as f64)
            .or(Some(f64::INFINITY));
    }

    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    if unsigned == "Infinity" {
        return Some(if raw.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-');
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || !raw.chars().all(allowed)
    {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| !n.is_nan())
}

impl Value {
    /// Convert a JSON scalar into a [`Value`].
    ///
    /// `null` maps to `None` (the property is unset). Strings are taken
    /// literally, without re-running coercion. Arrays and objects have no
    /// `.conf` representation and yield an error message.
    pub fn from_json(json: &serde_json::Value) -> Result<Option<Value>, String> {
        match json {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Bool(b) => Ok(Some(Value::Bool(*b))),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(|f| Some(Value::Number(f)))
                .ok_or_else(|| format!("number {n} is out of range")),
            serde_json::Value::String(s) => Ok(Some(Value::Literal(s.clone()))),
            serde_json::Value::Array(_) => Err("arrays are not supported".into()),
            serde_json::Value::Object(_) => Err("nested objects are not supported".into()),
        }
    }

    /// The value as an `i64`, if it is an integral number within range.
    fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
                Some(*n as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            Value::Number(n) => match self.as_integer() {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Value::Bool(b) => write!(f, "{b}"),
            Value::Quoted { text, quote } => write!(f, "{quote}{text}{quote}"),
            Value::Literal(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => match self.as_integer() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Quoted { text, .. } => serializer.serialize_str(text),
            Value::Literal(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer() {
        assert_eq!(coerce("8080"), Value::Number(8080.0));
    }

    #[test]
    fn negative_and_fractional() {
        assert_eq!(coerce("-5"), Value::Number(-5.0));
        assert_eq!(coerce("1.5"), Value::Number(1.5));
        assert_eq!(coerce(".5"), Value::Number(0.5));
        assert_eq!(coerce("+3"), Value::Number(3.0));
    }

    #[test]
    fn exponent() {
        assert_eq!(coerce("1e3"), Value::Number(1000.0));
    }

    #[test]
    fn radix_literals() {
        assert_eq!(coerce("0x1F"), Value::Number(31.0));
        assert_eq!(coerce("0b101"), Value::Number(5.0));
        assert_eq!(coerce("0o17"), Value::Number(15.0));
        assert_eq!(coerce("0xZZ"), Value::Literal("0xZZ".into()));
    }

    #[test]
    fn infinity_is_a_number_but_nan_is_not() {
        assert_eq!(coerce("Infinity"), Value::Number(f64::INFINITY));
        assert_eq!(coerce("-Infinity"), Value::Number(f64::NEG_INFINITY));
        assert_eq!(coerce("NaN"), Value::Literal("NaN".into()));
        assert_eq!(coerce("inf"), Value::Literal("inf".into()));
    }

    #[test]
    fn numeric_lookalikes_stay_literal() {
        assert_eq!(coerce("1.2.3"), Value::Literal("1.2.3".into()));
        assert_eq!(coerce("10px"), Value::Literal("10px".into()));
        assert_eq!(coerce("1_000"), Value::Literal("1_000".into()));
        assert_eq!(coerce("."), Value::Literal(".".into()));
    }

    #[test]
    fn booleans_any_case() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("FALSE"), Value::Bool(false));
        assert_eq!(coerce("True"), Value::Bool(true));
    }

    #[test]
    fn quoted_strings_are_unwrapped() {
        assert_eq!(
            coerce("\"Bob\""),
            Value::Quoted {
                text: "Bob".into(),
                quote: '"'
            }
        );
        assert_eq!(
            coerce("'two words'"),
            Value::Quoted {
                text: "two words".into(),
                quote: '\''
            }
        );
    }

    #[test]
    fn quoted_number_stays_string() {
        assert_eq!(
            coerce("\"42\""),
            Value::Quoted {
                text: "42".into(),
                quote: '"'
            }
        );
    }

    #[test]
    fn mismatched_or_lone_quotes_are_literal() {
        assert_eq!(coerce("\"abc'"), Value::Literal("\"abc'".into()));
        assert_eq!(coerce("\""), Value::Literal("\"".into()));
    }

    #[test]
    fn empty_quotes_give_empty_text() {
        assert_eq!(
            coerce("''"),
            Value::Quoted {
                text: String::new(),
                quote: '\''
            }
        );
    }

    #[test]
    fn literal_fallback() {
        assert_eq!(coerce("hello"), Value::Literal("hello".into()));
    }

    #[test]
    fn display_restores_conf_form() {
        assert_eq!(Value::Number(8080.0).to_string(), "8080");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(coerce("'Bob'").to_string(), "'Bob'");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn serializes_as_json_scalars() {
        let json = serde_json::to_string(&vec![
            Value::Number(8080.0),
            Value::Number(0.25),
            Value::Bool(true),
            coerce("\"Bob\""),
            Value::Literal("hello".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[8080,0.25,true,"Bob","hello"]"#);
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(Value::from_json(&serde_json::json!(null)), Ok(None));
        assert_eq!(
            Value::from_json(&serde_json::json!(3000)),
            Ok(Some(Value::Number(3000.0)))
        );
        assert_eq!(
            Value::from_json(&serde_json::json!("a b")),
            Ok(Some(Value::Literal("a b".into())))
        );
        assert!(Value::from_json(&serde_json::json!([1, 2])).is_err());
        assert!(Value::from_json(&serde_json::json!({"a": 1})).is_err());
    }
}
