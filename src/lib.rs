//! Read and patch simple `.conf` files: one `key value` pair per line, `#`
//! comments, nothing nested.
//!
//! ```ignore
//! let settings = dotconf::read_settings("Port 8080\n", &["port".into()], &Policy::new());
//! assert_eq!(settings["Port"], Some(Value::Number(8080.0)));
//! ```
//!
//! # File format
//!
//! ```text
//! # comment
//! port 8080
//!   host = example.org
//! debug: true
//! motd 'hello there'
//! ```
//!
//! A property line is a name followed by any run of separators (space, tab,
//! `=`, `:`) and a value. A comment line starts with `#` after optional
//! indentation. Anything else passes through untouched.
//!
//! Values are coerced in order: number, `true`/`false` (any case), quoted
//! string (quotes stripped), literal string. Coercion never fails.
//!
//! # Reading
//!
//! [`read_settings`] folds a file into an ordered [`Settings`] map. An
//! optional list of default names seeds the map with `None` entries and, unless
//! the [`Policy`] extends, limits it to those names. Names match
//! case-insensitively by default; keys keep the casing written in the file.
//!
//! # Writing
//!
//! [`write_settings`] applies a map of desired values to existing text and
//! never deletes a line:
//!
//! - a property with a value is rewritten in place,
//! - a property mapped to `None` is commented out,
//! - a commented-out property is reinstated when it gets a value back,
//! - new properties are appended at the end when the policy extends.
//!
//! Every other line, including comments and blank lines, comes back verbatim,
//! and applying the same map twice gives the same text as applying it once.
//!
//! # Policy
//!
//! [`Policy`] carries the two matching flags explicitly through every call.
//! `extend` left unset means "extend when there is no constraint list" for
//! reads and "extend" for writes.
//!
//! # Inputs at the boundary
//!
//! The file-level operations in [`ops`] accept their constraint parameter as a
//! [`ConstraintInput`]: a file path, JSON text, conf text, a list of
//! `name [value]` entries, or a ready [`Settings`] map. It is normalized once
//! before the core runs. A missing config file surfaces as
//! [`DotconfError::ConfigNotFound`]; the core itself has no failure modes.
//!
//! # Command line
//!
//! With the `clap` feature (default), the `dotconf` binary exposes
//! `get`, `set` and `gen`. Its own defaults (`ignore_case`, `extend`,
//! `pretty`) come from `dotconf.toml` in the platform config directory and
//! `DOTCONF_*` env vars, loaded through [`tool_config`].

pub mod error;
pub mod ops;
pub mod tool_config;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod constraint;
mod matcher;
mod persist;
mod read;
mod scan;
mod settings;
mod source;
mod token;
mod value;
mod write;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{CommonArgs, DotconfArgs, DotconfSubcommand};
pub use constraint::ConstraintInput;
pub use error::DotconfError;
pub use matcher::match_property;
pub use ops::ConfigResult;
pub use read::read_settings;
pub use scan::{LineRecord, scan_lines};
pub use settings::{ConstraintList, Settings};
pub use source::read_config_text;
pub use token::{PropertyToken, tokenize};
pub use types::{ConfigAction, Policy};
pub use value::{Value, coerce};
pub use write::write_settings;
