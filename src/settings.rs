use indexmap::IndexMap;

use crate::value::Value;

/// Property name → value, in insertion order.
///
/// `None` marks a property that is known but has no value: a seeded default
/// that the file never set on reads, or a property to comment out on writes.
pub type Settings = IndexMap<String, Option<Value>>;

/// Ordered property names used to filter, seed, or target an operation.
pub type ConstraintList = Vec<String>;
