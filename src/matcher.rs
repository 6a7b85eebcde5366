//! Resolve a tokenized property against a constraint list.

use crate::token::PropertyToken;

/// Match `token` against `constraints`.
///
/// On a match the token's `name` takes the constraint's exact casing, while
/// `original_name` keeps the source casing. Without a match the token is kept
/// unchanged when `extend` is set and dropped otherwise.
pub fn match_property(
    mut token: PropertyToken,
    constraints: &[String],
    extend: bool,
    ignore_case: bool,
) -> Option<PropertyToken> {
    let found = if ignore_case {
        let wanted = token.name.to_lowercase();
        constraints.iter().find(|c| c.to_lowercase() == wanted)
    } else {
        constraints.iter().find(|c| **c == token.name)
    };

    match found {
        Some(name) => {
            token.name = name.clone();
            Some(token)
        }
        None if extend => Some(token),
        None => None,
    }
}
