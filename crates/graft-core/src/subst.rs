//! `__NAME__` token substitution inside inserted lines.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches a replacement token and captures its bare name.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([A-Za-z0-9_]+)__").expect("Invalid token regex"));

/// Replace every mapped `__NAME__` token in `line`.
///
/// Tokens with no entry in the mapping are left exactly as found, so block
/// content that happens to use dunder-style identifiers survives
/// untouched. The scan is greedy left-to-right and non-overlapping.
pub fn substitute_tokens<'a>(
    line: &'a str,
    replacements: &HashMap<String, String>,
) -> Cow<'a, str> {
    TOKEN.replace_all(line, |caps: &Captures| match replacements.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}
