//! Replacement mapping assembly from CLI flags and TOML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CliError, Result};

/// Load a flat TOML table of string values as a replacement mapping.
pub fn load_replacements_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let table: HashMap<String, toml::Value> = toml::from_str(&content)?;

    let mut replacements = HashMap::new();
    for (name, value) in table {
        match value {
            toml::Value::String(s) => {
                replacements.insert(name, s);
            }
            other => {
                return Err(CliError::user(format!(
                    "replacement '{name}' must be a string, got {}",
                    other.type_str()
                )));
            }
        }
    }
    Ok(replacements)
}

/// Parse a repeatable `NAME=VALUE` flag.
pub fn parse_set_flag(entry: &str) -> Result<(String, String)> {
    match entry.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CliError::user(format!(
            "invalid --set value '{entry}', expected NAME=VALUE"
        ))),
    }
}
