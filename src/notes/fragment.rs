//! Fragment file parsing and schema validation.
//!
//! A fragment is a YAML mapping from section key to either one string or a
//! list of strings:
//!
//! ```yaml
//! release_summary: Faster startup.
//! fixes:
//!   - Config reload no longer drops sections.
//!   - The report header is underlined correctly.
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use super::{FragmentMeta, NoteEntry};
use crate::error::{RelnotesError, Result};
use crate::ports::FileSystem;

/// Shape of a section value as written in the file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SectionValue {
    Single(String),
    Many(Vec<Value>),
    Other(Value),
}

/// Notes of one section, in file order.
pub type SectionNotes = (String, Vec<String>);

/// Parses and validates fragment text.
///
/// Every key must be in `valid_sections`; a single string is treated as a
/// one-element list. An empty document has no sections.
///
/// # Errors
///
/// Returns a schema error naming `path` and the offending key or value.
pub fn parse_fragment(
    path: &str,
    text: &str,
    valid_sections: &BTreeSet<String>,
) -> Result<Vec<SectionNotes>> {
    let document: Value = serde_yaml::from_str(text)
        .map_err(|source| RelnotesError::Parse { path: path.to_string(), source })?;
    let mapping = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(RelnotesError::NotAMapping { path: path.to_string() }),
    };

    let mut sections = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key.as_str() {
            Some(k) if valid_sections.contains(k) => k.to_string(),
            _ => {
                return Err(RelnotesError::InvalidSection {
                    path: path.to_string(),
                    key: inline(&key),
                })
            }
        };
        let shape = serde_yaml::from_value(value).unwrap_or(SectionValue::Other(Value::Null));
        let notes = match shape {
            SectionValue::Single(note) => vec![note],
            SectionValue::Many(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(note) => Ok(note),
                    other => Err(RelnotesError::InvalidEntry {
                        path: path.to_string(),
                        value: inline(&other),
                    }),
                })
                .collect::<Result<_>>()?,
            SectionValue::Other(_) => {
                return Err(RelnotesError::InvalidValue { path: path.to_string(), key })
            }
        };
        sections.push((key, notes));
    }
    Ok(sections)
}

/// Reads a fragment through `fs` and turns its notes into entries, grouped
/// by section in file order. A section with an empty list is kept with no
/// entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn load_fragment(
    fs: &dyn FileSystem,
    path: &str,
    meta: &FragmentMeta,
    valid_sections: &BTreeSet<String>,
) -> Result<Vec<(String, Vec<NoteEntry>)>> {
    let text = fs
        .read_to_string(Path::new(path))
        .map_err(|e| RelnotesError::Read { path: path.to_string(), message: e.to_string() })?;
    let sections = parse_fragment(path, &text, valid_sections)?
        .into_iter()
        .map(|(section, notes)| {
            let entries = notes
                .into_iter()
                .map(|note| NoteEntry {
                    time: meta.time,
                    name: meta.name.clone(),
                    hash: meta.hash.clone(),
                    note,
                })
                .collect();
            (section, entries)
        })
        .collect();
    Ok(sections)
}

fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map_or_else(|_| format!("{other:?}"), |s| s.trim().to_string()),
    }
}
