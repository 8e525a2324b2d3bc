//! Measurement files written by the render-measuring harness
//!
//! A measurement file holds one JSON [`Entry`] per line. Blank lines are
//! skipped. The harness appends re-runs of a test to the same file, so a
//! repeated name replaces the earlier entry while keeping its position.

use crate::error::{ReportError, Result};
use crate::model::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse measurement file contents into an ordered list of entries
///
/// # Example
/// ```
/// use render_regress::entries::parse_entries;
///
/// let data = r#"{"name":"Btn","meanDuration":12.0,"stdevDuration":0.4,"meanCount":1,"stdevCount":0,"runs":10}"#;
/// let entries = parse_entries(data).unwrap();
/// assert_eq!(entries[0].name, "Btn");
/// ```
pub fn parse_entries(data: &str) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(line).map_err(|source| ReportError::Parse {
            line: index + 1,
            source,
        })?;
        entry.validate()?;

        match positions.get(&entry.name) {
            Some(&position) => {
                tracing::debug!("{}: replacing earlier entry (line {})", entry.name, index + 1);
                entries[position] = entry;
            }
            None => {
                positions.insert(entry.name.clone(), entries.len());
                entries.push(entry);
            }
        }
    }

    Ok(entries)
}

/// Load and parse a measurement file
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&data)?;
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
