//! Flat CSV primitives for the configuration files.
//!
//! Every zoneclock input is a small comma-separated file with a header line
//! and exactly two columns per row. There is no quoting or escaping support;
//! a comma always splits fields. Anything that deviates from that shape is a
//! fatal, reported error rather than a silent skip.

use std::{fs, path::Path};

use crate::{ClockError, Result};

/// Reads a two-column CSV file into an ordered list of `(key, value)` pairs.
///
/// The first line is treated as a header and discarded. Blank lines are
/// skipped. Row order is preserved, so callers that care about ordering
/// (the zone list) can rely on it, and callers that don't (the settings
/// file) can fold the pairs into whatever structure they like.
///
/// # Errors
/// Returns an error if the file cannot be read or any row does not have
/// exactly two fields.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|e| ClockError::config(path, e))?;

    let mut pairs = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');

        // Header row.
        if index == 0 {
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 {
            return Err(ClockError::MalformedRow {
                path: path.to_path_buf(),
                line: index + 1,
                details: format!("expected 2 comma-separated fields, found {}", fields.len()),
            });
        }

        pairs.push((fields[0].to_string(), fields[1].to_string()));
    }

    Ok(pairs)
}
