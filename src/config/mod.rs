//! Configuration schema definitions and loading.
//!
//! Zoneclock is configured through three small CSV files inside its config
//! directory: a pointer file (`zoneclock.csv`) whose `settings_list` and
//! `zone_list` rows name the active settings and zone-list files, the
//! settings file itself (`key,value` rows), and the ordered zone list
//! (`zone_id,label` rows). The indirection makes it cheap to keep several
//! configurations side by side and switch with a one-line edit.

mod colors;
mod csv;
mod paths;
mod settings;
mod zones;

#[cfg(test)]
mod tests;

pub use colors::ColorCode;
pub use paths::{ConfigPaths, POINTER_FILE};
pub use settings::Settings;
pub use zones::ZoneEntry;

use std::path::Path;

use tracing::info;

use crate::{ClockError, Result};

/// Main configuration for zoneclock.
///
/// Fully resolved at load time: color names are translated to SGR codes and
/// zone identifiers to [`chrono_tz::Tz`] values. The render loop never
/// mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display settings.
    pub settings: Settings,

    /// Ordered list of zones to display.
    pub zones: Vec<ZoneEntry>,
}

impl Config {
    /// Loads the full configuration from the given config directory.
    ///
    /// Reads the pointer file first, then the settings and zone-list files
    /// it names (paths are taken relative to the config directory).
    ///
    /// # Errors
    /// Returns an error if any of the three files is missing or malformed,
    /// if the pointer file lacks a `settings_list` or `zone_list` row, or if
    /// a zone identifier is unknown.
    pub fn load(config_dir: &Path) -> Result<Config> {
        let pointer_path = ConfigPaths::pointer_file(config_dir);
        let pointer = csv::read_pairs(&pointer_path)?;

        let settings_file = pointer_value(&pointer, "settings_list", &pointer_path)?;
        let zone_file = pointer_value(&pointer, "zone_list", &pointer_path)?;

        let settings_pairs = csv::read_pairs(&config_dir.join(settings_file))?;
        let settings = Settings::from_pairs(&settings_pairs)?;

        let zones = zones::load_zones(&config_dir.join(zone_file))?;

        info!(
            zones = zones.len(),
            settings_file, zone_file, "configuration loaded"
        );

        Ok(Config { settings, zones })
    }
}

fn pointer_value<'a>(
    pointer: &'a [(String, String)],
    key: &str,
    pointer_path: &Path,
) -> Result<&'a str> {
    pointer
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .ok_or_else(|| {
            ClockError::config(pointer_path, format!("missing '{key}' row in pointer file"))
        })
}
