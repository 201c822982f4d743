use std::path::Path;

use chrono_tz::Tz;

use super::csv;
use crate::{ClockError, Result};

/// One configured clock entry: a resolved time zone plus its display label.
///
/// Entries keep the order they appear in the zone-list file; that order is
/// the on-screen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    /// The IANA time zone, resolved against the compiled-in database.
    pub tz: Tz,

    /// User-facing name shown next to the time.
    pub label: String,
}

/// Loads the ordered zone list from a CSV file of `zone_id,label` rows.
///
/// Zone identifiers are resolved to [`Tz`] values here, so a typo in the
/// zone list fails at load time with a pointed message instead of at the
/// first render.
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed, or a
/// zone identifier is not in the time-zone database.
pub fn load_zones(path: &Path) -> Result<Vec<ZoneEntry>> {
    let pairs = csv::read_pairs(path)?;

    pairs
        .into_iter()
        .map(|(zone_id, label)| {
            let tz: Tz = zone_id.parse().map_err(|_| ClockError::UnknownZone {
                zone: zone_id.clone(),
                label: label.clone(),
            })?;

            Ok(ZoneEntry { tz, label })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_zone_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn zones_load_in_file_order() {
        let (_dir, path) = write_zone_file(
            "tz,name\nAmerica/New_York,NYC\nEurope/London,London\nUTC,UTC\n",
        );

        let zones = load_zones(&path).unwrap();

        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0].label, "NYC");
        assert_eq!(zones[0].tz, chrono_tz::America::New_York);
        assert_eq!(zones[2].tz, chrono_tz::Tz::UTC);
    }

    #[test]
    fn unknown_zone_is_fatal() {
        let (_dir, path) = write_zone_file("tz,name\nAtlantis/Central,Atlantis\n");

        let err = load_zones(&path).unwrap_err();

        match err {
            ClockError::UnknownZone { zone, label } => {
                assert_eq!(zone, "Atlantis/Central");
                assert_eq!(label, "Atlantis");
            }
            other => panic!("expected UnknownZone, got {other:?}"),
        }
    }
}
