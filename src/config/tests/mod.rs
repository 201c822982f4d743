//! Unit tests for config loading
//!
//! Exercises the full three-file load path (pointer file, settings file,
//! zone list) over real temporary directories.

#![allow(clippy::panic)]

use std::{fs, path::Path};

use crate::{ClockError, config::Config};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn write_standard_config(dir: &Path) {
    write(
        dir,
        "zoneclock.csv",
        "key,value\nsettings_list,settings.csv\nzone_list,zones.csv\n",
    );
    write(
        dir,
        "settings.csv",
        "key,value\nshow_seconds,true\nshow_date,true\nshow_year,true\n\
         daytime_start,8\ndaytime_end,20\nentry_name_color,cyan\n\
         daytime_color,green\nnighttime_color,bright_magenta\n",
    );
    write(
        dir,
        "zones.csv",
        "tz,name\nUTC,UTC\nAmerica/New_York,NYC\nAsia/Tokyo,Tokyo\n",
    );
}

#[test]
fn full_config_loads() {
    let dir = tempfile::tempdir().unwrap();
    write_standard_config(dir.path());

    let config = Config::load(dir.path()).unwrap();

    assert_eq!(config.zones.len(), 3);
    assert_eq!(config.zones[1].label, "NYC");
    assert!(config.settings.show_date);
    assert!(config.settings.show_year);
    assert_eq!(config.settings.entry_name_color.code(), "36");
}

#[test]
fn pointer_file_selects_alternate_files() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "zoneclock.csv",
        "key,value\nsettings_list,work_settings.csv\nzone_list,work_zones.csv\n",
    );
    write(dir.path(), "work_settings.csv", "key,value\nshow_seconds,false\n");
    write(dir.path(), "work_zones.csv", "tz,name\nEurope/Berlin,Berlin\n");

    let config = Config::load(dir.path()).unwrap();

    assert!(!config.settings.show_seconds);
    assert_eq!(config.zones[0].label, "Berlin");
}

#[test]
fn missing_pointer_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::load(dir.path()).unwrap_err();

    assert!(matches!(err, ClockError::Config { .. }));
}

#[test]
fn missing_pointer_key_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "zoneclock.csv",
        "key,value\nsettings_list,settings.csv\n",
    );
    write(dir.path(), "settings.csv", "key,value\n");

    let err = Config::load(dir.path()).unwrap_err();

    match err {
        ClockError::Config { details, .. } => assert!(details.contains("zone_list")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn missing_named_settings_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "zoneclock.csv",
        "key,value\nsettings_list,absent.csv\nzone_list,zones.csv\n",
    );
    write(dir.path(), "zones.csv", "tz,name\nUTC,UTC\n");

    let err = Config::load(dir.path()).unwrap_err();

    assert!(matches!(err, ClockError::Config { .. }));
}

#[test]
fn malformed_settings_row_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_standard_config(dir.path());
    write(
        dir.path(),
        "settings.csv",
        "key,value\nshow_seconds,true\njust_one_field\n",
    );

    let err = Config::load(dir.path()).unwrap_err();

    assert!(matches!(err, ClockError::MalformedRow { line: 3, .. }));
}

#[test]
fn unknown_zone_in_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_standard_config(dir.path());
    write(dir.path(), "zones.csv", "tz,name\nMars/Olympus_Mons,Mars\n");

    let err = Config::load(dir.path()).unwrap_err();

    assert!(matches!(err, ClockError::UnknownZone { .. }));
}

#[test]
fn settings_file_with_only_header_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_standard_config(dir.path());
    write(dir.path(), "settings.csv", "key,value\n");

    let config = Config::load(dir.path()).unwrap();

    assert!(config.settings.show_seconds);
    assert_eq!(config.settings.daytime_start, 8);
    assert_eq!(config.settings.daytime_end, 20);
}
