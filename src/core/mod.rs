//! Core error types and result aliases.

use std::{
    io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the zoneclock application.
///
/// Covers every fatal condition the tool can hit: unreadable or malformed
/// configuration files, out-of-range setting values, and zone identifiers
/// the time-zone database does not know.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Configuration file could not be read or is structurally unusable
    #[error("configuration error on '{path}': {details}")]
    Config {
        /// File the error occurred on
        path: PathBuf,
        /// What went wrong
        details: String,
    },

    /// A CSV row does not have the expected column count
    #[error("malformed row in '{path}' (line {line}): {details}")]
    MalformedRow {
        /// File containing the bad row
        path: PathBuf,
        /// 1-based line number of the bad row
        line: usize,
        /// What went wrong
        details: String,
    },

    /// A settings value failed validation
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The settings key
        key: String,
        /// Why its value was rejected
        reason: String,
    },

    /// A zone-list entry names a time zone the database does not know
    #[error("unknown time zone '{zone}' for entry '{label}'")]
    UnknownZone {
        /// The unrecognized IANA identifier
        zone: String,
        /// The user-facing label of the entry
        label: String,
    },

    /// I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for zoneclock operations.
pub type Result<T> = result::Result<T, ClockError>;

impl ClockError {
    /// Creates a configuration error with file path context.
    ///
    /// # Arguments
    ///
    /// * `path` - The file the error occurred on
    /// * `error` - The underlying error
    pub fn config(path: &Path, error: impl std::fmt::Display) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        ClockError::Config {
            path: clean_path,
            details: error.to_string(),
        }
    }
}
