//! Zoneclock - a configuration-driven terminal world clock.
//!
//! Zoneclock renders the current time in an ordered list of named IANA time
//! zones, once per second, redrawing the terminal in place with ANSI escape
//! sequences. The main features include:
//!
//! - CSV-driven configuration (settings file + zone list, selected through a
//!   small pointer file)
//! - Day/night color coding per zone, with a 16-name ANSI color table
//! - Flag-driven display formats (seconds, date, year, UTC offset) or a raw
//!   strftime escape hatch
//! - Flicker-free whole-frame redraws aligned to wall-clock second boundaries
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zoneclock::{Config, WorldClock};
//!
//! # fn main() -> zoneclock::Result<()> {
//! let config = Config::load(std::path::Path::new("/home/user/.config/zoneclock"))?;
//! let clock = WorldClock::new(config);
//! println!("{}", clock.render_now());
//! # Ok(())
//! # }
//! ```

/// Configuration schema, CSV parsing, and color resolution.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Frame rendering: display formats, ANSI sequences, per-tick output.
pub mod render;

/// The tick scheduler and run loop.
pub mod clock;

/// Logging setup for file and stderr output.
pub mod tracing_config;

pub use clock::WorldClock;
pub use config::Config;
pub use core::{ClockError, Result};
