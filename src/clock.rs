//! The tick scheduler and run loop.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use tracing::{debug, info};

use crate::{
    Result,
    config::Config,
    render::{DisplayFormat, ansi, render_frame},
};

/// The world clock: configuration plus its derived display format.
///
/// The format is derived once here; the run loop reuses both unchanged for
/// the lifetime of the process.
pub struct WorldClock {
    config: Config,
    format: DisplayFormat,
}

impl WorldClock {
    /// Builds a clock from a loaded configuration.
    pub fn new(config: Config) -> Self {
        let format = DisplayFormat::from_settings(&config.settings);
        debug!(pattern = format.pattern(), "derived display format");

        WorldClock { config, format }
    }

    /// Renders a single frame for the current instant.
    pub fn render_now(&self) -> String {
        render_frame(Utc::now(), &self.config, &self.format)
    }

    /// Runs the render loop until Ctrl-C.
    ///
    /// Each iteration suspends until the next wall-clock second boundary,
    /// renders that boundary instant, and writes the whole frame to stdout
    /// in one call. Re-deriving the boundary from "now" every cycle absorbs
    /// the renderer's own execution time, so displayed seconds stay in
    /// lockstep with real time instead of drifting the way a fixed
    /// one-second sleep would.
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub async fn run(&self) -> Result<()> {
        let mut stdout = io::stdout();

        // Start from a clean screen with the cursor at the top left.
        stdout.write_all(ansi::CURSOR_HOME.as_bytes())?;
        stdout.write_all(ansi::CLEAR_BELOW.as_bytes())?;
        stdout.flush()?;

        info!(zones = self.config.zones.len(), "starting render loop");

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            let next = next_second_boundary(Utc::now());
            let wait = (next - Utc::now()).to_std().unwrap_or(Duration::ZERO);

            tokio::select! {
                _ = &mut ctrl_c => {
                    restore_terminal(&mut stdout)?;
                    info!("interrupted, terminal restored");
                    return Ok(());
                }
                () = tokio::time::sleep(wait) => {
                    let frame = render_frame(next, &self.config, &self.format);
                    stdout.write_all(frame.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
    }
}

/// Computes the next whole-second boundary strictly after `now`.
pub fn next_second_boundary(now: DateTime<Utc>) -> DateTime<Utc> {
    // Zeroing the subsecond component always stays within range.
    let floored = now.with_nanosecond(0).unwrap_or(now);
    floored + TimeDelta::seconds(1)
}

fn restore_terminal(stdout: &mut io::Stdout) -> Result<()> {
    stdout.write_all(ansi::RESET.as_bytes())?;
    stdout.write_all(ansi::CLEAR_BELOW.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
