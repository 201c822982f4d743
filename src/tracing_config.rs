//! Logging setup for file and stderr output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConfigPaths;

/// Initialize tracing with file output only
///
/// Stdout is the frame surface while the clock is running, so runtime logs
/// go to a daily-rolling file under the application data directory instead.
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info".
///
/// # Errors
/// Returns error if the log directory or file cannot be created, or if
/// tracing subscriber initialization fails
pub fn init_file_only() -> Result<(), Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("zoneclock")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_level(true)
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()?;

    // Keep the appender's worker alive for the life of the process.
    std::mem::forget(guard);

    Ok(())
}

/// Initialize tracing with stderr output
///
/// Used for one-shot invocations (`--once`, `--check`) where stdout carries
/// the command's result and diagnostics belong on stderr.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
