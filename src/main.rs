//! Zoneclock binary - renders a world clock in the terminal.
//!
//! With no arguments this loads the configuration from the default config
//! directory and redraws the clock once per second until interrupted.

use std::{error::Error, io::Write, path::PathBuf, process};

use clap::Parser;
use tracing::info;
use zoneclock::{Config, WorldClock, config::ConfigPaths, tracing_config};

/// A configuration-driven terminal world clock.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory holding zoneclock.csv and the files it points to
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Render a single frame to stdout and exit
    #[arg(long)]
    once: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.once || cli.check {
        tracing_config::init_stderr()?;
    } else {
        tracing_config::init_file_only()?;
        info!("starting zoneclock");
    }

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => ConfigPaths::config_dir()?,
    };

    let config = match Config::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("zoneclock: {e}");
            process::exit(1);
        }
    };

    if cli.check {
        println!(
            "configuration OK: {} zone(s) from {}",
            config.zones.len(),
            config_dir.display()
        );
        return Ok(());
    }

    let clock = WorldClock::new(config);

    if cli.once {
        let mut stdout = std::io::stdout();
        stdout.write_all(clock.render_now().as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    clock.run().await?;

    Ok(())
}
