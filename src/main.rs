#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use awesome_rc::{ConfigLoader, X11Platform};

/// Load and resolve the window manager configuration for a screen
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.awesomerc
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(short, long)]
    display: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let (conn, screen_num) =
        x11rb::connect(args.display.as_deref()).context("Failed to connect to X11 server")?;
    info!("successfully connected to x11: screen={screen_num}");

    let platform = X11Platform::new(&conn, screen_num, screen_num)
        .context("Failed to initialize X11 platform")?;
    let config = match ConfigLoader::new(&platform).load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "fatal configuration error");
            std::process::exit(1);
        }
    };

    info!("config={:#?}", config);
    Ok(())
}
