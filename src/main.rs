//! winplace
//!
//! Moves and resizes an X11 window so that its *visible* area lands on the
//! requested rectangle, compensating for toolkit shadows
//! (`_GTK_FRAME_EXTENTS`) and window manager decorations
//! (`_NET_FRAME_EXTENTS`).

mod cli;
mod client;
mod config;
mod error;
mod extents;
mod geometry;
mod place;
mod resolve;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::client::WindowSystem;
use crate::client::x11::X11Client;
use crate::config::Config;
use crate::geometry::{ClientRect, Rect};
use crate::place::{Settle, WindowPlacer};
use crate::resolve::WindowResolver;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version are not failures; every usage error is 1.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = Config::load(cli.config.as_deref());
    init_logging(config.as_ref().ok().and_then(|c| c.log_filter.as_deref()));
    let config = config.unwrap_or_else(|e| {
        warn!("{:#}, using defaults", e);
        Config::default()
    });

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Not through tracing: the log filter may be "off".
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}

/// Progress goes to stdout, warnings and errors to stderr.
fn init_logging(filter: Option<&str>) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| filter.map(str::to_string))
        .unwrap_or_else(|| "winplace=info".into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(
                    std::io::stderr
                        .with_max_level(tracing::Level::WARN)
                        .or_else(std::io::stdout),
                ),
        )
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let target = cli
        .target()
        .context("Width and height must be positive integers")?;

    // Dropping the client closes the connection, on every path out of here.
    let client = X11Client::connect(cli.display.as_deref())?;
    place_window(&client, cli.name.as_deref(), target, settle(cli, config))?;

    info!("Window placed successfully");
    Ok(())
}

/// Resolve the target window, then place it.
fn place_window<W: WindowSystem>(
    client: &W,
    name: Option<&str>,
    target: Rect,
    settle: Settle,
) -> crate::error::Result<ClientRect> {
    let window = WindowResolver::new(client).resolve(name)?;
    info!(
        "Moving window (0x{:x}) to visible position ({}, {}) with size {}x{}",
        window, target.x, target.y, target.width, target.height
    );

    WindowPlacer::new(client, settle).place(window, target)
}

/// Command line flags first, then the config file.
fn settle(cli: &Cli, config: &Config) -> Settle {
    if cli.no_unmaximize {
        return Settle::Skip;
    }
    if let Some(timeout) = cli.wait_unmaximize {
        return Settle::Poll {
            interval: Duration::from_millis(config.settle.poll_interval_ms),
            timeout: Duration::from_millis(timeout),
        };
    }
    if let Some(delay) = cli.settle_ms {
        return Settle::Fixed(Duration::from_millis(delay));
    }
    config.settle.settle()
}
