//! `academy` -- command-line front end for learner progress.
//!
//! Loads `academy-config.yaml` (or `--config`), opens file-backed progress
//! storage under the configured data directory, runs one command, and
//! prints the result as pretty JSON on stdout. Logs go to stderr.
//!
//! ```text
//! academy status
//! academy select-path explorer
//! academy complete start
//! academy mentor request alex-chen
//! ```

mod cli;
mod commands;
mod error;

use academy_core::LoggingConfig;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage, or the command fails.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) =
        commands::load_config(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.logging, cli.log_json);

    match &source {
        Some(path) => debug!(path = %path.display(), "config file read"),
        None => info!("config file not found, using defaults"),
    }
    debug!(
        storage_key = config.progress.storage_key,
        total_node_count = config.progress.total_node_count,
        "configuration loaded"
    );

    let mut session = commands::open_session(config, cli.data_dir)?;
    let output = commands::run(&mut session, cli.command)?;

    let rendered = serde_json::to_string_pretty(&output).context("rendering output")?;
    println!("{rendered}");
    Ok(())
}

/// `RUST_LOG` wins over `logging.level`; `--log-json` forces JSON output.
fn init_logging(logging: &LoggingConfig, force_json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if force_json || logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
