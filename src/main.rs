//! termweave command-line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termweave::cli::{Cli, Commands};
use termweave::Config;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "TERMWEAVE_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Wrap {
            width,
            tab_width,
            file,
        } => commands::text::handle_wrap(&config, width, tab_width, file.as_deref())?,
        Commands::Width { tab_width, text } => {
            commands::text::handle_width(&config, tab_width, text.as_deref())?
        }
        Commands::Strip { file } => commands::text::handle_strip(file.as_deref())?,
        Commands::Theme => commands::color::handle_theme(&config)?,
        Commands::Probe { foreground } => {
            if !commands::color::handle_probe(&config, foreground)? {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Contrast { first, second } => {
            commands::color::handle_contrast(first, second)?
        }
        Commands::Palette => commands::color::handle_palette(&config)?,
        Commands::Config => commands::config::handle_show(&config)?,
    }
    Ok(ExitCode::SUCCESS)
}
