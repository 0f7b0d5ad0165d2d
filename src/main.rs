//! TypingStories - static landing page generator with SEO metadata and JSON-LD.

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod page;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::select_clock};
use config::{SiteConfig, init_config};
use page::{Clock, SystemClock};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // `query` without -o prints JSON on stdout, so logs move to stderr
    logger::set_stderr(matches!(
        &cli.command,
        Commands::Query { args } if args.output.is_none()
    ));

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Build { now, .. } => {
            let clock = select_clock(now.as_deref())?;
            cli::build::build_site(&config, clock.as_ref()).map(|_| ())
        }
        Commands::Serve { .. } => {
            let clock: Arc<dyn Clock> = Arc::new(SystemClock);
            cli::serve::serve_site(clock)
        }
        Commands::Query { args } => {
            let clock = select_clock(args.now.as_deref())?;
            cli::query::run_query(args, &config, clock.as_ref())
        }
    }
}
