//! CLI entrypoint for plog
//!
//! This is the main binary that wires together all layers: it loads the
//! configuration, builds the logger registry and broadcasts one event per
//! message.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use plog_application::LoggerRegistry;
use plog_domain::LogEvent;
use plog_infrastructure::{ConfigLoader, FileConfig, RegistryBuilder};
use plog_presentation::{Cli, DispatchSummary};
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout belongs to the loggers
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting plog");

    let config = load_config(&cli)?;

    if cli.show_config {
        for source in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("  {}", source);
        }
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // === Dependency Injection ===
    let registry = RegistryBuilder::build(&config)?;
    if let Some(threshold) = cli.threshold {
        registry.set_level(threshold);
    }
    info!(loggers = ?registry.names(), "Built logger registry");

    let mut summary = DispatchSummary::new();
    if cli.messages.is_empty() {
        debug!("Reading messages from stdin");
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            dispatch(&registry, &cli, &line, &mut summary);
        }
    } else {
        for message in &cli.messages {
            dispatch(&registry, &cli, message, &mut summary);
        }
    }

    if !cli.quiet {
        eprint!("{}", summary.render());
    }

    if summary.has_failures() {
        bail!("{} write(s) failed", summary.failure_count());
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

fn dispatch(registry: &LoggerRegistry, cli: &Cli, message: &str, summary: &mut DispatchSummary) {
    let event =
        LogEvent::message(cli.level, message).with_tags(cli.tag.iter().map(String::as_str));
    summary.record(&registry.broadcast(&event));
}
