//! CLI command definitions

use clap::Parser;
use plog_domain::LogLevel;
use std::path::PathBuf;

/// CLI arguments for plog
#[derive(Parser, Debug)]
#[command(name = "plog")]
#[command(author, version, about = "Write log events to every configured logger")]
#[command(long_about = r#"
plog writes each MESSAGE (or each line read from stdin when no message is
given) as one log event to every logger defined in the configuration.
Loggers write to stdout, stderr or size-rotated text, JSON or CSV files.

Configuration files are loaded from (in priority order):
1. PLOG_* environment variables (e.g. PLOG_LOGGERS__CONSOLE__LEVEL=debug)
2. --config <path>     Explicit config file
3. ./plog.toml         Project-level config
4. ~/.config/plog/config.toml   Global config

Example:
  plog "service started"
  plog --level warn --tag disk "disk almost full"
  tail -f app.out | plog --config audit.toml --tag app
"#)]
pub struct Cli {
    /// Messages to log, one event each (reads stdin lines when empty)
    pub messages: Vec<String>,

    /// Level of the logged events
    #[arg(short, long, default_value = "info", value_name = "LEVEL")]
    pub level: LogLevel,

    /// Tag attached to every event (can be specified multiple times)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Override the level threshold of every logger
    #[arg(long, value_name = "LEVEL")]
    pub threshold: Option<LogLevel>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
