use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Upper bound for `preview --count` and the `preview_count` setting.
pub const MAX_PREVIEW_COUNT: u64 = 1000;

/// Next-date calculator for recurring to-do tasks
#[derive(Parser, Debug)]
#[command(name = "planner", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML); missing files are ignored
    #[arg(long, global = true, default_value = "planner.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the next date a recurring task fires on
    Next(NextCommand),
    /// Preview several upcoming dates of a recurring task
    Preview(PreviewCommand),
    /// Validate a repeat rule and show its canonical form
    Check(CheckCommand),
}

impl Commands {
    /// Whether the command asked for JSON output, errors included.
    pub fn json(&self) -> bool {
        match self {
            Commands::Next(cmd) => cmd.json,
            Commands::Preview(cmd) => cmd.json,
            Commands::Check(cmd) => cmd.json,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// The task's anchor date (YYYYMMDD)
    #[arg(short, long)]
    pub date: String,
    /// The repeat rule, e.g. "d 7", "y", "w 1,5", "m 1,-1 3,9"
    #[arg(short, long, allow_hyphen_values = true)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to the configured date or today
    #[arg(long)]
    pub now: Option<String>,
    /// Print a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// The task's anchor date (YYYYMMDD)
    #[arg(short, long)]
    pub date: String,
    /// The repeat rule
    #[arg(short, long, allow_hyphen_values = true)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to the configured date or today
    #[arg(long)]
    pub now: Option<String>,
    /// Number of dates to show (defaults to `preview_count` from the config)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(..=MAX_PREVIEW_COUNT))]
    pub count: Option<u64>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// The repeat rule to validate
    #[arg(allow_hyphen_values = true)]
    pub rule: String,
    #[arg(long)]
    pub json: bool,
}
