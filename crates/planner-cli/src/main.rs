use clap::Parser;
use owo_colors::{OwoColorize, Style};
use planner_core::error::{EngineError, RuleError};
use tracing_subscriber::EnvFilter;

use crate::views::json::{print_json, ErrorResponse};

mod cli;
mod commands;
mod config;
mod views;

fn main() {
    let cli = cli::Cli::parse();
    let json = cli.command.json();

    let config = match config::Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            handle_error(anyhow::anyhow!("Invalid configuration: {e}"), json);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        cli::Commands::Next(command) => commands::next::next_command(command, &config),
        cli::Commands::Preview(command) => commands::preview::preview_command(command, &config),
        cli::Commands::Check(command) => commands::check::check_command(command),
    };

    if let Err(e) = result {
        handle_error(e, json);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean date or JSON document.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_error(err: anyhow::Error, json: bool) {
    let engine_error = err.downcast_ref::<EngineError>().cloned().or_else(|| {
        err.downcast_ref::<RuleError>()
            .cloned()
            .map(EngineError::from)
    });

    if json {
        let response = match &engine_error {
            Some(engine_error) => ErrorResponse::from(engine_error),
            None => ErrorResponse {
                error: err.to_string(),
                code: "internal",
            },
        };
        if print_json(&response).is_err() {
            eprintln!("{err}");
        }
        return;
    }

    let error_style = Style::new().red().bold();
    match &engine_error {
        Some(EngineError::Rule(rule_error)) => {
            eprintln!(
                "{} {}",
                "Error:".style(error_style),
                rule_error.to_string().yellow()
            );
            eprintln!("Rules look like: d 7 | y | w 1,5 | m 1,-1 [3,9]");
        }
        Some(EngineError::DateFormatInvalid(text)) => {
            eprintln!(
                "{} '{}' is not a YYYYMMDD date",
                "Error:".style(error_style),
                text.yellow()
            );
        }
        _ => eprintln!("{} {}", "Error:".style(error_style), err),
    }
}
