use anyhow::{ensure, Result};
use owo_colors::OwoColorize;
use planner_core::date::{format_date, parse_date};
use planner_core::engine::upcoming_dates;
use planner_core::error::EngineError;
use planner_core::rule::parse_rule;

use crate::cli::{PreviewCommand, MAX_PREVIEW_COUNT};
use crate::config::Config;
use crate::views::json::{print_json, UpcomingResponse};
use crate::views::table::{display_occurrences, ViewOccurrence};

pub fn preview_command(command: PreviewCommand, config: &Config) -> Result<()> {
    let now = config.reference_date(command.now.as_deref())?;
    let count = command.count.unwrap_or(config.preview_count);
    ensure!(
        count <= MAX_PREVIEW_COUNT,
        "preview_count must be at most {MAX_PREVIEW_COUNT}, got {count}"
    );

    let anchor = parse_date(&command.date)?;
    let rule = parse_rule(&command.repeat).map_err(EngineError::from)?;
    let dates = upcoming_dates(&rule, anchor, now, usize::try_from(count)?)?;

    if command.json {
        let dates: Vec<String> = dates.into_iter().map(format_date).collect();
        return print_json(&UpcomingResponse {
            rule: rule.to_string(),
            dates: &dates,
        });
    }

    println!(
        "{} {} from {}",
        "Upcoming".blue().bold(),
        rule.to_string().green(),
        now.format("%Y-%m-%d")
    );
    let occurrences: Vec<ViewOccurrence> = dates
        .into_iter()
        .map(|date| ViewOccurrence::new(date, now))
        .collect();
    display_occurrences(&occurrences);
    Ok(())
}
