use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::error::EngineError;
use planner_core::rule::{parse_rule, RepeatRule};

use crate::cli::CheckCommand;
use crate::views::json::{print_json, CheckResponse};

pub fn check_command(command: CheckCommand) -> Result<()> {
    let rule = parse_rule(&command.rule).map_err(EngineError::from)?;

    if command.json {
        return print_json(&CheckResponse {
            kind: rule.kind(),
            canonical: rule.to_string(),
            rule: &rule,
        });
    }

    println!(
        "{} {} rule: {}",
        "✓".green().bold(),
        rule.kind(),
        rule.to_string().cyan()
    );
    println!("{}", describe_rule(&rule));
    Ok(())
}

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Plain-English summary of a rule.
pub fn describe_rule(rule: &RepeatRule) -> String {
    match rule {
        RepeatRule::Daily { interval_days: 1 } => "Every day".to_string(),
        RepeatRule::Daily { interval_days } => format!("Every {interval_days} days"),
        RepeatRule::Yearly => "Every year on the anchor date".to_string(),
        RepeatRule::Weekly { weekdays } => {
            let names: Vec<&str> = weekdays
                .iter()
                .filter_map(|&n| WEEKDAY_NAMES.get(usize::try_from(n).ok()?.checked_sub(1)?))
                .copied()
                .collect();
            format!("Every {}", names.join(", "))
        }
        RepeatRule::Monthly { days, months } => {
            let days: Vec<String> = days.iter().map(|&d| month_day_name(d)).collect();
            let scope = if months.is_empty() {
                "every month".to_string()
            } else {
                let names: Vec<&str> = months
                    .iter()
                    .filter_map(|&m| MONTH_NAMES.get(usize::try_from(m).ok()?.checked_sub(1)?))
                    .copied()
                    .collect();
                names.join(", ")
            };
            format!("On the {} of {}", days.join(", "), scope)
        }
    }
}

fn month_day_name(day: i32) -> String {
    match day {
        -1 => "last day".to_string(),
        d if d < 0 => format!("{} day from the end", ordinal(-d)),
        d => ordinal(d),
    }
}

fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
