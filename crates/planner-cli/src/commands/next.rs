use anyhow::Result;
use planner_core::engine::next_date;
use tracing::debug;

use crate::cli::NextCommand;
use crate::config::Config;
use crate::views::json::{print_json, NextDateResponse};

pub fn next_command(command: NextCommand, config: &Config) -> Result<()> {
    let now = config.reference_date(command.now.as_deref())?;
    debug!(%now, date = %command.date, repeat = %command.repeat, "next date requested");

    let next = next_date(now, &command.date, &command.repeat)?;

    if command.json {
        print_json(&NextDateResponse { date: &next })?;
    } else {
        println!("{next}");
    }
    Ok(())
}
