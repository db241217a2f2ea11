//! Engine facade: the single entry point used by request handlers and the CLI.
//!
//! ```
//! use chrono::NaiveDate;
//! use planner_core::engine::next_date;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
//! assert_eq!(next_date(now, "20240115", "m -1").unwrap(), "20240131");
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::date::{format_date, parse_date};
use crate::error::EngineError;
use crate::recurrence::next_occurrence;
use crate::rule::{parse_rule, RepeatRule};

/// Computes the next date, as `YYYYMMDD`, on which a task anchored at
/// `anchor_text` and repeating by `rule_text` fires after `now`.
///
/// # Errors
/// * [`EngineError::DateFormatInvalid`] if `anchor_text` is not a `YYYYMMDD` date
/// * [`EngineError::Rule`] carrying the parser's [`RuleError`](crate::error::RuleError)
/// * [`EngineError::DateOutOfRange`] if the result cannot be represented
pub fn next_date(now: NaiveDate, anchor_text: &str, rule_text: &str) -> Result<String, EngineError> {
    let anchor = parse_date(anchor_text)?;
    let rule = parse_rule(rule_text)?;
    let next = step(&rule, anchor, now)?;

    debug!(rule = %rule, %anchor, %now, %next, "computed next date");
    Ok(format_date(next))
}

/// Lists the next `count` firings as `YYYYMMDD` strings.
///
/// Text-in/text-out wrapper over [`upcoming_dates`]; input errors are reported
/// in the same order as [`next_date`].
pub fn upcoming(
    now: NaiveDate,
    anchor_text: &str,
    rule_text: &str,
    count: usize,
) -> Result<Vec<String>, EngineError> {
    let anchor = parse_date(anchor_text)?;
    let rule = parse_rule(rule_text)?;
    let dates = upcoming_dates(&rule, anchor, now, count)?;
    Ok(dates.into_iter().map(format_date).collect())
}

/// Lists the next `count` firings of an already parsed rule.
///
/// The first entry is the next firing after `now`; each later one applies the
/// rule again with the previous firing as both anchor and reference date, which
/// is what completing the task on its due date does.
///
/// The result grows one firing at a time, so a huge `count` ends with
/// [`EngineError::DateOutOfRange`] at chrono's last representable date rather
/// than with an up-front allocation.
pub fn upcoming_dates(
    rule: &RepeatRule,
    anchor: NaiveDate,
    now: NaiveDate,
    count: usize,
) -> Result<Vec<NaiveDate>, EngineError> {
    let mut dates = Vec::new();
    let (mut anchor, mut now) = (anchor, now);
    for _ in 0..count {
        let next = step(rule, anchor, now)?;
        dates.push(next);
        anchor = next;
        now = next;
    }

    debug!(rule = %rule, count = dates.len(), "computed upcoming dates");
    Ok(dates)
}

fn step(rule: &RepeatRule, anchor: NaiveDate, now: NaiveDate) -> Result<NaiveDate, EngineError> {
    next_occurrence(rule, anchor, now)
        .ok_or_else(|| EngineError::DateOutOfRange(format_date(anchor.max(now))))
}
