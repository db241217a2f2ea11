use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::date::{days_in_month, first_of_month_after, resolve_month_day};

/// The Gregorian calendar repeats every 400 years, so a month/day combination
/// that has not matched within this many months never will.
const GREGORIAN_CYCLE_MONTHS: u32 = 400 * 12;

/// Next date strictly after `max(anchor, now)` whose day matches one of
/// `days` in a month listed in `months` (every month when `months` is empty).
///
/// Negative days count back from the end of each candidate month; a day that
/// does not exist in a month (31 in April, -30 in February) is skipped there.
pub fn next_monthly(
    anchor: NaiveDate,
    now: NaiveDate,
    days: &BTreeSet<i32>,
    months: &BTreeSet<u32>,
) -> Option<NaiveDate> {
    let start = anchor.max(now);
    (0..GREGORIAN_CYCLE_MONTHS)
        .map_while(|offset| first_of_month_after(start, offset))
        .filter(|first| months.is_empty() || months.contains(&first.month()))
        .find_map(|first| earliest_in_month(first, days, start))
}

fn earliest_in_month(first: NaiveDate, days: &BTreeSet<i32>, after: NaiveDate) -> Option<NaiveDate> {
    let len = days_in_month(first.year(), first.month())?;
    days.iter()
        .filter_map(|&day| resolve_month_day(day, len))
        .filter_map(|day| first.with_day(day))
        .filter(|candidate| *candidate > after)
        .min()
}
