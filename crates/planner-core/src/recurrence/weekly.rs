use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::date::add_days;

/// First date after `max(anchor, now)` whose ISO weekday (1 = Monday ..
/// 7 = Sunday) is in `weekdays`.
pub fn next_weekly(anchor: NaiveDate, now: NaiveDate, weekdays: &BTreeSet<u32>) -> Option<NaiveDate> {
    let start = anchor.max(now);
    (1..=7)
        .filter_map(|offset| add_days(start, offset))
        .find(|date| weekdays.contains(&date.weekday().number_from_monday()))
}
