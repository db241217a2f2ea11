use chrono::{Datelike, NaiveDate};

use crate::date::add_years;

/// Steps `anchor` forward a year at a time until it is strictly after `now`,
/// always taking at least one step.
///
/// A Feb 29 anchor becomes Mar 1 on its first step and stays on Mar 1 from
/// then on, as repeated one-year offsets do.
pub fn next_yearly(anchor: NaiveDate, now: NaiveDate) -> Option<NaiveDate> {
    let first = add_years(anchor, 1)?;
    if first > now {
        return Some(first);
    }

    // `first` can no longer be Feb 29, so whole-year offsets from it are exact.
    let years = u32::try_from(now.year() - first.year()).ok()?;
    let candidate = add_years(first, years)?;
    if candidate > now {
        Some(candidate)
    } else {
        add_years(first, years.checked_add(1)?)
    }
}
