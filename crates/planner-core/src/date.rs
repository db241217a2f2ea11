//! Calendar date helpers shared by every calculator.
//!
//! Dates are plain [`NaiveDate`] values. The only exchange format with callers
//! is the eight-digit `YYYYMMDD` string described by [`DATE_FORMAT`].

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::EngineError;

/// `strftime` pattern for the `YYYYMMDD` exchange format.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parses a strict eight-digit `YYYYMMDD` date.
///
/// chrono alone accepts variable-width fields for this pattern, so the length
/// and digit check happens first.
pub fn parse_date(text: &str) -> Result<NaiveDate, EngineError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::DateFormatInvalid(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| EngineError::DateFormatInvalid(text.to_string()))
}

/// Formats a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of days in `month` (1-based) of `year`: the day number of the
/// day before the first of the following month.
///
/// `None` for an invalid month or when the following month is past chrono's
/// last representable date.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

/// Resolves a monthly day index against a month of `month_len` days.
///
/// Positive indices are taken as-is, negative ones count back from the end
/// (`-1` is the last day). Returns `None` when the index falls outside the month.
pub fn resolve_month_day(day: i32, month_len: u32) -> Option<u32> {
    let len = i32::try_from(month_len).ok()?;
    let resolved = if day < 0 { len + day + 1 } else { day };
    if (1..=len).contains(&resolved) {
        u32::try_from(resolved).ok()
    } else {
        None
    }
}

/// Adds `years` using date-offset arithmetic: a Feb 29 that lands in a
/// non-leap year rolls over to Mar 1.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

#[inline]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// First day of the month `months` after the month containing `date`.
pub fn first_of_month_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(months))
}
