use chrono::NaiveDate;

use crate::date::add_days;

/// Smallest `anchor + k * interval_days` (k >= 1) strictly after both
/// `anchor` and `now`.
///
/// Returns `None` for a zero interval or when the result is not representable.
pub fn next_daily(anchor: NaiveDate, now: NaiveDate, interval_days: u32) -> Option<NaiveDate> {
    if interval_days == 0 {
        return None;
    }
    let interval = i64::from(interval_days);
    let elapsed = now.signed_duration_since(anchor).num_days();
    let steps = if elapsed < 0 { 1 } else { elapsed / interval + 1 };
    let offset = u64::try_from(steps.checked_mul(interval)?).ok()?;
    add_days(anchor, offset)
}
