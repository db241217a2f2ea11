//! Next-date calculators, one per rule kind.
//!
//! Every calculator is a pure function of `(anchor, now, rule parameters)` and
//! returns a date strictly later than both `anchor` and `now`. `None` is only
//! returned when no such date exists inside chrono's representable range.

mod daily;
mod monthly;
mod weekly;
mod yearly;

pub use daily::next_daily;
pub use monthly::next_monthly;
pub use weekly::next_weekly;
pub use yearly::next_yearly;

use chrono::NaiveDate;

use crate::rule::RepeatRule;

/// Dispatches an already parsed rule to its calculator.
pub fn next_occurrence(rule: &RepeatRule, anchor: NaiveDate, now: NaiveDate) -> Option<NaiveDate> {
    let next = match rule {
        RepeatRule::Daily { interval_days } => next_daily(anchor, now, *interval_days),
        RepeatRule::Yearly => next_yearly(anchor, now),
        RepeatRule::Weekly { weekdays } => next_weekly(anchor, now, weekdays),
        RepeatRule::Monthly { days, months } => next_monthly(anchor, now, days, months),
    };
    tracing::trace!(kind = %rule.kind(), %anchor, %now, ?next, "calculated next occurrence");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::parse_rule;
    use proptest::prelude::*;

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (1900i32..=2200, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn rule_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..=400).prop_map(|n| format!("d {n}")),
            Just("y".to_string()),
            proptest::collection::btree_set(1u32..=7, 1..=7).prop_map(|days| {
                let list: Vec<String> = days.iter().map(ToString::to_string).collect();
                format!("w {}", list.join(","))
            }),
            (
                proptest::collection::btree_set(prop_oneof![1i32..=31, -31i32..=-1], 1..4),
                proptest::collection::btree_set(1u32..=12, 0..3),
            )
                .prop_map(|(days, months)| {
                    let days: Vec<String> = days.iter().map(ToString::to_string).collect();
                    let months: Vec<String> = months.iter().map(ToString::to_string).collect();
                    format!("m {} {}", days.join(","), months.join(","))
                }),
        ]
    }

    proptest! {
        #[test]
        fn next_occurrence_is_strictly_after_anchor_and_now(
            anchor in date_strategy(),
            now in date_strategy(),
            text in rule_strategy(),
        ) {
            // Some generated monthly combinations can never fire and are rejected.
            if let Ok(rule) = parse_rule(&text) {
                let next = next_occurrence(&rule, anchor, now).unwrap();
                prop_assert!(next > anchor);
                prop_assert!(next > now);
            }
        }

        #[test]
        fn next_occurrence_is_deterministic(
            anchor in date_strategy(),
            now in date_strategy(),
            text in rule_strategy(),
        ) {
            if let Ok(rule) = parse_rule(&text) {
                prop_assert_eq!(
                    next_occurrence(&rule, anchor, now),
                    next_occurrence(&rule, anchor, now)
                );
            }
        }

        #[test]
        fn anchor_equal_to_now_never_returns_itself(
            day in date_strategy(),
            text in rule_strategy(),
        ) {
            if let Ok(rule) = parse_rule(&text) {
                prop_assert_ne!(next_occurrence(&rule, day, day), Some(day));
            }
        }
    }
}
