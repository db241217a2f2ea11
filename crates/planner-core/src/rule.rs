//! Repeat-rule grammar.
//!
//! A rule is a whitespace separated list of tokens whose first token picks the
//! kind:
//!
//! | Rule            | Meaning                                              |
//! |-----------------|------------------------------------------------------|
//! | `d 7`           | every 7 days (1..=400)                               |
//! | `y`             | every year on the anchor's month and day             |
//! | `w 1,4`         | every Monday and Thursday (1 = Monday .. 7 = Sunday) |
//! | `m 1,-1`        | first and last day of every month                    |
//! | `m 15 3,9`      | the 15th of March and September                      |

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::date::{days_in_month, resolve_month_day};
use crate::error::RuleError;

pub const MAX_DAILY_INTERVAL: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Daily,
    Yearly,
    Weekly,
    Monthly,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Daily => "daily",
            RuleKind::Yearly => "yearly",
            RuleKind::Weekly => "weekly",
            RuleKind::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// A parsed and validated repeat rule.
///
/// Sets are kept ordered so that [`fmt::Display`] produces a canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RepeatRule {
    Daily { interval_days: u32 },
    Yearly,
    /// ISO weekday numbers, 1 = Monday .. 7 = Sunday.
    Weekly { weekdays: BTreeSet<u32> },
    /// `days` may be negative (counted from month end); an empty `months`
    /// set means every month.
    Monthly {
        days: BTreeSet<i32>,
        months: BTreeSet<u32>,
    },
}

impl RepeatRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            RepeatRule::Daily { .. } => RuleKind::Daily,
            RepeatRule::Yearly => RuleKind::Yearly,
            RepeatRule::Weekly { .. } => RuleKind::Weekly,
            RepeatRule::Monthly { .. } => RuleKind::Monthly,
        }
    }
}

impl FromStr for RepeatRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatRule::Daily { interval_days } => write!(f, "d {interval_days}"),
            RepeatRule::Yearly => f.write_str("y"),
            RepeatRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays)),
            RepeatRule::Monthly { days, months } => {
                write!(f, "m {}", join(days))?;
                if !months.is_empty() {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

fn join<T: fmt::Display>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses rule text into a [`RepeatRule`].
pub fn parse_rule(text: &str) -> Result<RepeatRule, RuleError> {
    let mut tokens = text.split_whitespace();
    let kind = tokens.next().ok_or(RuleError::EmptyRule)?;
    let args: Vec<&str> = tokens.collect();
    let rule = text.trim();

    match kind {
        "d" => parse_daily(rule, &args),
        "y" => parse_yearly(rule, &args),
        "w" => parse_weekly(rule, &args),
        "m" => parse_monthly(rule, &args),
        other => Err(RuleError::UnsupportedRuleKind(other.to_string())),
    }
}

fn parse_daily(rule: &str, args: &[&str]) -> Result<RepeatRule, RuleError> {
    let invalid = || RuleError::DailyIntervalInvalid(rule.to_string());
    let [interval] = args else {
        return Err(invalid());
    };
    let interval_days: i64 = interval.parse().map_err(|_| invalid())?;
    if !(1..=i64::from(MAX_DAILY_INTERVAL)).contains(&interval_days) {
        return Err(invalid());
    }
    Ok(RepeatRule::Daily {
        interval_days: u32::try_from(interval_days).map_err(|_| invalid())?,
    })
}

fn parse_yearly(rule: &str, args: &[&str]) -> Result<RepeatRule, RuleError> {
    if args.is_empty() {
        Ok(RepeatRule::Yearly)
    } else {
        Err(RuleError::YearlyFormatInvalid(rule.to_string()))
    }
}

fn parse_weekly(rule: &str, args: &[&str]) -> Result<RepeatRule, RuleError> {
    let [list] = args else {
        return Err(RuleError::WeekdayInvalid(rule.to_string()));
    };
    let weekdays = parse_list(list, |day: &u32| (1..=7).contains(day), RuleError::WeekdayInvalid)?;
    Ok(RepeatRule::Weekly { weekdays })
}

fn parse_monthly(rule: &str, args: &[&str]) -> Result<RepeatRule, RuleError> {
    let (day_list, month_list) = match args {
        [days] => (*days, None),
        [days, months] => (*days, Some(*months)),
        _ => return Err(RuleError::MonthDayInvalid(rule.to_string())),
    };

    let days = parse_list(
        day_list,
        |day: &i32| *day != 0 && (-31..=31).contains(day),
        RuleError::MonthDayInvalid,
    )?;
    let months = match month_list {
        Some(list) => parse_list(list, |m: &u32| (1..=12).contains(m), RuleError::MonthInvalid)?,
        None => BTreeSet::new(),
    };

    if !can_ever_fire(&days, &months) {
        return Err(RuleError::MonthDayInvalid(rule.to_string()));
    }
    Ok(RepeatRule::Monthly { days, months })
}

/// Parses a comma separated list, rejecting the first entry that does not
/// parse or fails `valid`.
fn parse_list<T, F, E>(list: &str, valid: F, error: E) -> Result<BTreeSet<T>, RuleError>
where
    T: FromStr + Ord,
    F: Fn(&T) -> bool,
    E: Fn(String) -> RuleError,
{
    list.split(',')
        .map(|entry| {
            entry
                .parse::<T>()
                .ok()
                .filter(|value| valid(value))
                .ok_or_else(|| error(entry.to_string()))
        })
        .collect()
}

/// Whether some day in `days` exists in at least one eligible month.
/// Leap-year February is used so that day 29 stays reachable.
fn can_ever_fire(days: &BTreeSet<i32>, months: &BTreeSet<u32>) -> bool {
    let eligible: Vec<u32> = if months.is_empty() {
        (1..=12).collect()
    } else {
        months.iter().copied().collect()
    };
    eligible.into_iter().any(|month| {
        days_in_month(2000, month)
            .is_some_and(|len| days.iter().any(|&day| resolve_month_day(day, len).is_some()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set<T: Ord + Copy>(values: &[T]) -> BTreeSet<T> {
        values.iter().copied().collect()
    }

    #[rstest]
    #[case("d 1", RepeatRule::Daily { interval_days: 1 })]
    #[case("d 400", RepeatRule::Daily { interval_days: 400 })]
    #[case("  d   7  ", RepeatRule::Daily { interval_days: 7 })]
    #[case("y", RepeatRule::Yearly)]
    #[case("w 7", RepeatRule::Weekly { weekdays: set(&[7]) })]
    #[case("w 3,1,3", RepeatRule::Weekly { weekdays: set(&[1, 3]) })]
    #[case("m -1", RepeatRule::Monthly { days: set(&[-1]), months: BTreeSet::new() })]
    #[case("m 1,-31,31", RepeatRule::Monthly { days: set(&[-31, 1, 31]), months: BTreeSet::new() })]
    #[case("m 29 2", RepeatRule::Monthly { days: set(&[29]), months: set(&[2]) })]
    #[case("m 10,-2 12,1", RepeatRule::Monthly { days: set(&[-2, 10]), months: set(&[1, 12]) })]
    fn parses_valid_rules(#[case] text: &str, #[case] expected: RepeatRule) {
        assert_eq!(parse_rule(text).unwrap(), expected);
    }

    #[rstest]
    #[case("", RuleError::EmptyRule)]
    #[case("   \t ", RuleError::EmptyRule)]
    #[case("x 1", RuleError::UnsupportedRuleKind("x".to_string()))]
    #[case("D 1", RuleError::UnsupportedRuleKind("D".to_string()))]
    #[case("d", RuleError::DailyIntervalInvalid("d".to_string()))]
    #[case("d 0", RuleError::DailyIntervalInvalid("d 0".to_string()))]
    #[case("d -3", RuleError::DailyIntervalInvalid("d -3".to_string()))]
    #[case("d 401", RuleError::DailyIntervalInvalid("d 401".to_string()))]
    #[case("d 1 2", RuleError::DailyIntervalInvalid("d 1 2".to_string()))]
    #[case("d seven", RuleError::DailyIntervalInvalid("d seven".to_string()))]
    #[case("y 1", RuleError::YearlyFormatInvalid("y 1".to_string()))]
    #[case("w", RuleError::WeekdayInvalid("w".to_string()))]
    #[case("w 1 2", RuleError::WeekdayInvalid("w 1 2".to_string()))]
    #[case("w 0", RuleError::WeekdayInvalid("0".to_string()))]
    #[case("w 1,8", RuleError::WeekdayInvalid("8".to_string()))]
    #[case("w 1,,2", RuleError::WeekdayInvalid("".to_string()))]
    #[case("m", RuleError::MonthDayInvalid("m".to_string()))]
    #[case("m 32", RuleError::MonthDayInvalid("32".to_string()))]
    #[case("m 0", RuleError::MonthDayInvalid("0".to_string()))]
    #[case("m -32", RuleError::MonthDayInvalid("-32".to_string()))]
    #[case("m 1 2 3", RuleError::MonthDayInvalid("m 1 2 3".to_string()))]
    #[case("m 1 13", RuleError::MonthInvalid("13".to_string()))]
    #[case("m 1 0", RuleError::MonthInvalid("0".to_string()))]
    #[case("m 1 jan", RuleError::MonthInvalid("jan".to_string()))]
    #[case("m 30,31 2", RuleError::MonthDayInvalid("m 30,31 2".to_string()))]
    #[case("m -31 4,6", RuleError::MonthDayInvalid("m -31 4,6".to_string()))]
    fn rejects_malformed_rules(#[case] text: &str, #[case] expected: RuleError) {
        assert_eq!(parse_rule(text), Err(expected));
    }

    #[test]
    fn day_list_is_checked_before_month_list() {
        assert_eq!(
            parse_rule("m 40 13"),
            Err(RuleError::MonthDayInvalid("40".to_string()))
        );
    }

    #[rstest]
    #[case("d  12", "d 12")]
    #[case("w 5,1,5", "w 1,5")]
    #[case("m 15,-1", "m -1,15")]
    #[case("m 1 12,6", "m 1 6,12")]
    #[case("y", "y")]
    fn displays_canonical_form(#[case] text: &str, #[case] canonical: &str) {
        assert_eq!(parse_rule(text).unwrap().to_string(), canonical);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!("d 2".parse::<RepeatRule>().unwrap().kind(), RuleKind::Daily);
        assert_eq!("y".parse::<RepeatRule>().unwrap().kind(), RuleKind::Yearly);
        assert_eq!("w 1".parse::<RepeatRule>().unwrap().kind(), RuleKind::Weekly);
        assert_eq!("m 1".parse::<RepeatRule>().unwrap().kind(), RuleKind::Monthly);
        assert_eq!(RuleKind::Monthly.to_string(), "monthly");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let rule: RepeatRule = "w 1,3".parse().unwrap();
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "weekly", "weekdays": [1, 3] }));

        let yearly = serde_json::to_value(RepeatRule::Yearly).unwrap();
        assert_eq!(yearly, serde_json::json!({ "kind": "yearly" }));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn canonical_text_reparses_to_the_same_rule(
                days in proptest::collection::btree_set(1i32..=28, 1..5),
                negative in proptest::collection::btree_set(-28i32..=-1, 0..3),
                months in proptest::collection::btree_set(1u32..=12, 0..4),
            ) {
                let days: BTreeSet<i32> = days.union(&negative).copied().collect();
                let rule = RepeatRule::Monthly { days, months };
                prop_assert_eq!(parse_rule(&rule.to_string()).unwrap(), rule);
            }

            #[test]
            fn parser_never_panics(text in "\\PC{0,24}") {
                let _ = parse_rule(&text);
            }
        }
    }
}
