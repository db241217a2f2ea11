use thiserror::Error;

/// A malformed repeat rule.
///
/// Each variant carries the text that was rejected so the message can point
/// at it. Use [`RuleError::code`] when a stable machine-readable name is needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Repeat rule is empty")]
    EmptyRule,

    #[error("Unsupported repeat rule kind: '{0}'")]
    UnsupportedRuleKind(String),

    #[error("Invalid daily interval: '{0}' (expected 'd <1..400>')")]
    DailyIntervalInvalid(String),

    #[error("Invalid yearly rule: '{0}' (expected 'y' with no arguments)")]
    YearlyFormatInvalid(String),

    #[error("Invalid weekday list: '{0}' (expected 'w <1..7>[,...]')")]
    WeekdayInvalid(String),

    #[error("Invalid month day list: '{0}' (expected 'm <-31..-1|1..31>[,...] [months]')")]
    MonthDayInvalid(String),

    #[error("Invalid month list: '{0}' (expected months 1..12)")]
    MonthInvalid(String),
}

impl RuleError {
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::EmptyRule => "empty_rule",
            RuleError::UnsupportedRuleKind(_) => "unsupported_rule_kind",
            RuleError::DailyIntervalInvalid(_) => "daily_interval_invalid",
            RuleError::YearlyFormatInvalid(_) => "yearly_format_invalid",
            RuleError::WeekdayInvalid(_) => "weekday_invalid",
            RuleError::MonthDayInvalid(_) => "month_day_invalid",
            RuleError::MonthInvalid(_) => "month_invalid",
        }
    }
}

/// Everything the engine facade can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid date: '{0}' (expected YYYYMMDD)")]
    DateFormatInvalid(String),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("Next occurrence after {0} is outside the supported calendar range")]
    DateOutOfRange(String),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::DateFormatInvalid(_) => "date_format_invalid",
            EngineError::Rule(rule) => rule.code(),
            EngineError::DateOutOfRange(_) => "date_out_of_range",
        }
    }

    /// Returns the underlying rule error, if this is one.
    pub fn as_rule_error(&self) -> Option<&RuleError> {
        match self {
            EngineError::Rule(rule) => Some(rule),
            _ => None,
        }
    }
}
