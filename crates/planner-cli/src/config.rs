use std::path::Path;

use chrono::{Local, NaiveDate};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use planner_core::date::parse_date;
use planner_core::error::EngineError;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Pins the reference date (YYYYMMDD) instead of using today
    #[serde(default, deserialize_with = "deserialize_date_setting")]
    pub now: Option<String>,
    /// How many dates `preview` prints by default
    #[serde(default = "default_preview_count")]
    pub preview_count: u64,
    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_preview_count() -> u64 {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            now: None,
            preview_count: default_preview_count(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("PLANNER_"))
            .extract()
    }

    /// Resolves "now": the command-line value wins over the configured one,
    /// and today's local date is used when neither is set.
    pub fn reference_date(&self, cli_now: Option<&str>) -> Result<NaiveDate, EngineError> {
        match cli_now.or(self.now.as_deref()) {
            Some(text) => parse_date(text),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Environment values such as `PLANNER_NOW=20240101` reach us as integers.
fn deserialize_date_setting<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateSetting {
        Text(String),
        Digits(u64),
    }

    Ok(match Option::<DateSetting>::deserialize(deserializer)? {
        Some(DateSetting::Text(text)) => Some(text),
        Some(DateSetting::Digits(digits)) => Some(format!("{digits:08}")),
        None => None,
    })
}
