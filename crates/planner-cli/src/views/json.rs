use anyhow::Result;
use planner_core::error::EngineError;
use planner_core::rule::{RepeatRule, RuleKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NextDateResponse<'a> {
    pub date: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpcomingResponse<'a> {
    pub rule: String,
    pub dates: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct CheckResponse<'a> {
    pub kind: RuleKind,
    pub canonical: String,
    pub rule: &'a RepeatRule,
}

/// `{"error": ..., "code": ...}`, the payload request handlers answer a bad
/// request with.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&EngineError> for ErrorResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
