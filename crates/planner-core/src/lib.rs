//! # Planner Core Library
//!
//! The recurrence engine behind the planner to-do scheduler: given a task's
//! anchor date, a textual repeat rule and a reference "now", it computes the
//! next calendar date on which the task fires.
//!
//! ## Features
//!
//! - **Four rule kinds**: every N days (`d 3`), yearly (`y`), weekly by
//!   weekday set (`w 1,5`) and monthly by day set with an optional month
//!   restriction (`m 1,-1` / `m 15 3,9`)
//! - **Strictly forward**: the result is always later than both the anchor
//!   and "now", so a recurring task never re-fires on its own due date
//! - **Typed errors**: every malformed rule maps to a distinct [`error::RuleError`]
//! - **Pure**: no I/O, no shared state, safe to call from any number of threads
//!
//! ## Core Modules
//!
//! - [`engine`]: `YYYYMMDD` in, `YYYYMMDD` out facade
//! - [`rule`]: Repeat-rule parser and validator
//! - [`recurrence`]: One calculator per rule kind
//! - [`date`]: Exchange format and Gregorian month arithmetic
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use planner_core::{engine, error::{EngineError, RuleError}};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! // Next Wednesday: the anchor Monday itself is not strictly after "now".
//! assert_eq!(engine::next_date(now, "20240101", "w 1,3").unwrap(), "20240103");
//!
//! assert_eq!(
//!     engine::next_date(now, "20240101", "d 401"),
//!     Err(EngineError::Rule(RuleError::DailyIntervalInvalid("d 401".to_string())))
//! );
//! ```

pub mod date;
pub mod engine;
pub mod error;
pub mod recurrence;
pub mod rule;
