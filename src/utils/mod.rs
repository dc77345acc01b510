//! Formatting and parsing helpers for chat timestamps.
//!
//! # Available Utilities
//!
//! - [`duration`] - Elapsed time as `mm:ss` / `hh:mm:ss`, hour/minute pairs as `HH:mm`
//! - [`datetime`] - Calendar dates, today/yesterday checks, weekday names, sync gate
//!
//! # Error handling
//!
//! Helpers never hand errors back to display code. Parsing failures are
//! reported through [`ClockError`] internally, logged, and replaced by the
//! function's empty value (`None`, `""`, `0` or `false`).

pub mod datetime;
pub mod duration;

/// Errors raised while parsing clock and calendar input.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Value out of range: {0}")]
    OutOfRange(i64),

    #[error("No such local time: {0}")]
    NoSuchLocalTime(String),

    #[error("Time string too short: '{0}'")]
    TooShort(String),
}
