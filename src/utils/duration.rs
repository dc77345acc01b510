//! Elapsed-time formatting
//!
//! Renders durations (voice message lengths, call timers, countdowns) as
//! zero-padded `mm:ss` or `hh:mm:ss` strings, and hour/minute pairs as `HH:mm`.

use crate::constants::{MILLIS_PER_SECOND, UNKNOWN_CLOCK, ZERO_HOURS_MINUTES_SECONDS, ZERO_MINUTES_SECONDS};

/// Unit of a raw duration value passed to [`format_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Divisor that turns a value in this unit into seconds.
    ///
    /// Only milliseconds are scaled; every other unit is read as-is.
    fn scale(self) -> u64 {
        match self {
            TimeUnit::Milliseconds => MILLIS_PER_SECOND,
            _ => 1,
        }
    }
}

/// Format a duration as `mm:ss`
///
/// Minutes are not wrapped into hours, so long durations produce more than
/// two minute digits (`7205` seconds is `"120:05"`).
///
/// # Arguments
/// * `value` - Elapsed time expressed in `unit`
/// * `unit` - Unit of `value`
#[must_use]
pub fn format_time(value: u64, unit: TimeUnit) -> String {
    if value == 0 {
        return ZERO_MINUTES_SECONDS.to_string();
    }

    let scale = unit.scale();
    let minutes = value / scale / 60;
    let seconds = (value - minutes * 60 * scale) / scale;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Format a duration in milliseconds as `mm:ss`
#[must_use]
pub fn format_time_millis(millis: u64) -> String {
    format_time(millis, TimeUnit::Milliseconds)
}

/// Format a number of seconds as `hh:mm:ss` or `mm:ss`
///
/// Non-positive input yields the zero form (`"00:00:00"` or `"00:00"`).
/// Without hours the minute field carries the total minutes, matching
/// [`format_time`] for the same number of seconds.
#[must_use]
pub fn format_seconds(seconds: i64, show_hour: bool) -> String {
    if seconds <= 0 {
        return if show_hour {
            ZERO_HOURS_MINUTES_SECONDS.to_string()
        } else {
            ZERO_MINUTES_SECONDS.to_string()
        };
    }

    let second = seconds % 60;
    if show_hour {
        let hour = seconds / 3600;
        let minute = (seconds % 3600) / 60;
        format!("{:02}:{:02}:{:02}", hour, minute, second)
    } else {
        format!("{:02}:{:02}", seconds / 60, second)
    }
}

/// Format an hour/minute pair as `HH:mm`
///
/// Returns `"－:－"` when either component is negative, which callers use for
/// "not set yet".
#[must_use]
pub fn format_hour_minute(hour: i32, minute: i32) -> String {
    if hour < 0 || minute < 0 {
        return UNKNOWN_CLOCK.to_string();
    }
    format!("{:02}:{:02}", hour, minute)
}
