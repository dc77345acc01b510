//! Date and time utility functions
//!
//! This module provides the calendar helpers used by message lists: turning
//! epoch values into date strings, checking whether a date is today or
//! yesterday, weekday names and the server time sync gate.
//!
//! Every function takes the reference instant (`now`) or the zone explicitly.
//! [`crate::clock::Clock`] supplies the real current time.

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use once_cell::sync::Lazy;

use super::ClockError;
use crate::constants::{
    COMPACT_DATE_FORMAT, DATE_FORMAT, DATE_MINUTE_FORMAT, DATE_TIME_FORMAT, HOUR_MINUTE_FORMAT,
    ISO8601_MINUTE_FORMAT, MILLIS_PER_DAY, SYNC_CUTOFF_DATE_TIME, SYNC_CUTOFF_UTC_OFFSET_SECS,
};

thread_local! {
    /// Compiled `yyyy-MM-dd` items, built once per thread and never shared.
    static DATE_ITEMS: Vec<Item<'static>> = StrftimeItems::new(DATE_FORMAT).collect();
}

static SYNC_CUTOFF_MILLIS: Lazy<Option<i64>> = Lazy::new(|| match compute_sync_cutoff() {
    Ok(cutoff) => {
        log::debug!("sync cutoff: {}", cutoff);
        Some(cutoff)
    }
    Err(e) => {
        log::warn!("sync cutoff unavailable: {}", e);
        None
    }
});

/// Parse the leading `YYYY-MM-DD` of a date string
///
/// Anything after the date is ignored, so both `"2016-06-28"` and
/// `"2016-06-28 10:10:30"` yield June 28th.
///
/// # Arguments
/// * `day` - Date string starting with YYYY-MM-DD
///
/// # Returns
/// * `Result<NaiveDate, ClockError>` - Parsed date or parse error
pub fn parse_date(day: &str) -> Result<NaiveDate, ClockError> {
    DATE_ITEMS.with(|items| {
        let mut parsed = Parsed::new();
        format::parse_and_remainder(&mut parsed, day, items.iter())?;
        Ok(parsed.to_naive_date()?)
    })
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Convert a string of whole epoch seconds to a YYYY-MM-DD date in `tz`
///
/// The value is read as milliseconds after appending `"000"`, so an empty
/// string is the epoch itself and a leading sign is accepted.
///
/// # Returns
/// * `Option<String>` - The date, or `None` when `epoch_seconds` is not an integer
pub fn short_date_str<Tz: TimeZone>(epoch_seconds: &str, tz: &Tz) -> Option<String> {
    match epoch_seconds_to_datetime(epoch_seconds, tz) {
        Ok(dt) => Some(dt.naive_local().format(DATE_FORMAT).to_string()),
        Err(e) => {
            log::warn!("short_date_str: {}", e);
            None
        }
    }
}

fn epoch_seconds_to_datetime<Tz: TimeZone>(epoch_seconds: &str, tz: &Tz) -> Result<DateTime<Tz>, ClockError> {
    let millis: i64 = format!("{}000", epoch_seconds).parse()?;
    let utc = DateTime::from_timestamp_millis(millis).ok_or(ClockError::OutOfRange(millis))?;
    Ok(utc.with_timezone(tz))
}

/// Resolve an `HH:MM:SS` clock reading on the calendar day of `now`
///
/// # Arguments
/// * `clock` - Time of day, e.g. `"08:00:00"`
/// * `now` - Reference instant; its zone and date are used
///
/// # Returns
/// * `i64` - Epoch milliseconds, or `0` for blank or unparsable input
pub fn parse_time<Tz: TimeZone>(clock: &str, now: &DateTime<Tz>) -> i64 {
    if clock.trim().is_empty() {
        return 0;
    }

    match try_parse_time(clock, now) {
        Ok(millis) => millis,
        Err(e) => {
            log::warn!("parse_time '{}': {}", clock, e);
            0
        }
    }
}

fn try_parse_time<Tz: TimeZone>(clock: &str, now: &DateTime<Tz>) -> Result<i64, ClockError> {
    let text = format!("{} {}", format_ymd(now.date_naive()), clock);
    let (naive, _) = NaiveDateTime::parse_and_remainder(&text, DATE_TIME_FORMAT)?;
    let resolved = now
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(ClockError::NoSuchLocalTime(text))?;
    Ok(resolved.timestamp_millis())
}

/// Check whether `day` falls on the same calendar day as `now`
///
/// Unparsable input is never today.
pub fn is_today<Tz: TimeZone>(day: &str, now: &DateTime<Tz>) -> bool {
    match parse_date(day) {
        Ok(date) => date.year() == now.year() && date.ordinal() == now.ordinal(),
        Err(e) => {
            log::debug!("is_today '{}': {}", day, e);
            false
        }
    }
}

/// Check whether `day` is the calendar day before `now`
///
/// Works across year boundaries: Dec 31st is yesterday on Jan 1st.
pub fn is_yesterday<Tz: TimeZone>(day: &str, now: &DateTime<Tz>) -> bool {
    match parse_date(day) {
        Ok(date) => now.date_naive().pred_opt() == Some(date),
        Err(e) => {
            log::debug!("is_yesterday '{}': {}", day, e);
            false
        }
    }
}

/// Reformat `YYYY-MM-DDTHH:MM` as `YYYY-MM-DD HH:MM`
///
/// Returns an empty string when the input does not start with that pattern.
pub fn format_iso8601_time(s: &str) -> String {
    match NaiveDateTime::parse_and_remainder(s, ISO8601_MINUTE_FORMAT) {
        Ok((dt, _)) => dt.format(DATE_MINUTE_FORMAT).to_string(),
        Err(e) => {
            log::debug!("format_iso8601_time '{}': {}", s, e);
            String::new()
        }
    }
}

/// Drop the trailing `:SS` of an `HH:MM:SS` string
///
/// Empty input, or input shorter than three characters, gives an empty string.
pub fn hour_and_minute(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    match strip_seconds(time) {
        Ok(hm) => hm.to_string(),
        Err(e) => {
            log::warn!("hour_and_minute: {}", e);
            String::new()
        }
    }
}

fn strip_seconds(time: &str) -> Result<&str, ClockError> {
    let cut = time
        .char_indices()
        .rev()
        .nth(2)
        .map(|(i, _)| i)
        .ok_or_else(|| ClockError::TooShort(time.to_string()))?;
    Ok(&time[..cut])
}

/// Calendar day of `now` as `YYYYMMDD`
pub fn current_day<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.date_naive().format(COMPACT_DATE_FORMAT).to_string()
}

/// Calendar day 24 hours before `now` as `YYYYMMDD`
pub fn last_day<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let earlier = now.clone() - Duration::milliseconds(MILLIS_PER_DAY);
    current_day(&earlier)
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in `tz`
///
/// Instants outside the representable range give an empty string.
pub fn time_by_timestamp<Tz: TimeZone>(millis: i64, tz: &Tz) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(tz).naive_local().format(DATE_TIME_FORMAT).to_string(),
        None => {
            log::warn!("time_by_timestamp: {}", ClockError::OutOfRange(millis));
            String::new()
        }
    }
}

/// 24-hour `HH:MM` reading of `now`
pub fn hour_minute<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.naive_local().format(HOUR_MINUTE_FORMAT).to_string()
}

pub fn is_am<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    now.hour() < 12
}

/// Pick the morning or afternoon label for `now`
pub fn meridiem_label<'a, Tz: TimeZone>(now: &DateTime<Tz>, am: &'a str, pm: &'a str) -> &'a str {
    if is_am(now) {
        am
    } else {
        pm
    }
}

/// Look up a weekday name by 1-based index (1 = Sunday, 7 = Saturday)
///
/// # Returns
/// * `Option<&str>` - The name, or `None` when `index` is outside the table
pub fn week_day_str<S: AsRef<str>>(index: i32, names: &[S]) -> Option<&str> {
    let slot = usize::try_from(index).ok()?.checked_sub(1)?;
    names.get(slot).map(AsRef::as_ref)
}

/// 1-based weekday index of `date`, Sunday first
pub fn week_day_index(date: NaiveDate) -> i32 {
    date.weekday().number_from_sunday() as i32
}

/// Epoch milliseconds of 2019-07-01 00:00:00 GMT+8, computed once per process
pub fn sync_cutoff_millis() -> Option<i64> {
    *SYNC_CUTOFF_MILLIS
}

/// Whether `now_millis` is strictly after the server time sync cutoff
pub fn is_time_synced_at(now_millis: i64) -> bool {
    match sync_cutoff_millis() {
        Some(cutoff) => cutoff < now_millis,
        None => false,
    }
}

fn compute_sync_cutoff() -> Result<i64, ClockError> {
    let offset = FixedOffset::east_opt(SYNC_CUTOFF_UTC_OFFSET_SECS)
        .ok_or(ClockError::OutOfRange(i64::from(SYNC_CUTOFF_UTC_OFFSET_SECS)))?;
    let naive = NaiveDateTime::parse_from_str(SYNC_CUTOFF_DATE_TIME, DATE_TIME_FORMAT)?;
    let cutoff = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ClockError::NoSuchLocalTime(SYNC_CUTOFF_DATE_TIME.to_string()))?;
    Ok(cutoff.timestamp_millis())
}
