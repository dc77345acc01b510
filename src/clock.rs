//! Current-time facade over the formatting helpers.
//!
//! [`Clock`] pins the time zone and localized tables once, then reads the
//! system clock for every call. The pure functions in [`crate::utils`] do the
//! actual work.

use anyhow::Result;
use chrono::{FixedOffset, Local, Utc};

use crate::config::ClockConfig;
use crate::constants::{DEFAULT_AM_LABEL, DEFAULT_PM_LABEL, DEFAULT_WEEKDAY_NAMES};
use crate::utils::datetime;

/// Time zone used to read the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// System time zone
    Local,
    /// Fixed offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    /// Build a zone from an optional offset in minutes; `None` means local.
    ///
    /// Returns `None` when the offset is a full day or more.
    pub fn from_offset_minutes(minutes: Option<i32>) -> Option<Self> {
        match minutes {
            None => Some(Zone::Local),
            Some(m) => FixedOffset::east_opt(m.checked_mul(60)?).map(Zone::Fixed),
        }
    }
}

/// Run `$body` with `$now` bound to the current instant in `$clock`'s zone.
macro_rules! with_now {
    ($clock:expr, |$now:ident| $body:expr) => {
        match $clock.zone {
            Zone::Local => {
                let $now = Local::now();
                $body
            }
            Zone::Fixed(offset) => {
                let $now = Utc::now().with_timezone(&offset);
                $body
            }
        }
    };
}

/// Clock bound to a zone and a set of localized labels
#[derive(Debug, Clone)]
pub struct Clock {
    zone: Zone,
    weekday_names: Vec<String>,
    am_label: String,
    pm_label: String,
}

impl Clock {
    /// Clock in `zone` with the default Chinese weekday and AM/PM labels
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            weekday_names: DEFAULT_WEEKDAY_NAMES.iter().map(|s| s.to_string()).collect(),
            am_label: DEFAULT_AM_LABEL.to_string(),
            pm_label: DEFAULT_PM_LABEL.to_string(),
        }
    }

    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        let zone = Zone::from_offset_minutes(config.utc_offset_minutes).ok_or_else(|| {
            anyhow::anyhow!("Invalid utc_offset_minutes: {:?}", config.utc_offset_minutes)
        })?;

        Ok(Self {
            zone,
            weekday_names: config.weekday_names.clone(),
            am_label: config.am_label.clone(),
            pm_label: config.pm_label.clone(),
        })
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Epoch seconds (as text) to `YYYY-MM-DD`, `None` if not an integer
    pub fn short_date_str(&self, epoch_seconds: &str) -> Option<String> {
        with_now!(self, |now| datetime::short_date_str(epoch_seconds, &now.timezone()))
    }

    /// Epoch milliseconds of `HH:MM:SS` today, `0` if unparsable
    pub fn parse_time(&self, clock: &str) -> i64 {
        with_now!(self, |now| datetime::parse_time(clock, &now))
    }

    pub fn is_today(&self, day: &str) -> bool {
        with_now!(self, |now| datetime::is_today(day, &now))
    }

    pub fn is_yesterday(&self, day: &str) -> bool {
        with_now!(self, |now| datetime::is_yesterday(day, &now))
    }

    /// Today as `YYYYMMDD`
    pub fn current_day(&self) -> String {
        with_now!(self, |now| datetime::current_day(&now))
    }

    /// 24 hours ago as `YYYYMMDD`
    pub fn last_day(&self) -> String {
        with_now!(self, |now| datetime::last_day(&now))
    }

    /// Epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in this clock's zone
    pub fn time_by_timestamp(&self, millis: i64) -> String {
        with_now!(self, |now| datetime::time_by_timestamp(millis, &now.timezone()))
    }

    /// Current `HH:MM`, refreshed by timers on the conversation screen
    pub fn update_current_time(&self) -> String {
        self.current_hour_minute()
    }

    /// Current `HH:MM`, 24-hour
    pub fn current_hour_minute(&self) -> String {
        with_now!(self, |now| datetime::hour_minute(&now))
    }

    pub fn is_am(&self) -> bool {
        with_now!(self, |now| datetime::is_am(&now))
    }

    /// Morning or afternoon label for the current time
    pub fn am_or_pm(&self) -> &str {
        with_now!(self, |now| datetime::meridiem_label(&now, &self.am_label, &self.pm_label))
    }

    /// Weekday name for a 1-based index (1 = Sunday)
    pub fn week_day_str(&self, index: i32) -> Option<&str> {
        datetime::week_day_str(index, &self.weekday_names)
    }

    /// Weekday name of the current day
    pub fn today_week_day_str(&self) -> Option<&str> {
        let index = with_now!(self, |now| datetime::week_day_index(now.date_naive()));
        self.week_day_str(index)
    }

    /// Whether the device clock is past the server time sync cutoff
    pub fn is_time_synced_to_server(&self) -> bool {
        datetime::is_time_synced_at(Utc::now().timestamp_millis())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Zone::Local)
    }
}
