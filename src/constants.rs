//! Constants used throughout the crate
//!
//! Every fixed pattern and label lives here so the textual output stays
//! identical wherever it is produced.

// Format patterns
/// Calendar date, e.g. `2021-05-01`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Compact calendar date, e.g. `20191112`
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";
/// Full timestamp, e.g. `2021-05-01 08:30:00`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// ISO 8601 input without seconds, e.g. `2021-05-01T08:30`
pub const ISO8601_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Date with hour and minute, e.g. `2021-05-01 08:30`
pub const DATE_MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// 24-hour clock, e.g. `16:34`
pub const HOUR_MINUTE_FORMAT: &str = "%H:%M";

// Duration placeholders
pub const ZERO_MINUTES_SECONDS: &str = "00:00";
pub const ZERO_HOURS_MINUTES_SECONDS: &str = "00:00:00";
/// Shown when an hour/minute pair is unknown. Uses U+FF0D FULLWIDTH HYPHEN-MINUS.
pub const UNKNOWN_CLOCK: &str = "－:－";

// Localized labels
pub const DEFAULT_WEEKDAY_NAMES: [&str; 7] = ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"];
pub const DEFAULT_AM_LABEL: &str = "上午";
pub const DEFAULT_PM_LABEL: &str = "下午";

// Server time sync gate: 2019-07-01 00:00:00 at GMT+8
pub const SYNC_CUTOFF_DATE_TIME: &str = "2019-07-01 00:00:00";
pub const SYNC_CUTOFF_UTC_OFFSET_SECS: i32 = 8 * 3600;

pub const MILLIS_PER_SECOND: u64 = 1000;
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// Configuration
pub const CONFIG_FILE_NAME: &str = "chatclock.toml";
pub const CONFIG_DIR_NAME: &str = "chatclock";
pub const LOG_FILE_NAME: &str = "chatclock.log";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
/// Largest accepted fixed UTC offset, in minutes
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;
