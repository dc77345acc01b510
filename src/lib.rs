//! chatclock - clock and calendar formatting for chat message lists
//!
//! Turns epoch values and date strings into the short labels a conversation
//! screen shows: `mm:ss` call timers, `HH:mm` clocks, "today"/"yesterday"
//! checks, weekday names and a server time sync gate.
//!
//! # Modules
//!
//! * [`clock`] - Current-time facade bound to a zone and localized labels
//! * [`config`] - Configuration loading and validation
//! * [`utils`] - Pure formatting and parsing functions

/// Current-time facade over the formatting helpers
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Fixed format patterns, labels and limits
pub mod constants;

/// Logging setup
pub mod logger;

/// Duration and date/time formatting helpers
pub mod utils;

pub use clock::{Clock, Zone};
pub use utils::duration::TimeUnit;
pub use utils::ClockError;
