use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

pub const LAST_MINUTE_OF_DAY: u16 = 23 * 60 + 59;

/// Minute-of-day window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHour {
    pub start: u16,
    pub end: u16,
}

impl WorkHour {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        minute_of_day >= u32::from(self.start) && minute_of_day <= u32::from(self.end)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.start > LAST_MINUTE_OF_DAY || self.end > LAST_MINUTE_OF_DAY {
            return Err(DomainError::InvalidSchedule(format!(
                "Work hours must be between 0:00 and 23:59 (got {})",
                self
            )));
        }
        if self.start > self.end {
            return Err(DomainError::InvalidSchedule(format!(
                "Work hours cannot cross midnight (got {})",
                self
            )));
        }
        Ok(())
    }
}

impl Default for WorkHour {
    fn default() -> Self {
        Self {
            start: 9 * 60,
            end: 17 * 60,
        }
    }
}

impl fmt::Display for WorkHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}

/// Blocking schedule and master switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub block_on_weekends: bool,

    #[serde(default)]
    pub work_hour: WorkHour,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            work_hour: WorkHour::default(),
            block_on_weekends: false,
        }
    }
}

impl Settings {
    /// Whether blocking is enforced at `now`.
    ///
    /// `now` must already be local wall-clock time; seconds are ignored.
    /// A window with `start > end` is never active.
    pub fn is_active<T: Datelike + Timelike>(&self, now: &T) -> bool {
        if !self.enabled {
            return false;
        }

        let total_minutes = now.hour() * 60 + now.minute();
        let is_weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);

        self.work_hour.contains(total_minutes) && (!is_weekend || self.block_on_weekends)
    }
}

pub fn is_active<T: Datelike + Timelike>(settings: &Settings, now: &T) -> bool {
    settings.is_active(now)
}

/// `540` -> `"9:00"`
pub fn format_minutes(minutes: u16) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// `"9:00"` -> `540`
pub fn parse_minutes(value: &str) -> Result<u16, String> {
    let (hours, minutes) = value
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("Invalid time '{}' (expected H:MM)", value))?;

    let hours: u16 = hours
        .parse()
        .map_err(|_| format!("Invalid hour in '{}'", value))?;
    let minutes: u16 = minutes
        .parse()
        .map_err(|_| format!("Invalid minutes in '{}'", value))?;

    if hours > 23 || minutes > 59 {
        return Err(format!("Time out of range: '{}'", value));
    }

    Ok(hours * 60 + minutes)
}

fn default_true() -> bool {
    true
}
