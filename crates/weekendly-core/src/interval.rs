//! Clock times and time-slot overlap.
//!
//! Activities carry a start time as `HH:MM` (24h, no date) and a duration
//! in minutes. A slot's end may run past 24:00; that is accepted as-is and
//! never wraps to the next day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an `HH:MM` clock time fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ClockTimeParseError(pub String);

/// A time of day stored as minutes from midnight.
///
/// Serializes as the `HH:MM` string form so snapshots and catalog files
/// stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midday, the fallback start for activities staged without a time.
    pub const NOON: ClockTime = ClockTime(12 * 60);

    /// Build from hour and minute components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ClockTimeParseError> {
        if hour >= 24 || minute >= 60 {
            return Err(ClockTimeParseError(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClockTimeParseError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(err());
        }
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        Self::new(hour, minute).map_err(|_| err())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A half-open `[start, start + duration)` interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub duration_minutes: u32,
}

impl TimeSlot {
    pub fn new(start: ClockTime, duration_minutes: u32) -> Self {
        Self {
            start,
            duration_minutes,
        }
    }

    /// End in minutes from midnight. May exceed 24:00 (1440).
    pub fn end_minutes(&self) -> u32 {
        u32::from(self.start.minutes()) + self.duration_minutes
    }

    /// Two slots overlap when one starts before the other ends.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        u32::from(self.start.minutes()) < other.end_minutes()
            && self.end_minutes() > u32::from(other.start.minutes())
    }
}
