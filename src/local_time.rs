//! Wall clock readings
//!
//! The clock only needs the local hour and minute plus a monotonic
//! [`Instant`] for fade timing. Where both come from (NTP, RTC, host clock)
//! is up to the [`WallClock`] implementation.

use embassy_time::Instant;
use time::{OffsetDateTime, UtcOffset};

use crate::error::{Error, Result};

const SECONDS_PER_HOUR: i32 = 3_600;
const MIN_OFFSET_HOURS: i8 = -12;
const MAX_OFFSET_HOURS: i8 = 14;

/// Local hour (0-23) and minute (0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
}

impl LocalTime {
    /// Create a local time, rejecting out of range values
    pub const fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::OutOfRangeInput { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Local time for a UTC unix timestamp shifted by `offset`
    pub fn from_unix(unix_seconds: i64, offset: TimezoneOffset) -> Result<Self> {
        let utc = OffsetDateTime::from_unix_timestamp(unix_seconds)
            .map_err(|_| Error::InvalidTimestamp)?;
        let local = utc
            .checked_to_offset(offset.to_utc_offset()?)
            .ok_or(Error::InvalidTimestamp)?;
        Self::new(local.hour(), local.minute())
    }
}

/// Whole-hour offset from UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimezoneOffset {
    hours: i8,
}

impl TimezoneOffset {
    pub const UTC: Self = Self { hours: 0 };

    pub const fn from_hours(hours: i8) -> Result<Self> {
        if hours < MIN_OFFSET_HOURS || hours > MAX_OFFSET_HOURS {
            return Err(Error::InvalidTimezone);
        }
        Ok(Self { hours })
    }

    /// Parse a stored offset such as `"-5"`, `"+9"` or `"0"`
    pub fn parse(text: &str) -> Result<Self> {
        let hours = text
            .trim()
            .parse::<i8>()
            .map_err(|_| Error::InvalidTimezone)?;
        Self::from_hours(hours)
    }

    pub const fn hours(self) -> i8 {
        self.hours
    }

    /// Offset in seconds east of UTC
    pub const fn as_seconds(self) -> i32 {
        self.hours as i32 * SECONDS_PER_HOUR
    }

    fn to_utc_offset(self) -> Result<UtcOffset> {
        UtcOffset::from_whole_seconds(self.as_seconds()).map_err(|_| Error::InvalidTimezone)
    }
}

/// Source of wall clock readings
///
/// Readings must not go backwards between ticks.
pub trait WallClock {
    /// Monotonic instant used for expiry and fade timing
    fn now(&self) -> Instant;

    /// Local hour and minute at [`WallClock::now`]
    fn local_time(&self) -> LocalTime;
}
