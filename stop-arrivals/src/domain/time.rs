//! Schedule time handling.
//!
//! GTFS expresses stop times as offsets from midnight of the service day,
//! and those offsets may run past 24:00 for trips that continue after
//! midnight. This module keeps the raw offset intact for comparisons and
//! only wraps it when rendering a wall-clock string.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled offset from midnight of the service day, in whole minutes.
///
/// Offsets are allowed to exceed 1440: a stop time written as `25:10:00` in
/// the feed is 1510 minutes. Comparisons use the raw value; only
/// [`Offset::to_clock`] wraps around the day.
///
/// # Examples
///
/// ```
/// use stop_arrivals::domain::Offset;
///
/// let late = Offset::from_minutes(1510);
/// assert_eq!(late.minutes(), 1510);
/// assert_eq!(late.to_clock(), "01:10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u32);

impl Offset {
    /// Create an offset from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Create an offset from seconds since midnight, truncating to whole minutes.
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds / 60)
    }

    /// Returns the offset in minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Signed number of minutes from `now` until this offset.
    ///
    /// Negative when the offset is already behind `now`. No wraparound is
    /// applied, so an offset past midnight stays ahead of every same-day time.
    pub fn minutes_after(&self, now: TimeOfDay) -> i64 {
        i64::from(self.0) - i64::from(now.minutes())
    }

    /// Render as a 24-hour `HH:MM` clock string, wrapping past midnight.
    pub fn to_clock(&self) -> String {
        let hours = (self.0 / 60) % 24;
        let minutes = self.0 % 60;
        format!("{:02}:{:02}", hours, minutes)
    }

    /// Render as an `HHh:MMm` span, wrapping past midnight.
    pub fn to_span(&self) -> String {
        let hours = (self.0 / 60) % 24;
        let minutes = self.0 % 60;
        format!("{:02}h:{:02}m", hours, minutes)
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset({}min)", self.0)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clock())
    }
}

/// A wall-clock time of day, truncated to whole minutes.
///
/// This is the reference point ("now") an arrival query is evaluated
/// against. It is always within a single day (0..1440 minutes).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Create from minutes since midnight. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Truncate a `NaiveTime` to whole minutes.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.hour() * 60 + time.minute())
    }

    /// The current local time of day.
    pub fn now() -> Self {
        Self::from_time(chrono::Local::now().time())
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_arrivals::domain::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::parse_hhmm("08:00").unwrap().minutes(), 480);
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("0800").is_err());
    /// assert!(TimeOfDay::parse_hhmm("8:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self(hour * 60 + minute))
    }

    /// Returns minutes since midnight (0-1439).
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.0 / 60, self.0 % 60)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
