//! DateTime stamp formatting.
//!
//! This module turns an instant into the three stamps progdt inserts:
//!
//! - date: `YYYY-MM-DD`
//! - time: `HH:MM:SS.FFF±HH:MM`
//! - datetime: `YYYY-MM-DDTHH:MM:SS.FFF±HH:MM`
//!
//! Year is written at its natural width. Month, day, hour, minute, second
//! and both offset components are two digits; milliseconds are three.
//!
//! # Offsets
//!
//! In [`TimeMode::Utc`] the time always ends in `+00:00`. In
//! [`TimeMode::Local`] the suffix is derived from a [`RawOffset`], the
//! number of minutes UTC is ahead of local time. A zone east of Greenwich
//! therefore has a negative raw offset and renders with `+`.
//!
//! ```rust
//! use jiff::{Timestamp, tz::{Offset, TimeZone}};
//! use progdt_core::{display::datetime::format_time, models::TimeMode};
//!
//! let instant: Timestamp = "2023-01-01T00:00:00Z".parse().unwrap();
//! let paris = TimeZone::fixed(Offset::from_seconds(3600).unwrap());
//!
//! assert_eq!(format_time(instant, TimeMode::Local, &paris), "01:00:00.000+01:00");
//! assert_eq!(format_time(instant, TimeMode::Utc, &paris), "00:00:00.000+00:00");
//! ```

use std::fmt;

use jiff::{
    tz::{Offset, TimeZone},
    Timestamp, Zoned,
};

use crate::models::{CommandKind, TimeMode};

/// Minutes by which local time trails UTC.
///
/// Positive values are zones behind UTC (the Americas), negative values are
/// zones ahead of it. Hour and minute components are split with truncating
/// division, so `-90` is one hour and thirty minutes ahead, never two hours
/// and thirty minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOffset(pub i32);

impl RawOffset {
    /// Derives the raw offset from a UTC offset. Sub-minute seconds are
    /// truncated.
    pub fn from_offset(offset: Offset) -> Self {
        RawOffset(-offset.seconds() / 60)
    }

    pub fn minutes(self) -> i32 {
        self.0
    }

    /// `+` when local time is ahead of UTC, `-` otherwise (including zero).
    pub fn sign(self) -> char {
        if self.0 < 0 {
            '+'
        } else {
            '-'
        }
    }

    /// Magnitude of the hour component.
    pub fn hours(self) -> u32 {
        (self.0 / 60).unsigned_abs()
    }

    /// Magnitude of the minute component.
    pub fn remainder_minutes(self) -> u32 {
        (self.0 % 60).unsigned_abs()
    }
}

impl fmt::Display for RawOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}:{:02}",
            self.sign(),
            self.hours(),
            self.remainder_minutes()
        )
    }
}

/// An instant split into calendar fields under one [`TimeMode`].
///
/// Every stamp produced from the same `Stamp` reads the same fields, so a
/// datetime never mixes a date and a time taken from different instants.
#[derive(Debug, Clone)]
pub struct Stamp {
    zoned: Zoned,
    mode: TimeMode,
}

impl Stamp {
    /// Splits `instant` in the frame chosen by `mode`. `local` is only
    /// consulted in [`TimeMode::Local`].
    pub fn new(instant: Timestamp, mode: TimeMode, local: &TimeZone) -> Self {
        let zone = match mode {
            TimeMode::Utc => TimeZone::UTC,
            TimeMode::Local => local.clone(),
        };
        Self {
            zoned: instant.to_zoned(zone),
            mode,
        }
    }

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// Raw offset of the frame; always zero in UTC mode.
    pub fn raw_offset(&self) -> RawOffset {
        RawOffset::from_offset(self.zoned.offset())
    }

    pub fn date(&self) -> DateStamp<'_> {
        DateStamp(&self.zoned)
    }

    pub fn time(&self) -> TimeStamp<'_> {
        TimeStamp { stamp: self }
    }

    pub fn datetime(&self) -> DateTimeStamp<'_> {
        DateTimeStamp { stamp: self }
    }

    /// Renders the stamp for `kind`.
    pub fn render(&self, kind: CommandKind) -> String {
        match kind {
            CommandKind::Date => self.date().to_string(),
            CommandKind::Time => self.time().to_string(),
            CommandKind::DateTime => self.datetime().to_string(),
        }
    }
}

/// `YYYY-MM-DD`
pub struct DateStamp<'a>(&'a Zoned);

impl<'a> fmt::Display for DateStamp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

/// `HH:MM:SS.FFF±HH:MM`
pub struct TimeStamp<'a> {
    stamp: &'a Stamp,
}

impl<'a> fmt::Display for TimeStamp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = &self.stamp.zoned;
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            zoned.hour(),
            zoned.minute(),
            zoned.second(),
            zoned.millisecond()
        )?;

        match self.stamp.mode {
            TimeMode::Utc => f.write_str("+00:00"),
            TimeMode::Local => write!(f, "{}", self.stamp.raw_offset()),
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS.FFF±HH:MM`
pub struct DateTimeStamp<'a> {
    stamp: &'a Stamp,
}

impl<'a> fmt::Display for DateTimeStamp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.stamp.date(), self.stamp.time())
    }
}

/// Formats the date part of `instant`.
pub fn format_date(instant: Timestamp, mode: TimeMode, local: &TimeZone) -> String {
    Stamp::new(instant, mode, local).date().to_string()
}

/// Formats the time part of `instant`, offset included.
pub fn format_time(instant: Timestamp, mode: TimeMode, local: &TimeZone) -> String {
    Stamp::new(instant, mode, local).time().to_string()
}

/// Formats `instant` as a full datetime.
pub fn format_datetime(instant: Timestamp, mode: TimeMode, local: &TimeZone) -> String {
    Stamp::new(instant, mode, local).datetime().to_string()
}
