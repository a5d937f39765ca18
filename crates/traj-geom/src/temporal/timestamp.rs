// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

pub use chrono::TimeDelta;

/// Width of an encoded [`Timestamp`] in bytes.
pub const TIMESTAMP_SIZE: usize = 8;

/// Microseconds between the Unix epoch and 2000-01-01 00:00:00.
const EPOCH_2000_UNIX_MICROS: i64 = 946_684_800_000_000;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Accepted full date-time layouts, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Errors produced by timestamp parsing, formatting, and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Input was empty or whitespace only.
    #[error("empty timestamp")]
    Empty,
    /// Input matched none of the accepted layouts.
    #[error("invalid timestamp {0:?}")]
    Invalid(String),
    /// Value does not fit the microsecond range or the calendar range.
    #[error("timestamp out of range")]
    OutOfRange,
}

/// A point in time, stored as microseconds since 2000-01-01 00:00:00 (no zone).
///
/// `i64::MAX` and `i64::MIN` are the open-ended values `infinity` and
/// `-infinity`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    /// Latest possible value, rendered as `infinity`.
    pub const INFINITY: Self = Self { micros: i64::MAX };
    /// Earliest possible value, rendered as `-infinity`.
    pub const NEG_INFINITY: Self = Self { micros: i64::MIN };

    /// Creates a timestamp from microseconds since 2000-01-01.
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    /// Returns microseconds since 2000-01-01.
    #[must_use]
    pub const fn micros(self) -> i64 {
        self.micros
    }

    /// Returns `true` for `infinity` and `-infinity`.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.micros == i64::MAX || self.micros == i64::MIN
    }

    /// Converts a calendar date-time into a timestamp.
    pub fn from_datetime(dt: NaiveDateTime) -> Result<Self, TimeError> {
        dt.and_utc()
            .timestamp_micros()
            .checked_sub(EPOCH_2000_UNIX_MICROS)
            .filter(|micros| *micros != i64::MAX && *micros != i64::MIN)
            .map(Self::from_micros)
            .ok_or(TimeError::OutOfRange)
    }

    /// Converts to a calendar date-time; `None` for infinities and values
    /// beyond the calendar range.
    #[must_use]
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        if self.is_infinite() {
            return None;
        }
        let unix = self.micros.checked_add(EPOCH_2000_UNIX_MICROS)?;
        let secs = unix.div_euclid(MICROS_PER_SECOND);
        let nanos = u32::try_from(unix.rem_euclid(MICROS_PER_SECOND) * 1_000).ok()?;
        DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
    }

    /// Little-endian encoding.
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; TIMESTAMP_SIZE] {
        self.micros.to_le_bytes()
    }

    /// Decodes a little-endian encoding.
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; TIMESTAMP_SIZE]) -> Self {
        Self::from_micros(i64::from_le_bytes(bytes))
    }
}

/// Parses a timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS[.ffffff]`, the same with a `T` separator,
/// minute precision, a bare date (midnight), and `infinity`/`-infinity`.
/// Surrounding whitespace is ignored. Sub-microsecond digits are truncated.
pub fn parse_time(text: &str) -> Result<Timestamp, TimeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimeError::Empty);
    }
    if text.eq_ignore_ascii_case("infinity") || text.eq_ignore_ascii_case("+infinity") {
        return Ok(Timestamp::INFINITY);
    }
    if text.eq_ignore_ascii_case("-infinity") {
        return Ok(Timestamp::NEG_INFINITY);
    }

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| TimeError::Invalid(text.to_owned()))?;
    Timestamp::from_datetime(parsed)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`, appending the fractional
/// seconds (trailing zeros removed) when they are non-zero.
pub fn format_time(ts: Timestamp) -> Result<String, TimeError> {
    match ts {
        Timestamp::INFINITY => return Ok("infinity".to_owned()),
        Timestamp::NEG_INFINITY => return Ok("-infinity".to_owned()),
        _ => {}
    }
    let dt = ts.to_datetime().ok_or(TimeError::OutOfRange)?;
    let mut out = dt.format("%Y-%m-%d %H:%M:%S").to_string();
    let fraction = ts.micros().rem_euclid(MICROS_PER_SECOND);
    if fraction != 0 {
        let digits = format!("{fraction:06}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    Ok(out)
}

/// Elapsed time from `start` to `end` (negative when `end` precedes `start`).
pub fn subtract_times(end: Timestamp, start: Timestamp) -> Result<TimeDelta, TimeError> {
    if end.is_infinite() || start.is_infinite() {
        return Err(TimeError::OutOfRange);
    }
    end.micros()
        .checked_sub(start.micros())
        .map(TimeDelta::microseconds)
        .ok_or(TimeError::OutOfRange)
}
