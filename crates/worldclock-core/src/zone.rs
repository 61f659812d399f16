//! Timezone resolution.
//!
//! The country-data service lists a country's zones either as IANA
//! identifiers (`Asia/Tokyo`) or as fixed offsets (`UTC+08:00`). Both
//! resolve to a [`ZoneSpec`] that can localize an instant.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const SECONDS_PER_MINUTE: i32 = 60;

/// A timezone string that could not be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized timezone: {0}")]
pub struct ZoneError(pub String);

/// A resolved timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSpec {
    /// A zone from the IANA database, DST rules included.
    Named(Tz),
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl ZoneSpec {
    /// Resolves a timezone identifier or a `UTC±HH:MM` offset string.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError` if the string is neither a well-formed offset nor
    /// a known IANA identifier.
    pub fn resolve(identifier: &str) -> Result<Self, ZoneError> {
        let identifier = identifier.trim();
        if has_utc_prefix(identifier) {
            let minutes = parse_offset_minutes(identifier)
                .ok_or_else(|| ZoneError(identifier.to_owned()))?;
            return FixedOffset::east_opt(minutes * SECONDS_PER_MINUTE)
                .map(Self::Fixed)
                .ok_or_else(|| ZoneError(identifier.to_owned()));
        }

        identifier
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ZoneError(identifier.to_owned()))
    }

    /// Converts `instant` to wall-clock time in this zone.
    #[must_use]
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            Self::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

fn has_utc_prefix(value: &str) -> bool {
    value.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("UTC"))
}

/// Parses `UTC±HH:MM` (or `UTC±HH`, or bare `UTC`) to signed total minutes.
///
/// The sign applies to the whole offset, so `UTC-05:30` is -330.
#[must_use]
pub fn parse_offset_minutes(value: &str) -> Option<i32> {
    let value = value.trim();
    if !has_utc_prefix(value) {
        return None;
    }
    let rest = value[3..].trim();
    if rest.is_empty() {
        return Some(0);
    }

    let (sign, magnitude) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };

    let (hour_part, minute_part) = magnitude.split_once(':').unwrap_or((magnitude, "0"));
    let hours = parse_digits(hour_part)?;
    let minutes = parse_digits(minute_part)?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}

/// Parses a non-empty run of ASCII digits; signs and whitespace are rejected.
fn parse_digits(part: &str) -> Option<i32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Offsets the display client knows a representative IANA zone for.
const OFFSET_TO_IANA: &[(&str, &str)] = &[
    ("UTC+08:00", "Asia/Manila"),
    ("UTC+09:00", "Asia/Tokyo"),
    ("UTC-05:00", "America/New_York"),
    ("UTC-08:00", "America/Los_Angeles"),
];

/// Maps a UTC offset string to an IANA identifier when the table has one.
///
/// IANA identifiers and unmapped offsets are returned unchanged.
#[must_use]
pub fn map_offset_to_iana(timezone: &str) -> &str {
    if !has_utc_prefix(timezone) {
        return timezone;
    }
    OFFSET_TO_IANA
        .iter()
        .find(|(offset, _)| *offset == timezone)
        .map_or(timezone, |(_, iana)| *iana)
}
