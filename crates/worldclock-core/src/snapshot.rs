//! Formatted time snapshots.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::zone::ZoneSpec;

/// 24-hour `HH:mm:ss`.
const TIME_FORMAT: &str = "%H:%M:%S";

/// `Weekday, Mon D, YYYY`, e.g. `Thursday, Jan 15, 2026`.
const DATE_FORMAT: &str = "%A, %b %-d, %Y";

/// Formats the time-of-day of a localized instant.
#[must_use]
pub fn format_time(local: &DateTime<FixedOffset>) -> String {
    local.format(TIME_FORMAT).to_string()
}

/// Formats the calendar date of a localized instant.
#[must_use]
pub fn format_date(local: &DateTime<FixedOffset>) -> String {
    local.format(DATE_FORMAT).to_string()
}

/// The current time in a country, as returned by `GET /get-time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// The country's common name as given by the lookup service.
    pub country: String,
    /// The timezone identifier the time was computed in.
    pub timezone: String,
    /// Time of day, `HH:mm:ss`.
    pub time: String,
    /// Calendar date, `Weekday, Mon D, YYYY`.
    pub date: String,
}

impl TimeSnapshot {
    /// Formats `instant` in `zone`.
    #[must_use]
    pub fn capture(
        country: impl Into<String>,
        timezone: impl Into<String>,
        zone: ZoneSpec,
        instant: DateTime<Utc>,
    ) -> Self {
        let local = zone.localize(instant);
        Self {
            country: country.into(),
            timezone: timezone.into(),
            time: format_time(&local),
            date: format_date(&local),
        }
    }
}
