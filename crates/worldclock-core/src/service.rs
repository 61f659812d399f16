//! The time lookup operation.
//!
//! Resolves a country name to its first listed timezone through a
//! [`CountryLookup`] and formats the current instant there.

use crate::clock::Clock;
use crate::error::LookupError;
use crate::lookup::{CountryLookup, CountryTimezone};
use crate::snapshot::TimeSnapshot;
use crate::zone::ZoneSpec;

/// Returns the current time and date in `country`.
///
/// Blank input fails before any lookup is made. Otherwise exactly one lookup
/// call is issued.
///
/// # Errors
///
/// Returns `LookupError::InvalidRequest` if `country` is missing or blank.
/// Returns `LookupError::NotFound` if no country matches or it has no timezone.
/// Returns `LookupError::UpstreamFailure` if the lookup fails or the listed
/// timezone cannot be resolved.
pub async fn get_current_time(
    country: Option<&str>,
    lookup: &dyn CountryLookup,
    clock: &dyn Clock,
) -> Result<TimeSnapshot, LookupError> {
    let country = country
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(LookupError::InvalidRequest)?;

    let records = lookup.search_by_name(country).await?;
    let selected = CountryTimezone::from_records(records).ok_or(LookupError::NotFound)?;

    let zone = ZoneSpec::resolve(&selected.timezone)
        .map_err(|e| LookupError::UpstreamFailure(e.to_string()))?;

    Ok(TimeSnapshot::capture(
        selected.country,
        selected.timezone,
        zone,
        clock.now(),
    ))
}
