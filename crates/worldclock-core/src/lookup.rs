//! Country lookup abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Country names as listed by the country-data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common English name, e.g. `Japan`.
    pub common: String,
    /// Official English name, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// A country record returned by a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// The country's names.
    pub name: CountryName,
    /// Timezones, IANA identifiers or `UTC±HH:MM` offsets.
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
}

impl CountryRecord {
    /// Convenience constructor for a record with a common name only.
    #[must_use]
    pub fn new(common: impl Into<String>, timezones: Vec<String>) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
                official: None,
            },
            timezones: Some(timezones),
        }
    }
}

/// The country and the single timezone chosen to represent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTimezone {
    /// The country's common name.
    pub country: String,
    /// The first timezone listed for the country.
    pub timezone: String,
}

impl CountryTimezone {
    /// Selects the first record and its first listed timezone.
    ///
    /// Returns `None` when there are no records or the first record lists no
    /// timezones.
    #[must_use]
    pub fn from_records(records: Vec<CountryRecord>) -> Option<Self> {
        let record = records.into_iter().next()?;
        let timezone = record.timezones?.into_iter().next()?;
        Some(Self {
            country: record.name.common,
            timezone,
        })
    }
}

/// Port for searching countries by name.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    /// Search countries by name. A search with no matches yields an empty
    /// list, not an error.
    async fn search_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, LookupError>;
}
