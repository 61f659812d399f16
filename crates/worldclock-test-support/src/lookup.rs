//! Test lookups — in-memory `CountryLookup` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use worldclock_core::error::LookupError;
use worldclock_core::lookup::{CountryLookup, CountryRecord};

/// A lookup that answers every search with the same records.
#[derive(Debug, Clone)]
pub struct StubCountryLookup {
    records: Vec<CountryRecord>,
}

impl StubCountryLookup {
    /// Create a lookup that returns `records` for every search.
    #[must_use]
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CountryLookup for StubCountryLookup {
    async fn search_by_name(&self, _name: &str) -> Result<Vec<CountryRecord>, LookupError> {
        Ok(self.records.clone())
    }
}

/// A lookup that always fails as if the network were down.
#[derive(Debug)]
pub struct FailingCountryLookup;

#[async_trait]
impl CountryLookup for FailingCountryLookup {
    async fn search_by_name(&self, _name: &str) -> Result<Vec<CountryRecord>, LookupError> {
        Err(LookupError::UpstreamFailure(
            "simulated network failure: connection refused".into(),
        ))
    }
}

/// A lookup that records every searched name and answers with fixed records.
#[derive(Debug)]
pub struct RecordingCountryLookup {
    records: Vec<CountryRecord>,
    searches: Mutex<Vec<String>>,
}

impl RecordingCountryLookup {
    /// Create a recording lookup that returns `records` for every search.
    #[must_use]
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self {
            records,
            searches: Mutex::new(Vec::new()),
        }
    }

    /// Returns the names searched so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountryLookup for RecordingCountryLookup {
    async fn search_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, LookupError> {
        self.searches.lock().unwrap().push(name.to_owned());
        Ok(self.records.clone())
    }
}
