//! Shared application state.

use std::sync::Arc;

use worldclock_core::clock::Clock;
use worldclock_core::lookup::CountryLookup;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock for the current instant.
    pub clock: Arc<dyn Clock>,
    /// Country lookup used to resolve timezones.
    pub lookup: Arc<dyn CountryLookup>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, lookup: Arc<dyn CountryLookup>) -> Self {
        Self { clock, lookup }
    }
}
