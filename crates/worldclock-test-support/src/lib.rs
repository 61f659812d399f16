//! Shared test doubles for the world clock.

mod clock;
mod lookup;

pub use clock::FixedClock;
pub use lookup::{FailingCountryLookup, RecordingCountryLookup, StubCountryLookup};
