//! World Clock Lookup — HTTP adapter for the country-data service.
//!
//! Implements the `CountryLookup` port against the REST Countries v3.1
//! name search.

pub mod rest_countries;

pub use rest_countries::{LookupClientError, RestCountriesClient};
