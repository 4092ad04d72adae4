//! Country data and static content
//!
//! Holds the built-in country table, the trivia shown on the score screen,
//! and the `CountryProvider` seam the round state machine samples from.

pub mod countries;
pub mod provider;
pub mod trivia;

pub use provider::{BuiltinCountries, CountryProvider, JsonCountries};

use crate::config::GameConfig;
use crate::Result;

/// Pick the provider named by the configuration
pub fn provider_from_config(config: &GameConfig) -> Result<Box<dyn CountryProvider>> {
    match &config.countries_file {
        Some(path) => Ok(Box::new(JsonCountries::load(path)?)),
        None => Ok(Box::new(BuiltinCountries::new())),
    }
}
