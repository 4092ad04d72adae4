//! Country data providers
//!
//! The round state machine only talks to `CountryProvider`; the built-in
//! table and JSON files are interchangeable behind it.

use crate::data::countries::builtin_countries;
use crate::game::rng::GameRng;
use crate::models::Country;
use crate::{GeoHunterError, Result, ROUNDS_PER_SESSION, SHUFFLE_LENGTH};
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of country records and the sampling operations built on them
pub trait CountryProvider: Send + Sync {
    /// Every record this provider knows about
    fn countries(&self) -> &[Country];

    /// Sample `n` distinct countries uniformly, without replacement
    fn sample_countries(&self, n: usize, rng: &mut GameRng) -> Result<Vec<Country>> {
        let pool = self.countries();
        if pool.len() < n {
            return Err(GeoHunterError::DataError(format!(
                "Need {} countries for a session but only {} are available",
                n,
                pool.len()
            )));
        }

        Ok(rng.choose_distinct(pool, n).into_iter().cloned().collect())
    }

    /// Flags cycled by the reveal animation.
    ///
    /// Decoys come from the other session countries, never repeating the
    /// previous entry when there is a choice, and the sequence always ends
    /// on the true flag.
    fn build_shuffle_sequence(
        &self,
        true_country: &Country,
        session: &[Country],
        rng: &mut GameRng,
    ) -> Vec<String> {
        let true_flag = true_country.flag_or_placeholder().to_string();
        let decoys: Vec<String> = session
            .iter()
            .filter(|c| c.name != true_country.name)
            .map(|c| c.flag_or_placeholder().to_string())
            .collect();

        let mut sequence = Vec::with_capacity(SHUFFLE_LENGTH);
        if decoys.is_empty() {
            sequence.resize(SHUFFLE_LENGTH, true_flag);
            return sequence;
        }

        while sequence.len() < SHUFFLE_LENGTH - 1 {
            let candidate = &decoys[rng.gen_index(decoys.len())];
            if decoys.len() > 1 && sequence.last() == Some(candidate) {
                continue;
            }
            sequence.push(candidate.clone());
        }
        sequence.push(true_flag);
        sequence
    }
}

/// The compiled-in country table
#[derive(Debug, Clone)]
pub struct BuiltinCountries {
    countries: Vec<Country>,
}

impl BuiltinCountries {
    pub fn new() -> Self {
        Self {
            countries: builtin_countries(),
        }
    }
}

impl Default for BuiltinCountries {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryProvider for BuiltinCountries {
    fn countries(&self) -> &[Country] {
        &self.countries
    }
}

/// Countries loaded from a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonCountries {
    path: PathBuf,
    countries: Vec<Country>,
}

impl JsonCountries {
    /// Load and validate a country file.
    ///
    /// Names must be unique and there must be enough records for a session.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeoHunterError::DataError(format!(
                "Failed to read country file {}: {}",
                path.display(),
                e
            ))
        })?;

        let countries: Vec<Country> = serde_json::from_str(&content).map_err(|e| {
            GeoHunterError::DataError(format!(
                "Failed to parse country file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut names = HashSet::new();
        for country in &countries {
            country.validate()?;
            if !names.insert(country.name.as_str()) {
                return Err(GeoHunterError::DataError(format!(
                    "Duplicate country {} in {}",
                    country.name,
                    path.display()
                )));
            }
        }

        if countries.len() < ROUNDS_PER_SESSION {
            return Err(GeoHunterError::DataError(format!(
                "{} has {} countries, a session needs at least {}",
                path.display(),
                countries.len(),
                ROUNDS_PER_SESSION
            )));
        }

        info!(
            "Loaded {} countries from {}",
            countries.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            countries,
        })
    }

    /// File the records were read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CountryProvider for JsonCountries {
    fn countries(&self) -> &[Country] {
        &self.countries
    }
}
