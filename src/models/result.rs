//! Round result data models
//!
//! A `RoundResult` is written once per round at the moment the player
//! assigns a category, and `Feedback` is the transient banner derived from it.

use crate::models::{Category, Country};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Country that was on the flag
    pub country: String,
    /// Category the player picked
    pub category: Category,
    /// True rank of the country in that category
    pub rank: u32,
    /// Points scored; always equal to the rank
    pub points: u32,
    /// Flag reference recorded with the result
    pub flag: String,
}

impl RoundResult {
    /// Score a country against a category.
    ///
    /// Returns `None` when the record has no rank for the category, which the
    /// data provider contract rules out for validated data.
    pub fn score(country: &Country, category: Category) -> Option<Self> {
        let rank = country.rank(category)?;
        Some(Self {
            country: country.name.clone(),
            category,
            rank,
            points: rank,
            flag: country.flag_or_placeholder().to_string(),
        })
    }

    /// Rank as shown on screen, clamped to the category ceiling
    pub fn display_rank(&self) -> String {
        self.category.display_rank(self.rank)
    }
}

/// Transient confirmation shown after a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub country: String,
    pub category: Category,
    pub rank: u32,
    pub points: u32,
}

impl From<&RoundResult> for Feedback {
    fn from(result: &RoundResult) -> Self {
        Self {
            country: result.country.clone(),
            category: result.category,
            rank: result.rank,
            points: result.points,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} → Rank {} → +{} points",
            self.country, self.category, self.rank, self.points
        )
    }
}
