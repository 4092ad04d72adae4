//! Ranking categories
//!
//! The eight fixed categories a flag can be assigned to, with their icons
//! and the display ceiling applied to ranks shown on screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display ceiling for every category except Coffee
pub const DEFAULT_RANK_CEILING: u32 = 100;
/// Coffee producer tables are shorter
pub const COFFEE_RANK_CEILING: u32 = 73;

/// One of the eight ranking categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Population,
    #[serde(rename = "FIFA")]
    Fifa,
    Size,
    Crime,
    #[serde(rename = "GDP")]
    Gdp,
    Tourism,
    Gas,
    Coffee,
}

impl Category {
    /// All categories in board order
    pub const ALL: [Category; 8] = [
        Category::Population,
        Category::Fifa,
        Category::Size,
        Category::Crime,
        Category::Gdp,
        Category::Tourism,
        Category::Gas,
        Category::Coffee,
    ];

    /// Display label, also the key used in country data files
    pub fn label(&self) -> &'static str {
        match self {
            Self::Population => "Population",
            Self::Fifa => "FIFA",
            Self::Size => "Size",
            Self::Crime => "Crime",
            Self::Gdp => "GDP",
            Self::Tourism => "Tourism",
            Self::Gas => "Gas",
            Self::Coffee => "Coffee",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Population => "👥",
            Self::Fifa => "⚽",
            Self::Size => "🗺️",
            Self::Crime => "🛡️",
            Self::Gdp => "💰",
            Self::Tourism => "✈️",
            Self::Gas => "⛽",
            Self::Coffee => "☕",
        }
    }

    /// Highest rank shown verbatim; anything above renders as "<ceiling>+"
    pub fn rank_ceiling(&self) -> u32 {
        match self {
            Self::Coffee => COFFEE_RANK_CEILING,
            _ => DEFAULT_RANK_CEILING,
        }
    }

    /// Format a rank for display. Scoring never goes through this.
    ///
    /// # Examples
    /// ```
    /// use geohunter::models::Category;
    ///
    /// assert_eq!(Category::Gdp.display_rank(150), "100+");
    /// assert_eq!(Category::Coffee.display_rank(80), "73+");
    /// assert_eq!(Category::Coffee.display_rank(5), "5");
    /// ```
    pub fn display_rank(&self, rank: u32) -> String {
        let ceiling = self.rank_ceiling();
        if rank > ceiling {
            format!("{}+", ceiling)
        } else {
            rank.to_string()
        }
    }

    /// Position in board order (0..8)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Category at a board position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown category: {}", needle))
    }
}
