//! Country reference records

use crate::models::Category;
use crate::{GeoHunterError, Result, PLACEHOLDER_FLAG};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A country with its flag and one rank per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Display name
    pub name: String,
    /// Flag asset reference (an emoji flag in the built-in set)
    #[serde(default)]
    pub flag: String,
    /// 1-based rank per category; ties allowed, no upper bound
    pub rankings: HashMap<Category, u32>,
}

impl Country {
    /// Create a country from a rank list in board order
    pub fn new(name: &str, flag: &str, ranks: [u32; 8]) -> Self {
        let rankings = Category::ALL.iter().copied().zip(ranks).collect();
        Self {
            name: name.to_string(),
            flag: flag.to_string(),
            rankings,
        }
    }

    /// Rank for a category. Every validated record ranks every category.
    pub fn rank(&self, category: Category) -> Option<u32> {
        self.rankings.get(&category).copied()
    }

    /// Flag reference, or the placeholder when the record has none
    pub fn flag_or_placeholder(&self) -> &str {
        if self.flag.trim().is_empty() {
            PLACEHOLDER_FLAG
        } else {
            &self.flag
        }
    }

    /// Check the provider contract: a name and a positive rank for each category
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GeoHunterError::DataError(
                "Country name must not be empty".to_string(),
            ));
        }

        for category in Category::ALL {
            match self.rank(category) {
                Some(0) => {
                    return Err(GeoHunterError::DataError(format!(
                        "{} has rank 0 for {}; ranks are 1-based",
                        self.name, category
                    )))
                }
                Some(_) => {}
                None => {
                    return Err(GeoHunterError::DataError(format!(
                        "{} has no rank for {}",
                        self.name, category
                    )))
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_board_order() {
        let brazil = Country::new("Brazil", "🇧🇷", [7, 5, 5, 120, 9, 45, 30, 1]);
        assert_eq!(brazil.rank(Category::Population), Some(7));
        assert_eq!(brazil.rank(Category::Crime), Some(120));
        assert_eq!(brazil.rank(Category::Coffee), Some(1));
        assert!(brazil.validate().is_ok());
    }

    #[test]
    fn test_placeholder_flag() {
        let mut country = Country::new("Nowhere", "", [1; 8]);
        assert_eq!(country.flag_or_placeholder(), PLACEHOLDER_FLAG);
        country.flag = "🇳🇴".to_string();
        assert_eq!(country.flag_or_placeholder(), "🇳🇴");
    }

    #[test]
    fn test_validate_missing_rank() {
        let mut country = Country::new("Partial", "🏴", [3; 8]);
        country.rankings.remove(&Category::Gas);
        let err = country.validate().unwrap_err();
        assert!(err.to_string().contains("Gas"));
    }

    #[test]
    fn test_validate_zero_rank() {
        let country = Country::new("Zero", "🏴", [0, 1, 1, 1, 1, 1, 1, 1]);
        assert!(country.validate().is_err());
    }
}
