//! Score aggregation
//!
//! Pure functions over a finished result list, plus the random facts and
//! tips shown next to the final score.

use crate::data::trivia::{FACTS, TIP_BUCKETS};
use crate::game::rng::GameRng;
use crate::models::RoundResult;
use chrono::{DateTime, Utc};
use ratatui::style::Color;

/// Number of tips shown on the score screen
pub const TIPS_SHOWN: usize = 6;

/// Sum of all points
pub fn total_score(results: &[RoundResult]) -> u32 {
    results.iter().map(|r| r.points).sum()
}

/// Qualitative band for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Elite,
    Strong,
    Good,
    TryAgain,
}

impl Tier {
    /// Classify a total: <100 Elite, 100-150 Strong, 151-200 Good, >200 Try again
    pub fn classify(total: u32) -> Self {
        match total {
            0..=99 => Self::Elite,
            100..=150 => Self::Strong,
            151..=200 => Self::Good,
            _ => Self::TryAgain,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Elite => "Elite!",
            Self::Strong => "Strong!",
            Self::Good => "Just made it!",
            Self::TryAgain => "Try again!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Elite => "🏆",
            Self::Strong => "💪",
            Self::Good => "👍",
            Self::TryAgain => "🔄",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Elite => Color::Green,
            Self::Strong => Color::Blue,
            Self::Good => Color::Yellow,
            Self::TryAgain => Color::Red,
        }
    }

    /// Score range as listed in the rules
    pub fn range_text(&self) -> &'static str {
        match self {
            Self::Elite => "Under 100 points",
            Self::Strong => "100-150 points",
            Self::Good => "151-200 points",
            Self::TryAgain => "200+ points",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Elite, Self::Strong, Self::Good, Self::TryAgain]
    }
}

/// Colour band for a single result's points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PointsBand {
    pub fn for_points(points: u32) -> Self {
        match points {
            0..=10 => Self::Excellent,
            11..=50 => Self::Good,
            51..=100 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Blue,
            Self::Fair => Color::Yellow,
            Self::Poor => Color::Red,
        }
    }
}

/// Supplementary content drawn for the score screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    pub fact: String,
    pub tips: Vec<String>,
}

impl Insights {
    /// One fact, and one tip from each of six distinct buckets
    pub fn draw(rng: &mut GameRng) -> Self {
        let fact = rng.choose(FACTS).copied().unwrap_or_default().to_string();
        let tips = rng
            .choose_distinct(TIP_BUCKETS, TIPS_SHOWN)
            .into_iter()
            .filter_map(|bucket| rng.choose(bucket).copied())
            .map(str::to_string)
            .collect();

        Self { fact, tips }
    }
}

/// Final outcome handed from the game screen to the score screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub results: Vec<RoundResult>,
    pub total_score: u32,
    pub tier: Tier,
    pub completed_at: DateTime<Utc>,
}

impl GameOutcome {
    pub fn from_results(results: Vec<RoundResult>) -> Self {
        let total_score = total_score(&results);
        Self {
            tier: Tier::classify(total_score),
            total_score,
            results,
            completed_at: Utc::now(),
        }
    }
}
