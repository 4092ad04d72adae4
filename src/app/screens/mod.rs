//! TUI screen components
//!
//! Contains individual screen implementations for each screen of the game.

pub mod game;
pub mod rules;
pub mod score;
pub mod start;

pub use game::GameScreen;
pub use rules::{RulesAction, RulesScreen};
pub use score::{ScoreAction, ScoreScreen};
pub use start::{MenuItem, StartScreen};
