//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, AppState};
pub use screens::{GameScreen, MenuItem, RulesScreen, ScoreAction, ScoreScreen, StartScreen};
pub use state::{NavigationAction, Screen, ScreenController, ScreenSwap};
pub use tui::Tui;
