//! GeoHunter - flag ranking trivia
//!
//! A terminal geography game: a flag is revealed after a short shuffle, the
//! player drops it into one of eight ranking categories, and the score is the
//! sum of the country's real ranks over eight rounds. Lower is better.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod data;
pub mod game;
pub mod models;

// Common error types
#[derive(Debug)]
pub enum GeoHunterError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Country data missing, malformed or too small for a session
    DataError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for GeoHunterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoHunterError::IoError(err) => write!(f, "I/O error: {}", err),
            GeoHunterError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoHunterError::DataError(msg) => write!(f, "Country data error: {}", msg),
            GeoHunterError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for GeoHunterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoHunterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeoHunterError {
    fn from(err: std::io::Error) -> Self {
        GeoHunterError::IoError(err)
    }
}

impl From<serde_json::Error> for GeoHunterError {
    fn from(err: serde_json::Error) -> Self {
        GeoHunterError::DataError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for GeoHunterError {
    fn from(err: toml::de::Error) -> Self {
        GeoHunterError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for GeoHunter operations
pub type Result<T> = std::result::Result<T, GeoHunterError>;

/// Error handling utilities
pub mod error {
    use super::GeoHunterError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &GeoHunterError) -> String {
        match error {
            GeoHunterError::ConfigError(msg) => {
                format!("Configuration error: {}. Check geohunter.toml.", msg)
            }
            GeoHunterError::DataError(msg) => format!(
                "Could not load country data: {}. Remove countries_file to use the built-in set.",
                msg
            ),
            GeoHunterError::TuiError(_) => {
                "The terminal could not be set up. Try a larger or different terminal.".to_string()
            }
            GeoHunterError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "geohunter";
pub const CONFIG_FILE: &str = "geohunter.toml";
pub const LOG_FILE: &str = "geohunter.log";
/// Rounds (and sampled countries) per session
pub const ROUNDS_PER_SESSION: usize = 8;
/// Flags shown by the shuffle animation, true flag included
pub const SHUFFLE_LENGTH: usize = 10;
/// Shown in place of a missing flag reference
pub const PLACEHOLDER_FLAG: &str = "🏳";
