//! Configuration management module
//!
//! Handles loading and validation of game settings: difficulty, an optional
//! RNG seed, an optional country data file, and the animation timings.

use crate::{GeoHunterError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Game configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Whether the country name is shown under the revealed flag
    pub difficulty: Difficulty,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// JSON country table replacing the built-in one
    pub countries_file: Option<PathBuf>,
    /// Animation and transition timings
    pub timing: TimingConfig,
}

/// Difficulty variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Country name shown once the flag is revealed
    Easy,
    /// Flag only
    Hard,
}

/// Durations driving the shuffle animation, feedback banner and screen fades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time between shuffle animation steps
    #[serde(with = "duration_serde")]
    pub shuffle_tick: Duration,
    /// How long the selection feedback stays on screen
    #[serde(with = "duration_serde")]
    pub feedback_duration: Duration,
    /// Pause between the feedback clearing and the next round
    #[serde(with = "duration_serde")]
    pub advance_delay: Duration,
    /// Screen fade-out before the swap
    #[serde(with = "duration_serde")]
    pub fade_out: Duration,
    /// Settle delay before the new screen fades back in
    #[serde(with = "duration_serde")]
    pub fade_settle: Duration,
    /// Upper bound between redraws
    #[serde(with = "duration_serde")]
    pub frame_rate: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            countries_file: None,
            timing: TimingConfig::default(),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            shuffle_tick: Duration::from_millis(200),
            feedback_duration: Duration::from_millis(2000),
            advance_delay: Duration::from_millis(500),
            fade_out: Duration::from_millis(200),
            fade_settle: Duration::from_millis(50),
            frame_rate: Duration::from_millis(50),
        }
    }
}

impl Difficulty {
    /// The other difficulty
    pub fn toggled(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
        }
    }

    /// Prompt shown above the revealed flag
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Easy => "Which country is this?",
            Self::Hard => "Identify this flag!",
        }
    }

    /// Whether the country name is revealed with the flag
    pub fn shows_country_name(&self) -> bool {
        matches!(self, Self::Easy)
    }
}

impl TimingConfig {
    /// Every timing must be non-zero and no longer than this
    pub const MAX_DURATION: Duration = Duration::from_secs(10);

    fn named(&self) -> [(&'static str, Duration); 6] {
        [
            ("shuffle_tick", self.shuffle_tick),
            ("feedback_duration", self.feedback_duration),
            ("advance_delay", self.advance_delay),
            ("fade_out", self.fade_out),
            ("fade_settle", self.fade_settle),
            ("frame_rate", self.frame_rate),
        ]
    }

    /// Validate every timing
    pub fn validate(&self) -> Result<()> {
        for (name, duration) in self.named() {
            if duration.is_zero() {
                return Err(GeoHunterError::ConfigError(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
            if duration > Self::MAX_DURATION {
                return Err(GeoHunterError::ConfigError(format!(
                    "{} too long: {} (max: {})",
                    name,
                    humantime::format_duration(duration),
                    humantime::format_duration(Self::MAX_DURATION)
                )));
            }
        }
        Ok(())
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.countries_file {
            if !path.is_file() {
                return Err(GeoHunterError::ConfigError(format!(
                    "Country file does not exist: {}",
                    path.display()
                )));
            }
        }

        self.timing.validate()
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a JSON country table
    pub fn with_countries_file(mut self, path: PathBuf) -> Self {
        self.countries_file = Some(path);
        self
    }

    /// Replace the timings
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            GeoHunterError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            GeoHunterError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/geohunter/geohunter.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            GeoHunterError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

mod duration_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.timing.shuffle_tick, Duration::from_millis(200));
        assert_eq!(config.timing.feedback_duration, Duration::from_secs(2));
        assert_eq!(config.timing.fade_out, Duration::from_millis(200));
        assert_eq!(config.timing.fade_settle, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let config = GameConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_seed(42);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        assert!(toml_str.contains("shuffle_tick = \"200ms\""));
        assert!(toml_str.contains("difficulty = \"hard\""));

        let deserialized: GameConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\n\n[timing]\nfeedback_duration = \"1s 500ms\"").unwrap();

        let config = GameConfig::load_from(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.timing.feedback_duration, Duration::from_millis(1500));
        assert_eq!(config.timing.shuffle_tick, Duration::from_millis(200));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_zero_duration() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nshuffle_tick = \"0s\"").unwrap();
        let err = GameConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("shuffle_tick"));
    }

    #[test]
    fn test_rejects_long_duration() {
        let timing = TimingConfig {
            fade_out: Duration::from_secs(30),
            ..TimingConfig::default()
        };
        assert!(GameConfig::default().with_timing(timing).validate().is_err());
    }

    #[test]
    fn test_rejects_missing_countries_file() {
        let config = GameConfig::default().with_countries_file(PathBuf::from("/no/such/file.json"));
        assert!(matches!(
            config.validate(),
            Err(GeoHunterError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_bad_duration_text() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nfade_out = \"soon\"").unwrap();
        assert!(GameConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_difficulty_toggle() {
        assert_eq!(Difficulty::Easy.toggled(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.toggled(), Difficulty::Easy);
        assert!(Difficulty::Easy.shows_country_name());
        assert!(!Difficulty::Hard.shows_country_name());
    }

    #[test]
    fn test_config_file_path() {
        let path = GameConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("geohunter"));
        assert!(path.to_string_lossy().contains("geohunter.toml"));
    }
}
