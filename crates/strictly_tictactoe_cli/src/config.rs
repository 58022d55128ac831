//! Game session configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! whatever was passed on the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// Who sits opposite the human player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// The computer, at the configured difficulty.
    #[default]
    #[display("ai")]
    Ai,
    /// A second human at the same keyboard.
    #[display("human")]
    Human,
}

/// Configuration for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent type.
    #[serde(default)]
    opponent: Opponent,

    /// Strength of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Whether the computer plays X and moves first.
    #[serde(default)]
    ai_first: bool,

    /// Seed for the computer's random choices; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_think_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            difficulty: Difficulty::default(),
            ai_first: false,
            seed: None,
            think_delay_ms: default_think_delay_ms(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Opponent override.
    pub opponent: Option<Opponent>,
    /// Difficulty override.
    pub difficulty: Option<Difficulty>,
    /// Computer-first override.
    pub ai_first: Option<bool>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Delay override.
    pub think_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Whether any of opponent, difficulty or turn order was given.
    pub fn chooses_players(&self) -> bool {
        self.opponent.is_some() || self.difficulty.is_some() || self.ai_first.is_some()
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(opponent = %config.opponent, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if one is given, otherwise starts from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(opponent) = overrides.opponent {
            self.opponent = opponent;
        }
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(ai_first) = overrides.ai_first {
            self.ai_first = ai_first;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = overrides.think_delay_ms {
            self.think_delay_ms = delay;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.opponent(), Opponent::Ai);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.think_delay_ms(), 500);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = GameConfig::from_toml(
            r#"
            opponent = "human"
            difficulty = "easy"
            ai_first = true
            seed = 42
            think_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(*config.opponent(), Opponent::Human);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert!(*config.ai_first());
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.think_delay_ms(), 0);
    }

    #[test]
    fn test_bad_difficulty_rejected() {
        let err = GameConfig::from_toml(r#"difficulty = "expert""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_chooses_players() {
        assert!(!ConfigOverrides::default().chooses_players());
        let seed_only = ConfigOverrides {
            seed: Some(3),
            think_delay_ms: Some(0),
            ..Default::default()
        };
        assert!(!seed_only.chooses_players());
        let with_difficulty = ConfigOverrides {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        assert!(with_difficulty.chooses_players());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(ConfigOverrides {
            difficulty: Some(Difficulty::Medium),
            seed: Some(7),
            ..Default::default()
        });
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.opponent(), Opponent::Ai);
    }
}
