//! Session configuration and logging setup
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags in the binary. Every field has a default, so an empty
//! object `{}` is a valid config file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chess_engine::{Color, Difficulty};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::game::ai::GameMode;
use crate::game::error::{GameError, GameResult};

/// Delay before the AI starts thinking, so the human's move is seen first
pub const DEFAULT_AI_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Color the AI plays in single-player mode
    pub ai_color: Color,
    pub ai_delay_ms: u64,
    /// Seed for the AI's random choices; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: GameMode::Single,
            difficulty: Difficulty::default(),
            ai_color: Color::Black,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> GameResult<Self> {
        serde_json::from_str(text).map_err(|e| GameError::Config {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GameError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_json(&text)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// True if `color` is played by the computer under this config
    pub fn is_ai(&self, color: Color) -> bool {
        self.mode.has_ai() && color == self.ai_color
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Output goes
/// to stderr so it does not interleave with the board on stdout. A second
/// call is ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.ai_delay(), Duration::from_millis(100));
        assert!(config.is_ai(Color::Black));
        assert!(!config.is_ai(Color::White));
    }

    #[test]
    fn test_partial_config_overrides() {
        let config =
            SessionConfig::from_json(r#"{"mode": "multi", "difficulty": 12, "aiColor": "white"}"#)
                .unwrap();
        assert_eq!(config.mode, GameMode::Multi);
        assert_eq!(config.difficulty.value(), 12);
        assert_eq!(config.ai_color, Color::White);
        assert_eq!(config.ai_delay_ms, DEFAULT_AI_DELAY_MS);
        // No AI at all in multi mode
        assert!(!config.is_ai(Color::White));
    }

    #[test]
    fn test_out_of_range_difficulty_is_a_config_error() {
        let err = SessionConfig::from_json(r#"{"difficulty": 40}"#).unwrap_err();
        assert!(matches!(err, GameError::Config { .. }));
    }
}
