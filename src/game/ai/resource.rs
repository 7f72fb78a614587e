//! AI resource definitions for game mode and search statistics
//!
//! # Game Modes
//!
//! - **Single**: one human against the computer; the AI plays the
//!   configured color (Black unless told otherwise)
//! - **Multi**: two humans at one board; the search is never invoked
//!
//! Difficulty is the engine's 1-15 [`chess_engine::Difficulty`] ladder. It
//! selects search depth and branching cap, not a time budget:
//!
//! | Difficulty | Depth | Moves per node |
//! |------------|-------|----------------|
//! | 1          | -     | random move    |
//! | 2-7        | 2     | 10             |
//! | 8-11       | 3     | 15             |
//! | 12-15      | 4     | 30             |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chess_engine::SearchTier;
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human vs AI opponent
    #[default]
    Single,
    /// Human vs human, hot-seat
    Multi,
}

impl GameMode {
    /// Whether the search runs in this mode at all
    pub fn has_ai(self) -> bool {
        self == GameMode::Single
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Single => write!(f, "single"),
            GameMode::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "multi" => Ok(GameMode::Multi),
            other => Err(GameError::Config {
                message: format!("unknown game mode {other:?} (expected single or multi)"),
            }),
        }
    }
}

/// Statistics of the last move the AI played
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct AiStatistics {
    pub last_tier: Option<SearchTier>,
    pub last_score: Option<i32>,
    pub last_nodes: u64,
    pub thinking_time: Duration,
    pub moves_played: u32,
}
