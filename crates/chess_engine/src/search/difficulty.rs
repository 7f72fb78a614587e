//! Difficulty ladder
//!
//! A [`Difficulty`] is a validated value in `1..=15`. It folds into four bands
//! that fix the search depth and how many moves are explored per node.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(MIN_DIFFICULTY);
    pub const MAX: Difficulty = Difficulty(MAX_DIFFICULTY);

    /// Validate a raw difficulty value
    pub fn new(value: u8) -> ChessEngineResult<Self> {
        if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
            Ok(Difficulty(value))
        } else {
            Err(ChessEngineError::InvalidDifficulty {
                value,
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            })
        }
    }

    /// Clamp any value onto the ladder
    pub fn clamped(value: u8) -> Self {
        Difficulty(value.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    const fn band(self) -> usize {
        match self.0 {
            0..=1 => 0,
            2..=7 => 1,
            8..=11 => 2,
            _ => 3,
        }
    }

    /// Search depth in plies
    pub const fn depth(self) -> u32 {
        BAND_DEPTHS[self.band()]
    }

    /// Moves explored per node; the rest are never searched
    pub const fn branch_cap(self) -> usize {
        BAND_BRANCH_CAPS[self.band()]
    }

    /// The lowest band skips minimax and plays a random move instead
    pub const fn uses_search(self) -> bool {
        self.band() > 0
    }

    pub fn description(self) -> &'static str {
        match self.band() {
            0 => "Beginner",
            1 => "Casual",
            2 => "Strong",
            _ => "Expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(DEFAULT_DIFFICULTY)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ChessEngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.description())
    }
}
