//! Advisory checkmate flags
//!
//! Moves are never filtered for self-check, so a side that is "checkmated"
//! may simply be left with moves that all keep its king attacked, or with
//! none at all. The flag is recorded for display and never ends the game;
//! only stalemate and king capture do.

use chess_engine::Color;
use serde::{Deserialize, Serialize};

/// Per-color result of the last checkmate computation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckmateState {
    pub white: bool,
    pub black: bool,
}

impl CheckmateState {
    pub fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn set(&mut self, color: Color, checkmated: bool) {
        match color {
            Color::White => self.white = checkmated,
            Color::Black => self.black = checkmated,
        }
    }
}
