//! Move history resource
//!
//! Ordered, append-only list of completed plies. Records are never edited or
//! reordered once added; a new game starts from an empty history.

use serde::{Deserialize, Serialize};

use crate::game::components::MoveRecord;

/// Complete move history for the current game
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of half-moves (ply) made
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.moves
    }
}

impl From<Vec<MoveRecord>> for MoveHistory {
    fn from(moves: Vec<MoveRecord>) -> Self {
        MoveHistory { moves }
    }
}
