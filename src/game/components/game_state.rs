//! Game state components
//!
//! Plain data describing where a game stands: the executor phase, how a
//! finished game ended, and the per-ply record appended to history.

use chess_engine::{Color, Piece, PieceType, Square};
use serde::{Deserialize, Serialize};

use crate::game::resources::PendingPromotion;

/// Phase of the move executor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for `Color` to submit a move
    AwaitingMove(Color),
    /// A pawn reached the last row and a human must pick its new piece
    PromotionPending(PendingPromotion),
    GameOver(GameOutcome),
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::AwaitingMove(Color::White)
    }
}

impl GamePhase {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }

    /// Color expected to submit the next move, if any
    pub fn awaiting(&self) -> Option<Color> {
        match self {
            GamePhase::AwaitingMove(color) => Some(*color),
            _ => None,
        }
    }
}

/// Why a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    KingCaptured,
    Stalemate,
}

/// Terminal result; `winner` is `None` for a draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<Color>,
    pub reason: GameOverReason,
}

impl GameOutcome {
    pub fn king_captured(winner: Color) -> Self {
        GameOutcome {
            winner: Some(winner),
            reason: GameOverReason::KingCaptured,
        }
    }

    pub fn stalemate() -> Self {
        GameOutcome {
            winner: None,
            reason: GameOverReason::Stalemate,
        }
    }

    /// Banner text for the front-end
    pub fn message(&self) -> String {
        match (self.reason, self.winner) {
            (GameOverReason::KingCaptured, Some(winner)) => {
                format!("{winner} wins by capturing the king")
            }
            (GameOverReason::Stalemate, _) | (_, None) => "Draw by stalemate".to_string(),
        }
    }
}

/// One completed ply, as kept in [`crate::game::resources::MoveHistory`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece_type: PieceType,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceType>,
}

impl MoveRecord {
    /// Coordinate notation, e.g. `e7e8q`
    pub fn notation(&self) -> String {
        match self.promotion {
            Some(p) => format!("{}{}{}", self.from, self.to, p.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}
