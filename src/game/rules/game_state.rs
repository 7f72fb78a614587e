//! Game state aggregate
//!
//! [`GameState`] is the single mutable value a session owns. It is created
//! fresh, restored from a snapshot, or replaced wholesale on reset; only the
//! executor in [`super::executor`] mutates it in between.

use chess_engine::{Board, CastlingRights, Color, Move, Position, Square};

use crate::game::components::{GameOutcome, GamePhase};
use crate::game::resources::{CapturedPieces, CheckmateState, MoveHistory, PendingPromotion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) position: Position,
    pub(crate) current_player: Color,
    pub(crate) phase: GamePhase,
    pub(crate) history: MoveHistory,
    pub(crate) checkmate: CheckmateState,
    pub(crate) captured: CapturedPieces,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Self::from_position(Position::new(), Color::White)
    }

    /// Start from an arbitrary position with `to_move` on move
    pub fn from_position(position: Position, to_move: Color) -> Self {
        GameState {
            position,
            current_player: to_move,
            phase: GamePhase::AwaitingMove(to_move),
            history: MoveHistory::default(),
            checkmate: CheckmateState::default(),
            captured: CapturedPieces::default(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Color whose move completes the current ply
    ///
    /// Stays on the last mover once the game is over.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant
    }

    pub fn checkmate_state(&self) -> CheckmateState {
        self.checkmate
    }

    /// Advisory flag from the last computation for `color`
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.checkmate.get(color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        chess_engine::is_in_check(&self.position, color)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Winner of a finished game; `None` while playing or after a draw
    pub fn winner(&self) -> Option<Color> {
        self.outcome().and_then(|o| o.winner)
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match self.phase {
            GamePhase::PromotionPending(pending) => Some(pending),
            _ => None,
        }
    }

    /// Origin and destination of the last completed ply, for highlighting
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.history.last_move().map(|r| (r.from, r.to))
    }

    /// Moves the piece on `square` may make right now
    ///
    /// Empty unless the game is waiting for a move and the piece belongs to
    /// the side on move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        match (self.phase.awaiting(), self.position.piece_at(square)) {
            (Some(to_move), Some(piece)) if piece.color == to_move => {
                chess_engine::moves_from(&self.position, square)
            }
            _ => Vec::new(),
        }
    }
}
