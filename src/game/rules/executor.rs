//! Move executor
//!
//! Applies a submitted `(from, to, promotion)` to a [`GameState`]:
//!
//! ```text
//! AwaitingMove(c) --submit--> AwaitingMove(!c)
//!                         \-> PromotionPending --choose--> AwaitingMove(!c) | GameOver
//!                         \-> GameOver (king captured or opponent stalemated)
//! ```
//!
//! A submission is validated completely before anything is touched, so every
//! error leaves the state as it was.

use chess_engine::{
    is_checkmate, is_in_check, is_stalemate, make_move, moves_from, Color, Move, Piece,
    PieceType, Square,
};
use tracing::info;

use super::GameState;
use crate::game::components::{GameOutcome, GamePhase, MoveRecord};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{is_promotion_move, PendingPromotion};

/// What an accepted submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Ply completed; `next` is on move and `check` says whether it is in check
    Applied {
        record: MoveRecord,
        next: Color,
        check: bool,
    },
    /// The pawn on `square` waits for [`GameState::choose_promotion`]
    PromotionPending { square: Square },
    GameOver {
        record: MoveRecord,
        outcome: GameOutcome,
    },
}

impl MoveOutcome {
    /// History record of the completed ply, if one was completed
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Applied { record, .. } | MoveOutcome::GameOver { record, .. } => {
                Some(record)
            }
            MoveOutcome::PromotionPending { .. } => None,
        }
    }
}

impl GameState {
    /// Submit a move for the side on move
    ///
    /// `promotion` picks the piece for a pawn reaching its last row and is
    /// ignored for every other move. A promoting move submitted without one
    /// suspends in [`GamePhase::PromotionPending`].
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> GameResult<MoveOutcome> {
        let mover = self.awaiting_mover()?;
        let piece = self
            .position
            .piece_at(from)
            .ok_or(GameError::NoPieceAtSquare { square: from })?;
        if piece.color != mover {
            return Err(GameError::WrongColor {
                expected: mover,
                found: piece.color,
            });
        }
        let mv = moves_from(&self.position, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(GameError::InvalidMove { from, to })?;
        if let Some(piece_type) = promotion {
            if !piece_type.is_promotion_target() {
                return Err(GameError::InvalidPromotion { piece_type });
            }
        }

        if let Some(target) = self.position.piece_at(to) {
            if target.piece_type == PieceType::King && target.color != mover {
                return Ok(self.capture_king(mv, piece, target));
            }
        }

        let mv = if is_promotion_move(piece.piece_type, mover, to.row) {
            match promotion {
                Some(piece_type) => mv.with_promotion(piece_type),
                None => return Ok(self.suspend_for_promotion(mv, piece)),
            }
        } else {
            Move {
                promotion: None,
                ..mv
            }
        };

        let undo = make_move(&mut self.position, mv);
        let record = MoveRecord {
            from,
            to,
            piece_type: piece.piece_type,
            captured: undo.captured,
            promotion: mv.promotion,
        };
        Ok(self.finish_ply(mover, record))
    }

    /// Complete a suspended promotion with `piece_type`
    ///
    /// An invalid choice is rejected and the promotion stays pending.
    pub fn choose_promotion(&mut self, piece_type: PieceType) -> GameResult<MoveOutcome> {
        let GamePhase::PromotionPending(pending) = self.phase else {
            return Err(GameError::NoPromotionPending);
        };
        if !piece_type.is_promotion_target() {
            return Err(GameError::InvalidPromotion { piece_type });
        }

        self.position
            .board
            .set(pending.to, Some(pending.promoted(piece_type)));
        let record = MoveRecord {
            from: pending.from,
            to: pending.to,
            piece_type: PieceType::Pawn,
            captured: pending.captured,
            promotion: Some(piece_type),
        };
        Ok(self.finish_ply(pending.color, record))
    }

    fn awaiting_mover(&self) -> GameResult<Color> {
        match self.phase {
            GamePhase::AwaitingMove(color) => Ok(color),
            GamePhase::PromotionPending(pending) => {
                Err(GameError::PromotionPending { square: pending.to })
            }
            GamePhase::GameOver(_) => Err(GameError::GameOver),
        }
    }

    /// Taking the king ends the game on the spot: no promotion, no castling
    /// bookkeeping and no check detection for this ply
    fn capture_king(&mut self, mv: Move, piece: Piece, king: Piece) -> MoveOutcome {
        self.position.board.take(mv.from);
        self.position.board.set(mv.to, Some(piece));
        self.position.refresh_kings();

        let record = MoveRecord {
            from: mv.from,
            to: mv.to,
            piece_type: piece.piece_type,
            captured: Some(king),
            promotion: None,
        };
        self.history.add_move(record);
        self.captured.add_capture(king);

        let outcome = GameOutcome::king_captured(piece.color);
        self.phase = GamePhase::GameOver(outcome);
        info!("[GAME] {} captures the king with {}", piece.color, record.notation());
        info!("[GAME] ========== GAME OVER: {} ==========", outcome.message());
        MoveOutcome::GameOver { record, outcome }
    }

    /// Apply the board effect now and wait for the human's piece choice
    ///
    /// The pawn stays on its destination until the choice arrives; castling
    /// rights, the en passant target and the king cache are already final.
    fn suspend_for_promotion(&mut self, mv: Move, pawn: Piece) -> MoveOutcome {
        let undo = make_move(&mut self.position, mv);
        self.position.board.set(mv.to, Some(pawn));

        let pending = PendingPromotion {
            from: mv.from,
            to: mv.to,
            color: pawn.color,
            kind: mv.kind,
            captured: undo.captured,
        };
        self.phase = GamePhase::PromotionPending(pending);
        info!("[GAME] {} pawn reached {}, awaiting promotion choice", pawn.color, mv.to);
        MoveOutcome::PromotionPending { square: mv.to }
    }

    /// Record the ply, then settle the opponent's checkmate flag and stalemate
    fn finish_ply(&mut self, mover: Color, record: MoveRecord) -> MoveOutcome {
        self.history.add_move(record);
        if let Some(captured) = record.captured {
            self.captured.add_capture(captured);
        }

        let opponent = mover.opposite();
        self.checkmate
            .set(opponent, is_checkmate(&self.position, opponent));

        if is_stalemate(&self.position, opponent) {
            let outcome = GameOutcome::stalemate();
            self.phase = GamePhase::GameOver(outcome);
            info!("[GAME] {} plays {}", mover, record.notation());
            info!("[GAME] ========== GAME OVER: {} ==========", outcome.message());
            return MoveOutcome::GameOver { record, outcome };
        }

        self.current_player = opponent;
        self.phase = GamePhase::AwaitingMove(opponent);
        let check = is_in_check(&self.position, opponent);
        info!(
            "[GAME] {} plays {}{} | ply {}",
            mover,
            record.notation(),
            if check { "+" } else { "" },
            self.history.len()
        );
        if self.checkmate.get(opponent) {
            info!("[GAME] {} is checkmated (advisory, play continues)", opponent);
        }
        MoveOutcome::Applied {
            record,
            next: opponent,
            check,
        }
    }
}
