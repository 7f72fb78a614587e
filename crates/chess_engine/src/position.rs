//! Position: the board plus the auxiliary state the rules need
//!
//! A [`Position`] is what the move generator, the attack oracle and the search
//! operate on. It deliberately carries no side-to-move: callers pass the color
//! explicitly, because the session layer owns turn order.

use crate::board::{Board, KingSquares};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub castling: CastlingRights,
    /// Square passed over by the last two-square pawn advance, valid for one reply
    pub en_passant: Option<Square>,
    kings: KingSquares,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position with full castling rights
    pub fn new() -> Self {
        Self::from_parts(Board::starting_position(), CastlingRights::default(), None)
    }

    /// Assemble a position from restored parts; the king cache is rebuilt by scan
    pub fn from_parts(board: Board, castling: CastlingRights, en_passant: Option<Square>) -> Self {
        Position {
            kings: KingSquares::scan(&board),
            board,
            castling,
            en_passant,
        }
    }

    /// Position with the given board, no castling rights and no en passant target
    pub fn from_board(board: Board) -> Self {
        Self::from_parts(board, CastlingRights::NONE, None)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings.get(color)
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Option<Square>) {
        self.kings.set(color, square);
    }

    #[inline]
    pub(crate) fn kings(&self) -> KingSquares {
        self.kings
    }

    #[inline]
    pub(crate) fn restore_kings(&mut self, kings: KingSquares) {
        self.kings = kings;
    }

    /// Re-scan the board for kings after out-of-band edits
    pub fn refresh_kings(&mut self) {
        self.kings = KingSquares::scan(&self.board);
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }
}
