//! Pending pawn promotion
//!
//! When a human's pawn reaches the last row without a promotion piece, the
//! executor applies the move, leaves the pawn on its destination and parks
//! the ply here until the choice arrives. Everything except the final piece
//! and the history record has already been applied.

use chess_engine::{Color, MoveKind, Piece, PieceType, Square};

/// A ply suspended on the promotion choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    /// Square the pawn landed on
    pub to: Square,
    pub color: Color,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
}

impl PendingPromotion {
    /// The promoted piece for `piece_type`
    pub fn promoted(&self, piece_type: PieceType) -> Piece {
        Piece::new(piece_type, self.color)
    }
}

/// Check if a pawn move to `target_row` promotes
pub fn is_promotion_move(piece_type: PieceType, color: Color, target_row: u8) -> bool {
    piece_type == PieceType::Pawn && target_row == color.promotion_row()
}
