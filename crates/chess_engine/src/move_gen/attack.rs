//! Attack detection and square checking
//!
//! Provides the attack/check oracle used for castling legality and for
//! check, checkmate and stalemate classification.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through the attacking side's
//! pieces and ask whether each one's movement geometry reaches the target.
//! Castling is never considered, so the oracle cannot recurse into itself.
//! Pawns attack only their two forward diagonals: a push never captures, and
//! an empty transit square is still covered by a pawn diagonal.

use super::sliding::ray_reaches;
use crate::board::Board;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Check if `square` is attacked by any piece of `by_color`
///
/// # Examples
///
/// ```rust
/// use chess_engine::{is_square_attacked, Board, Color, Square};
///
/// let board = Board::starting_position();
/// // e3 is covered by White's d2 and f2 pawns
/// let e3 = Square::from_algebraic("e3").unwrap();
/// assert!(is_square_attacked(&board, e3, Color::White));
/// assert!(!is_square_attacked(&board, e3, Color::Black));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.pieces_of(by_color).any(|(from, piece)| {
        from != square
            && match piece.piece_type {
                PieceType::Pawn => can_pawn_attack(from, square, by_color),
                PieceType::Knight => can_knight_attack(from, square),
                PieceType::Bishop => ray_reaches(board, from, square, &BISHOP_DIRS),
                PieceType::Rook => ray_reaches(board, from, square, &ROOK_DIRS),
                PieceType::Queen => {
                    ray_reaches(board, from, square, &ROOK_DIRS)
                        || ray_reaches(board, from, square, &BISHOP_DIRS)
                }
                PieceType::King => can_king_attack(from, square),
            }
    })
}

/// True if `color`'s king is attacked
///
/// A color whose king has been captured is not in check.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    pos.king_square(color)
        .is_some_and(|king| is_square_attacked(&pos.board, king, color.opposite()))
}

#[inline]
fn can_pawn_attack(from: Square, to: Square, color: Color) -> bool {
    to.row as i8 - from.row as i8 == color.pawn_direction()
        && (to.col as i8 - from.col as i8).abs() == 1
}

#[inline]
fn can_knight_attack(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

#[inline]
fn can_king_attack(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    dr <= 1 && dc <= 1
}
