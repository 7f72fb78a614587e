//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single forward push onto an empty square
//! - Double push from the starting row, both squares empty
//! - Diagonal captures of enemy pieces
//! - En passant onto the current en passant target
//!
//! A push or capture onto the promotion row is emitted once with
//! `promotion: None`; the executor decides what the pawn becomes.

use crate::position::Position;
use crate::types::*;

pub(super) fn generate_pawn_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if pos.board.is_empty(one) {
            moves.push(Move::new(from, one, MoveKind::Normal));

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if pos.board.is_empty(two) {
                        moves.push(Move::new(from, two, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        if pos.board.is_color(to, color.opposite()) {
            moves.push(Move::new(from, to, MoveKind::Normal));
        } else if pos.en_passant == Some(to) {
            moves.push(Move::new(from, to, MoveKind::EnPassant));
        }
    }
}
