//! Knight move generation
//!
//! Knights jump, so only the destination square matters: it must be on the
//! board and either empty or held by an enemy.

use crate::constants::KNIGHT_OFFSETS;
use crate::position::Position;
use crate::types::*;

pub(super) fn generate_knight_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if !pos.board.is_color(to, color) {
            moves.push(Move::new(from, to, MoveKind::Normal));
        }
    }
}
