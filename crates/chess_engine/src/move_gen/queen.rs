//! Queen move generation: union of rook and bishop rays

use super::sliding::generate_sliding_moves;
use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::position::Position;
use crate::types::*;

pub(super) fn generate_queen_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(pos, from, color, &ROOK_DIRS, moves);
    generate_sliding_moves(pos, from, color, &BISHOP_DIRS, moves);
}
