//! Move ordering for alpha-beta pruning
//!
//! Captures are tried first. The sort is stable, so within each group the
//! generator's order is kept; together with the per-node branching cap this
//! decides exactly which moves the search explores.

use crate::move_gen::{generate_moves, is_capture};
use crate::position::Position;
use crate::types::*;

/// Order moves in place: captures first, otherwise generator order
pub(crate) fn order_moves(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|mv| !is_capture(pos, mv));
}

/// Generate, order and cap the moves explored at one node
pub(crate) fn ordered_moves(pos: &Position, color: Color, cap: usize) -> Vec<Move> {
    let mut moves = generate_moves(pos, color);
    order_moves(pos, &mut moves);
    moves.truncate(cap);
    moves
}
