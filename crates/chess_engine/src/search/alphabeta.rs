//! Minimax search with alpha-beta pruning
//!
//! The AI side maximizes, its opponent minimizes, and every leaf is scored
//! from the AI's perspective. Each simulated ply goes through a [`MoveGuard`]
//! so the position is restored on every exit path, including cutoffs.
//!
//! A node that leaves the opponent of its mover checkmated is scored
//! `±CHECKMATE_SCORE` at once without descending further. A node whose mover
//! has no moves scores 0 (stalemate) or `∓CHECKMATE_SCORE` when in check.

use super::ordering::ordered_moves;
use crate::constants::*;
use crate::evaluation::evaluate_position;
use crate::make_unmake::MoveGuard;
use crate::move_gen::{is_checkmate, is_in_check};
use crate::position::Position;
use crate::types::*;

/// Fixed parameters of one search
pub(crate) struct SearchContext {
    pub ai_color: Color,
    pub branch_cap: usize,
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchContext {
    pub fn new(ai_color: Color, branch_cap: usize) -> Self {
        SearchContext {
            ai_color,
            branch_cap,
            nodes: 0,
            cutoffs: 0,
        }
    }
}

/// Best root move for the AI and its score, or `None` when it has no moves
pub(crate) fn search_root(
    pos: &mut Position,
    depth: u32,
    ctx: &mut SearchContext,
) -> Option<(Move, i32)> {
    let ai = ctx.ai_color;
    let moves = ordered_moves(pos, ai, ctx.branch_cap);

    let mut alpha = -AB_INF;
    let beta = AB_INF;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(pos, mv);
            if is_checkmate(&child, ai.opposite()) {
                CHECKMATE_SCORE
            } else {
                alphabeta(&mut child, depth.saturating_sub(1), alpha, beta, false, ctx)
            }
        };

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    best
}

pub(crate) fn alphabeta(
    pos: &mut Position,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return evaluate_position(pos, ctx.ai_color);
    }

    let mover = if maximizing {
        ctx.ai_color
    } else {
        ctx.ai_color.opposite()
    };
    let moves = ordered_moves(pos, mover, ctx.branch_cap);

    if moves.is_empty() {
        if !is_in_check(pos, mover) {
            return 0;
        }
        return if maximizing {
            -CHECKMATE_SCORE
        } else {
            CHECKMATE_SCORE
        };
    }

    if maximizing {
        let mut best = -AB_INF;
        for mv in moves {
            let mut child = MoveGuard::new(pos, mv);
            let score = if is_checkmate(&child, mover.opposite()) {
                CHECKMATE_SCORE
            } else {
                alphabeta(&mut child, depth - 1, alpha, beta, false, ctx)
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                ctx.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = AB_INF;
        for mv in moves {
            let mut child = MoveGuard::new(pos, mv);
            let score = if is_checkmate(&child, mover.opposite()) {
                -CHECKMATE_SCORE
            } else {
                alphabeta(&mut child, depth - 1, alpha, beta, true, ctx)
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                ctx.cutoffs += 1;
                break;
            }
        }
        best
    }
}
