//! # Chess Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used by the engine: two piece
//! valuation scales, movement direction tables and the difficulty ladder that
//! drives the search.
//!
//! ## Two Valuation Scales
//!
//! The engine uses two different scales on purpose:
//!
//! - **Capture values** (`pawn=1 … queen=9, king=100`) rank capture targets for
//!   the greedy tier of move selection. Only the ordering matters there.
//! - **Material values** in centipawns (`pawn=100 … king=20000`) feed the static
//!   evaluation. The king is worth more than everything else combined so the
//!   search never trades it away.
//!
//! ## Direction Tables
//!
//! Directions are `(row delta, col delta)` pairs. Because row 0 is the black
//! back rank, "up the board" for White is a negative row delta.
//!
//! ## Difficulty Ladder
//!
//! Difficulty runs from 1 to 15 and is folded into four bands. Each band fixes
//! a search depth and a per-node branching cap:
//!
//! | Difficulty | Depth | Moves searched per node |
//! |------------|-------|-------------------------|
//! | 1          | 1     | 8 (random tier instead) |
//! | 2-7        | 2     | 10                      |
//! | 8-11       | 3     | 15                      |
//! | 12-15      | 4     | 30                      |

use crate::types::PieceType;

// ---------------------------------------------------------------------------
// Piece valuations
// ---------------------------------------------------------------------------

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20000;

/// Centipawn material value used by the static evaluation
#[inline]
pub const fn material_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}

/// Coarse value of a capture target, used to rank greedy captures
#[inline]
pub const fn capture_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 100,
    }
}

// ---------------------------------------------------------------------------
// Search scores
// ---------------------------------------------------------------------------

/// Score of a checkmate found inside the search tree
pub const CHECKMATE_SCORE: i32 = 10_000;

/// Flat adjustment applied when a king is in check at a leaf
pub const CHECK_PENALTY: i32 = 50;

/// Alpha-beta window bound, wider than any reachable evaluation
pub const AB_INF: i32 = 1_000_000;

// ---------------------------------------------------------------------------
// Direction tables (row delta, col delta)
// ---------------------------------------------------------------------------

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

// ---------------------------------------------------------------------------
// Board geometry
// ---------------------------------------------------------------------------

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Column the king lands on when castling kingside / queenside
pub const KINGSIDE_KING_TARGET: u8 = 6;
pub const QUEENSIDE_KING_TARGET: u8 = 2;

/// Column the rook lands on when castling kingside / queenside
pub const KINGSIDE_ROOK_TARGET: u8 = 5;
pub const QUEENSIDE_ROOK_TARGET: u8 = 3;

/// Back-rank layout from column 0 to 7
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

// ---------------------------------------------------------------------------
// Difficulty ladder
// ---------------------------------------------------------------------------

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 15;
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Search depth (plies) per difficulty band
pub const BAND_DEPTHS: [u32; 4] = [1, 2, 3, 4];

/// Moves explored per node per difficulty band
pub const BAND_BRANCH_CAPS: [usize; 4] = [8, 10, 15, 30];
