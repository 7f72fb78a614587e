//! Captured pieces tracking resource
//!
//! Tracks pieces captured by each player and the resulting material balance.
//! Display only; the rules never consult it.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: if White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns. A captured king counts 0.

use chess_engine::constants::capture_value;
use chess_engine::{Color, Piece, PieceType};

/// Pieces taken by each side
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceType>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceType>,
}

impl CapturedPieces {
    /// Record a capture; the capturing side is the opposite of the piece's color
    pub fn add_capture(&mut self, captured: Piece) {
        match captured.color {
            Color::White => self.black_captured.push(captured.piece_type),
            Color::Black => self.white_captured.push(captured.piece_type),
        }
    }

    /// Pieces taken by `color`
    pub fn taken_by(&self, color: Color) -> &[PieceType] {
        match color {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    /// Material difference in pawn units, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let score = |pieces: &[PieceType]| -> i32 { pieces.iter().map(|p| piece_value(*p)).sum() };
        score(&self.white_captured) - score(&self.black_captured)
    }

    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}

fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::King => 0,
        other => capture_value(other),
    }
}
