//! Board and piece model
//!
//! Provides the 8x8 mailbox grid and the king-position cache:
//! - Square read/write
//! - Piece iteration and counting
//! - King lookup by scan (used when a position is loaded)
//! - Boundary conversions from untrusted coordinates
//!
//! The board itself performs no rule checks; at most one piece per square is
//! guaranteed by construction because a square holds an `Option<Piece>`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::BACK_RANK;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// 8x8 grid of optional pieces, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// Board with no pieces, for setting up test positions
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard initial setup, Black on rows 0-1 and White on rows 6-7
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(piece_type, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(piece_type, Color::White));
        }
        board
    }

    /// Build a board from raw rows (as restored from a snapshot)
    pub const fn from_rows(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Board { squares }
    }

    pub const fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Occupant of `square`; `None` for off-board coordinates
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return whatever occupies `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `square` holds a piece of `color`
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color == color)
    }

    /// All occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Find the king of `color` by scanning the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.piece_type == PieceType::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let glyph = self
                    .piece_at(Square { row, col })
                    .map(Piece::glyph)
                    .unwrap_or('.');
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// King-position cache, one entry per color
///
/// Rebuilt by [`KingSquares::scan`] whenever a position is (re)loaded and kept
/// current incrementally by whoever moves a king. `None` means that color has
/// no king on the board (it was captured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KingSquares {
    squares: [Option<Square>; 2],
}

impl KingSquares {
    pub fn scan(board: &Board) -> Self {
        KingSquares {
            squares: [board.find_king(Color::White), board.find_king(Color::Black)],
        }
    }

    #[inline]
    pub fn get(&self, color: Color) -> Option<Square> {
        self.squares[color.index()]
    }

    #[inline]
    pub fn set(&mut self, color: Color, square: Option<Square>) {
        self.squares[color.index()] = square;
    }
}

/// Validate raw coordinates at the API boundary
pub fn square_checked(row: u8, col: u8) -> ChessEngineResult<Square> {
    Square::new(row, col).ok_or(ChessEngineError::InvalidSquare { row, col })
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| ChessEngineError::InvalidNotation {
            text: s.to_string(),
        })
    }
}
