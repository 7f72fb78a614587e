//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! This module defines the value types every other part of the engine speaks in:
//! colors, piece types, pieces, squares and moves. All of them are small `Copy`
//! values; pieces are replaced rather than mutated (a promotion swaps the pawn
//! for a new `Piece`).
//!
//! ## Coordinates
//!
//! Squares are `(row, col)` pairs with both components in `0..8`. Row 0 is the
//! black back rank (rank 8), row 7 is the white back rank (rank 1), column 0 is
//! the a-file. White pawns therefore advance toward row 0 and Black pawns toward
//! row 7:
//!
//! ```text
//!        col 0 1 2 3 4 5 6 7
//! row 0      r n b q k b n r   <- Black home row
//! row 1      p p p p p p p p   <- Black pawn start
//! ...
//! row 6      P P P P P P P P   <- White pawn start
//! row 7      R N B Q K B N R   <- White home row
//! ```
//!
//! ## Moves
//!
//! A [`Move`] carries its [`MoveKind`] so the executor and the search never have
//! to rediscover whether a king step was a castle or a diagonal pawn step an
//! en passant capture. Promotion is carried separately because a human may
//! choose it after the move has been submitted.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side to move / piece owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index into per-color arrays (`White = 0`, `Black = 1`)
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding the king and rooks at the start of the game
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row from which a pawn may advance two squares
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row, where pawns promote
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Kind of chess piece (color is carried by [`Piece`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Pieces a pawn may promote to
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Lowercase FEN-style letter (`k q r b n p`)
    pub const fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        }
    }

    /// Parse a promotion letter, case-insensitive
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'r' => Some(PieceType::Rook),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Board glyph: uppercase for White, lowercase for Black
    pub fn glyph(self) -> char {
        let c = self.piece_type.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A board coordinate, `row` and `col` both in `0..8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Checked constructor; out-of-range coordinates yield `None`
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// False for coordinates built by hand outside `0..8`
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Unchecked constructor for in-crate tables and tests
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Square reached by stepping `(dr, dc)`, or `None` when it leaves the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }

    /// Parse algebraic notation (`"e2"` is row 6, col 4)
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = 7 - (rank as u8 - b'1');
        Square::new(row, col)
    }

    /// Algebraic name; off-board coordinates print as `(row, col)`
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return format!("({}, {})", self.row, self.col);
        }
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Special-move classification attached to every generated move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

impl MoveKind {
    #[inline]
    pub fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A move as produced by the generator and consumed by the executor/search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Piece a pawn becomes on the promotion row; `None` defers the choice
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}

/// Castling availability for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideCastling {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideCastling {
    pub const ALL: SideCastling = SideCastling {
        kingside: true,
        queenside: true,
    };
    pub const NONE: SideCastling = SideCastling {
        kingside: false,
        queenside: false,
    };
}

/// Castling rights for both colors
///
/// Rights only ever go from `true` to `false`; there is deliberately no
/// setter that grants a right back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    pub white: SideCastling,
    pub black: SideCastling,
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights {
            white: SideCastling::ALL,
            black: SideCastling::ALL,
        }
    }
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white: SideCastling::NONE,
        black: SideCastling::NONE,
    };

    #[inline]
    pub fn side(&self, color: Color) -> SideCastling {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn side_mut(&mut self, color: Color) -> &mut SideCastling {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Clear both flags of `color` (king moved or castled)
    pub fn revoke_all(&mut self, color: Color) {
        *self.side_mut(color) = SideCastling::NONE;
    }

    /// Clear the flag tied to a rook home square, if `square` is one
    pub fn revoke_rook_square(&mut self, color: Color, square: Square) {
        if square.row != color.home_row() {
            return;
        }
        let side = self.side_mut(color);
        match square.col {
            0 => side.queenside = false,
            7 => side.kingside = false,
            _ => {}
        }
    }
}
