//! Error types for chess engine
//!
//! Rules queries never fail for in-range input; these errors cover the
//! boundary conversions (coordinates, difficulty) that callers feed in.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square coordinates outside the 8x8 board
    #[error("Invalid square: ({row}, {col}) (both must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// Square text that is not algebraic notation
    #[error("Invalid square notation: {text:?}")]
    InvalidNotation { text: String },

    /// Difficulty outside the supported ladder
    #[error("Invalid difficulty: {value} (must be {min}-{max})")]
    InvalidDifficulty { value: u8, min: u8, max: u8 },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
