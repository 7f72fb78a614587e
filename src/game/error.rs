//! Error types for game module
//!
//! Covers move submission, promotion choice, snapshot handling and AI
//! scheduling. Every rejected submission leaves the game state untouched.

use chess_engine::{ChessEngineError, Color, PieceType, Square};

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Destination is not among the moves generated for the origin piece
    #[error("Invalid move: {from} -> {to} is not available")]
    InvalidMove { from: Square, to: Square },

    /// Origin piece belongs to the side not on move
    #[error("Wrong color: {found} piece moved on {expected}'s turn")]
    WrongColor { expected: Color, found: Color },

    /// Origin square is empty
    #[error("No piece at {square}")]
    NoPieceAtSquare { square: Square },

    /// Human submission while the AI is to move in single-player mode
    #[error("It is the computer's turn ({color})")]
    NotYourTurn { color: Color },

    /// The game has already ended
    #[error("Game is over")]
    GameOver,

    /// The next round needs the current game to be finished
    #[error("Game is still in progress")]
    GameInProgress,

    /// A pawn on `square` is waiting for its promotion choice
    #[error("Promotion pending on {square}")]
    PromotionPending { square: Square },

    /// A promotion choice arrived while nothing was pending
    #[error("No promotion is pending")]
    NoPromotionPending,

    /// Pawns may only become a queen, rook, bishop or knight
    #[error("Cannot promote to {piece_type:?}")]
    InvalidPromotion { piece_type: PieceType },

    /// Snapshot could not be taken, encoded or restored
    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// AI turn scheduling needs a running tokio runtime
    #[error("No async runtime available to schedule the AI turn")]
    NoRuntime,

    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
