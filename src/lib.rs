//! Arcade chess: the session layer over `chess_engine`
//!
//! The engine crate knows the rules and how to pick a move. This crate adds
//! the game around it: whose turn it is, move history, pawn promotion
//! choice, king-capture and stalemate endings, JSON snapshots and the
//! asynchronous computer opponent.
//!
//! ```rust
//! use arcade_chess::game::{GameState, MoveOutcome};
//!
//! let mut game = GameState::new();
//! let outcome = game
//!     .submit_move("e2".parse().unwrap(), "e4".parse().unwrap(), None)
//!     .unwrap();
//! assert!(matches!(outcome, MoveOutcome::Applied { .. }));
//! ```

pub mod config;
pub mod game;

pub use config::{init_logging, SessionConfig};
pub use game::{GameError, GameMode, GameResult, GameSnapshot, GameState, MoveOutcome, Session};
