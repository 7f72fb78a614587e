//! Chess game session module
//!
//! Turns the rules-and-AI engine into a playable game: turn order, history,
//! promotion choice, game end, persistence and the computer opponent.
//!
//! # Module Organization
//!
//! - `components` - Plain data (GamePhase, GameOutcome, MoveRecord)
//! - `resources` - Per-game bookkeeping (MoveHistory, CapturedPieces, CheckmateState)
//! - `rules` - GameState and the move executor state machine
//! - `ai` - Game mode and asynchronous AI turn scheduling
//! - `snapshot` - Serializable snapshot for persistence
//! - `session` - Session tying a game to its config and AI opponent
//! - `error` - GameError

pub mod ai;
pub mod components;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use ai::GameMode;
pub use components::{GameOutcome, GameOverReason, GamePhase, MoveRecord};
pub use error::{GameError, GameResult};
pub use rules::{GameState, MoveOutcome};
pub use session::Session;
pub use snapshot::GameSnapshot;
