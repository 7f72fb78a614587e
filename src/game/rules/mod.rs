//! Chess rules module - the game state and its move executor
//!
//! Everything here is synchronous and free of I/O. The engine crate answers
//! "which moves exist" and "what does this move do to the board"; this
//! module owns whose turn it is, what has been played and when the game is
//! over.
//!
//! # Module Structure
//!
//! - `game_state` - [`GameState`] and its read-only queries
//! - `executor` - the move executor state machine ([`GameState::submit_move`],
//!   [`GameState::choose_promotion`])

pub mod executor;
pub mod game_state;


pub use executor::MoveOutcome;
pub use game_state::GameState;
