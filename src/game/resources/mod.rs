//! Chess game resources - per-game state owned by [`crate::game::GameState`]
//!
//! # Resource Categories
//!
//! ## Game History
//! - [`MoveHistory`] - Append-only record of completed plies
//! - [`CapturedPieces`] - Material taken by each side, for display
//!
//! ## Rule Bookkeeping
//! - [`CheckmateState`] - Advisory per-color checkmate flags
//! - [`PendingPromotion`] - A pawn waiting for its promotion choice
//!
//! ## Campaign
//! - [`RoundLadder`] - Round reached in single-player play

pub mod captured;
pub mod checkmate;
pub mod history;
pub mod promotion;
pub mod round;


pub use captured::*;
pub use checkmate::*;
pub use history::*;
pub use promotion::*;
pub use round::*;
