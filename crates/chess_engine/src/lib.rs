//! # Chess Engine
//!
//! Rules and AI core for a casual chess mini-game: an 8x8 mailbox board,
//! pseudo-legal move generation with castling, en passant and promotion,
//! an attack/check oracle, and a tiered AI (mate in one, greedy capture,
//! alpha-beta minimax, random) driven by a 1-15 difficulty ladder.
//!
//! The engine knows nothing about turns, history or game-over state; the
//! host owns those and calls into [`move_gen`], [`make_unmake`] and
//! [`search`] with an explicit [`Position`].
//!
//! ```rust
//! use chess_engine::{choose_move, Color, Difficulty, Position};
//! use rand::SeedableRng;
//!
//! let mut pos = Position::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let result = choose_move(&mut pos, Color::Black, Difficulty::default(), &mut rng);
//! assert!(result.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod make_unmake;
pub mod move_gen;
pub mod position;
pub mod search;
pub mod types;

pub use board::{square_checked, Board, KingSquares};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate_material, evaluate_position};
pub use make_unmake::{make_move, unmake_move, MoveGuard, Undo};
pub use move_gen::{
    captured_piece, generate_moves, has_any_move, is_capture, is_checkmate, is_in_check,
    is_square_attacked, is_stalemate, moves_from,
};
pub use position::Position;
pub use search::{choose_move, Difficulty, SearchResult, SearchTier};
pub use types::*;
