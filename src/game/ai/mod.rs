//! Chess AI opponent system
//!
//! The search itself lives in the engine crate and is synchronous. This
//! module decides when it runs and hands its result back to the session:
//!
//! 1. After a ply that leaves the AI on move, the session spawns a task with
//!    a copy of the position
//! 2. The task sleeps the UI delay, then runs `chess_engine::choose_move`
//! 3. The host polls or awaits the task
//! 4. The session submits the chosen move through the normal executor
//!
//! This ensures AI moves follow the same validation rules as human moves.

pub mod resource;
pub mod systems;

pub use resource::{AiStatistics, GameMode};
pub use systems::{AiMove, AiPoll, AiRequest, AiScheduler};
