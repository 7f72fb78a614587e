//! Chess game components module
//!
//! Components are pure data structures with no logic beyond small helpers.

pub mod game_state;

#[cfg(test)]
mod tests;

pub use game_state::*;
