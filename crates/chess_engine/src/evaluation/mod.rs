//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - A flat penalty for the side whose king is in check
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation (material + positional + check)

mod material;
mod position;
mod pst;

pub use material::evaluate_material;
pub use position::evaluate_position;
