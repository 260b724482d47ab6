//! Public API for the move engine
//!
//! Entry points take FEN text and loosely-typed parameters, validate them, and
//! hand a typed [`SearchBudget`](crate::SearchBudget) to the search.
//!
//! ## Module Organization
//!
//! - `params` - Depth coercion and difficulty levels
//! - `select` - Move selection (`select_move`, `select_move_in`, `analyze`)

mod params;
mod select;

pub use params::{depth_or_default, parse_depth, Difficulty};
pub use select::{analyze, select_move, select_move_in, Analysis};
