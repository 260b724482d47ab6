//! Alpha-beta search with iterative deepening
//!
//! This module implements the move search using:
//! - Negamax variant of alpha-beta pruning
//! - Iterative deepening for time management
//! - Move ordering for better pruning
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax search with alpha-beta pruning
//! - `clock` - Wall-clock budget shared by the driver and the searcher
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Scoped move application
//! - `iterative` - Iterative deepening driver

mod alphabeta;
mod clock;
mod iterative;
mod make_unmake;
mod ordering;

pub use iterative::find_best_move;
pub use ordering::{move_key, order_moves};
