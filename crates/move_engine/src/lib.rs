//! Move selection for chess positions
//!
//! Given a position and a depth/time budget, the engine returns the move it
//! judges best. The search is an iterative-deepening negamax with alpha-beta
//! pruning, capture/promotion-first move ordering and a material + mobility
//! evaluation. When the wall-clock budget runs out the engine returns the best
//! move of the last fully completed depth instead of failing.
//!
//! ## Module Organization
//!
//! - `types` - Colors, piece kinds, budgets and results
//! - `constants` - Piece values, sentinels and defaults
//! - `board` - The `Position` contract and the shakmaty-backed `Board`
//! - `evaluation` - Static evaluation (material + mobility)
//! - `search` - Move ordering, negamax and the iterative deepening driver
//! - `api` - Public entry points (`select_move`, `analyze`, parameter coercion)
//! - `error` - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use move_engine::api::select_move;
//!
//! let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let best = select_move(fen, None, None).expect("valid input");
//! println!("{:?}", best);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{analyze, select_move, select_move_in, Analysis, Difficulty};
pub use board::{Board, Position};
pub use error::{EngineError, EngineResult};
pub use search::find_best_move;
pub use types::{Color, PieceKind, Score, SearchBudget, SearchResult, SearchStats};
