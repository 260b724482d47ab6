//! Move selection entry points
//!
//! Each call parses its own [`Board`] from FEN, so calls share no state and can
//! run concurrently on different threads.

use super::params::depth_or_default;
use crate::board::{Board, Position};
use crate::constants::DEFAULT_MAX_TIME_SECS;
use crate::error::EngineResult;
use crate::search::find_best_move;
use crate::types::{Score, SearchBudget, SearchStats};
use serde::Serialize;
use serde_json::Value;

/// Diagnostic view of one search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// UCI move, or `None` when the side to move has no legal moves
    pub best_move: Option<String>,
    /// Root score from the side to move's perspective
    pub score: Option<Score>,
    pub depth_reached: u32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub aborted: bool,
}

impl Analysis {
    fn new(
        best_move: Option<String>,
        score: Option<Score>,
        depth_reached: u32,
        stats: SearchStats,
    ) -> Self {
        Self {
            best_move,
            score,
            depth_reached,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
            aborted: stats.aborted,
        }
    }
}

/// Select a move for the side to move in `fen`
///
/// `depth_limit` is taken as sent by the caller and coerced with
/// [`parse_depth`](super::parse_depth); absent or `null` means 3.
/// `time_budget_secs` defaults to 1.5 seconds.
///
/// # Returns
///
/// The chosen move in UCI notation (`"e2e4"`, `"e7e8q"`), or `None` when the
/// side to move has no legal moves (checkmate or stalemate).
///
/// # Errors
///
/// - [`EngineError::InvalidPosition`](crate::EngineError::InvalidPosition) if
///   `fen` cannot be parsed or is not a legal setup
/// - [`EngineError::InvalidParameter`](crate::EngineError::InvalidParameter)
///   if the depth cannot be coerced to a positive integer or the time budget
///   is not a finite positive number
///
/// # Examples
///
/// ```rust
/// use move_engine::api::select_move;
/// use serde_json::json;
///
/// let fen = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";
/// let best = select_move(fen, Some(&json!("2")), Some(5.0)).unwrap();
/// assert_eq!(best.as_deref(), Some("e4d5"));
/// ```
pub fn select_move(
    fen: &str,
    depth_limit: Option<&Value>,
    time_budget_secs: Option<f64>,
) -> EngineResult<Option<String>> {
    let budget = SearchBudget::new(
        depth_or_default(depth_limit)?,
        time_budget_secs.unwrap_or(DEFAULT_MAX_TIME_SECS),
    )?;
    let mut board = Board::from_fen(fen)?;
    Ok(select_move_in(&mut board, &budget))
}

/// Select a move on an already constructed position
///
/// The position is searched in place and left unchanged.
pub fn select_move_in<P: Position>(position: &mut P, budget: &SearchBudget) -> Option<String> {
    let result = find_best_move(position, budget);
    result.best_move.map(|mv| position.move_identifier(&mv))
}

/// Search `fen` and report the move together with search diagnostics
///
/// # Errors
///
/// Returns [`EngineError::InvalidPosition`](crate::EngineError::InvalidPosition)
/// if `fen` cannot be parsed.
pub fn analyze(fen: &str, budget: &SearchBudget) -> EngineResult<Analysis> {
    let mut board = Board::from_fen(fen)?;
    let result = find_best_move(&mut board, budget);
    let best_move = result.best_move.map(|mv| board.move_identifier(&mv));
    Ok(Analysis::new(
        best_move,
        result.score,
        result.depth_reached,
        result.stats,
    ))
}
