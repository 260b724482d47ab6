//! # Core Types
//!
//! Plain data shared by the evaluator, the search and the public API:
//!
//! - [`Color`] and [`PieceKind`] describe pieces independently of any board
//!   library, so the search can run over any [`crate::board::Position`].
//! - [`SearchBudget`] is the immutable depth/time configuration of one call.
//! - [`SearchResult`] is what the iterative deepening driver hands back.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use std::time::Duration;

/// Centipawn score
pub type Score = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black. Turns a White-relative score into the
    /// side-to-move-relative score negamax works with.
    pub fn sign(self) -> Score {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns
    pub fn value(self) -> Score {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }
}

/// Depth and time limits for a single search
///
/// Built once per top-level call and read-only afterwards. The driver and the
/// searcher trust these values; validation happens here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBudget {
    max_depth: u32,
    max_time: Duration,
}

impl SearchBudget {
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] when `max_depth` is zero or
    /// `max_time_secs` is not a finite positive number.
    pub fn new(max_depth: u32, max_time_secs: f64) -> EngineResult<Self> {
        if max_depth == 0 {
            return Err(EngineError::InvalidParameter {
                name: "depth",
                reason: "must be a positive integer".to_string(),
            });
        }
        if !max_time_secs.is_finite() || max_time_secs <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "max_time_secs",
                reason: format!("must be a positive number of seconds, got {max_time_secs}"),
            });
        }

        let max_time = Duration::try_from_secs_f64(max_time_secs).map_err(|e| {
            EngineError::InvalidParameter {
                name: "max_time_secs",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            max_depth,
            max_time,
        })
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn max_time(&self) -> Duration {
        self.max_time
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            max_time: Duration::from_secs_f64(DEFAULT_MAX_TIME_SECS),
        }
    }
}

/// Search telemetry, reported in logs only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of searcher entries (interior nodes and leaves)
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
    /// Whether the run stopped because the time budget ran out
    pub aborted: bool,
}

/// Outcome of an iterative deepening run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best root move of the deepest completed depth; `None` when the root
    /// position has no legal moves
    pub best_move: Option<M>,
    /// Deepest depth that ran to completion
    pub depth_reached: u32,
    /// Root score of `best_move` from the side to move's perspective
    pub score: Option<Score>,
    pub stats: SearchStats,
}
