//! # Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Centipawn Valuation
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000
//!
//! The king is worth more than every other piece combined, so losing it always
//! dominates the material balance.
//!
//! ## Score Sentinels
//!
//! `SCORE_INFINITY` stands in for an unbounded score in alpha-beta windows.
//! The largest reachable evaluation is bounded by one side's full material
//! (20000 + 9·900 + 2·500 + 2·330 + 2·320 = 30,400 with every pawn promoted)
//! plus a mobility term of at most 2·218, so ±999,999 is never reached by a
//! real evaluation and negating it stays far inside `i32`.

use crate::types::Score;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 20_000;

/// Bonus added to a promotion's ordering key
pub const PROMOTION_BONUS: Score = 800;

/// Weight of one legal move in the mobility term
pub const MOBILITY_WEIGHT: Score = 2;

/// Upper bound for alpha-beta windows; `-SCORE_INFINITY` is the "no move yet" score
pub const SCORE_INFINITY: Score = 999_999;

/// Depth used when the caller does not supply one
pub const DEFAULT_DEPTH: u32 = 3;

/// Seconds of thinking time used when the caller does not supply a budget
pub const DEFAULT_MAX_TIME_SECS: f64 = 1.5;
