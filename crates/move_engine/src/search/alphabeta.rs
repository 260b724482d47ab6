//! Alpha-beta search with negamax
//!
//! A single recursive function handles both sides: scores are always from the
//! point of view of the side to move at the node, and the window is negated
//! and swapped at every ply.

use super::clock::SearchClock;
use super::make_unmake::MoveGuard;
use super::ordering::order_moves;
use crate::board::Position;
use crate::constants::SCORE_INFINITY;
use crate::error::SearchAbort;
use crate::evaluation::evaluate;
use crate::types::*;

/// State shared by every frame of one search
pub(crate) struct SearchContext {
    pub(crate) clock: SearchClock,
    pub(crate) stats: SearchStats,
}

impl SearchContext {
    pub(crate) fn new(clock: SearchClock) -> Self {
        Self {
            clock,
            stats: SearchStats::default(),
        }
    }
}

/// Fixed-depth negamax with alpha-beta pruning
///
/// `color` is the side to move at this node; leaves are scored as
/// `color.sign() * evaluate(position)`.
///
/// # Errors
///
/// Returns [`SearchAbort::TimeExceeded`] when the clock is exhausted on entry
/// to any frame. Every move applied on the way down has been undone by the
/// time the error reaches the caller.
pub(crate) fn negamax<P: Position>(
    position: &mut P,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    color: Color,
    ctx: &mut SearchContext,
) -> Result<Score, SearchAbort> {
    ctx.clock.check()?;
    ctx.stats.nodes += 1;

    if depth == 0 || position.is_game_over() {
        return Ok(color.sign() * evaluate(position));
    }

    let moves = order_moves(position, position.legal_moves());
    let mut best = -SCORE_INFINITY;

    for mv in &moves {
        let score = {
            let mut child = MoveGuard::apply(position, mv);
            -negamax(&mut *child, depth - 1, -beta, -alpha, color.opposite(), ctx)?
        };

        best = best.max(score);
        alpha = alpha.max(score);

        // Beta cutoff
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}
