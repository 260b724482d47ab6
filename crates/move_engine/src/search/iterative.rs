//! Iterative deepening search
//!
//! Runs the negamax searcher at depth 1, 2, ... up to the budget's maximum
//! depth and keeps the best root move of the deepest depth that completed.
//! Time management lives here: depth 1 always runs to completion, every later
//! depth is only started while time remains and is dropped if the clock runs
//! out part-way through it.

use super::alphabeta::{negamax, SearchContext};
use super::clock::SearchClock;
use super::make_unmake::MoveGuard;
use super::ordering::order_moves;
use crate::board::Position;
use crate::constants::SCORE_INFINITY;
use crate::error::SearchAbort;
use crate::types::*;
use tracing::{debug, info};

/// Best root move and its score for one fixed depth, `None` if `moves` is empty
fn search_root<P: Position>(
    position: &mut P,
    moves: &[P::Move],
    depth: u32,
    ctx: &mut SearchContext,
) -> Result<Option<(P::Move, Score)>, SearchAbort> {
    let side = position.turn();
    let mut best: Option<(P::Move, Score)> = None;

    for mv in moves {
        let score = {
            let mut child = MoveGuard::apply(position, mv);
            -negamax(
                &mut *child,
                depth - 1,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                side.opposite(),
                ctx,
            )?
        };

        // Strictly greater: the first of equally scored moves is kept
        let improves = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if improves {
            best = Some((mv.clone(), score));
        }
    }

    Ok(best)
}

/// Find the best move for the side to move
///
/// The position is used as scratch space during the search and is returned to
/// its original state before this function returns. `best_move` is `None` only
/// when the side to move has no legal moves.
pub fn find_best_move<P: Position>(position: &mut P, budget: &SearchBudget) -> SearchResult<P::Move> {
    let mut ctx = SearchContext::new(SearchClock::start(budget.max_time()));
    let mut result = SearchResult {
        best_move: None,
        depth_reached: 0,
        score: None,
        stats: SearchStats::default(),
    };

    let root_moves = order_moves(position, position.legal_moves());
    if root_moves.is_empty() {
        info!("Search skipped: no legal moves");
        return result;
    }

    for depth in 1..=budget.max_depth() {
        if depth > 1 && ctx.clock.is_exhausted() {
            ctx.stats.aborted = true;
            break;
        }
        ctx.clock.set_armed(depth > 1);

        match search_root(position, &root_moves, depth, &mut ctx) {
            Ok(Some((mv, score))) => {
                debug!(
                    depth,
                    score,
                    best_move = %position.move_identifier(&mv),
                    nodes = ctx.stats.nodes,
                    elapsed_ms = ctx.clock.elapsed().as_millis() as u64,
                    "Depth completed"
                );
                result.best_move = Some(mv);
                result.score = Some(score);
                result.depth_reached = depth;
            }
            Ok(None) => break,
            Err(SearchAbort::TimeExceeded) => {
                debug!(depth, "Time budget exhausted, discarding partial depth");
                ctx.stats.aborted = true;
                break;
            }
        }
    }

    result.stats = ctx.stats;

    info!(
        best_move = ?result.best_move.as_ref().map(|mv| position.move_identifier(mv)),
        score = ?result.score,
        depth = result.depth_reached,
        nodes = result.stats.nodes,
        cutoffs = result.stats.cutoffs,
        aborted = result.stats.aborted,
        elapsed_ms = ctx.clock.elapsed().as_millis() as u64,
        "Search finished"
    );

    result
}
