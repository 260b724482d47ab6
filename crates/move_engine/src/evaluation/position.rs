//! Full position evaluation
//!
//! Evaluates positions using material and mobility.

use super::material::evaluate_material;
use crate::board::Position;
use crate::constants::MOBILITY_WEIGHT;
use crate::types::*;

/// Evaluate a position from White's perspective
///
/// Material balance plus a mobility term. Never fails: when the legal moves
/// cannot be counted the mobility term is zero.
pub fn evaluate<P: Position>(position: &P) -> Score {
    evaluate_material(position) + evaluate_mobility(position)
}

/// Mobility bonus: the side to move's legal-move count, signed by that side
///
/// This is not White's mobility minus Black's; only the side to move is
/// counted, with +2 per move when White moves and -2 per move when Black moves.
pub fn evaluate_mobility<P: Position>(position: &P) -> Score {
    let Some(count) = position.count_legal_moves() else {
        return 0;
    };
    let mobility = MOBILITY_WEIGHT * count as Score;

    match position.turn() {
        Color::White => mobility,
        Color::Black => -mobility,
    }
}
