//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Position;
use crate::types::*;

/// White material minus Black material, in centipawns
pub fn evaluate_material<P: Position>(position: &P) -> Score {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let white = position.piece_count(Color::White, kind) as Score;
            let black = position.piece_count(Color::Black, kind) as Score;
            (white - black) * kind.value()
        })
        .sum()
}
