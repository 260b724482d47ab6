//! Synthetic positions for unit tests
//!
//! [`TreePosition`] is a uniform game tree: every node has `branching` moves
//! numbered `0..branching`, the game ends at `height` plies and the material
//! term of a node is `100 * leaf(path)` (reported as White pawns). Mobility is
//! unknown unless enabled, so evaluations are exact multiples of 100.

use crate::board::Position;
use crate::types::{Color, PieceKind};
use std::time::Duration;

pub(crate) struct TreePosition {
    path: Vec<u8>,
    branching: u8,
    height: usize,
    leaf: fn(&[u8]) -> u32,
    mobility: bool,
    apply_delay: Duration,
    applied: usize,
    undone: usize,
}

impl TreePosition {
    pub(crate) fn new(branching: u8, height: usize, leaf: fn(&[u8]) -> u32) -> Self {
        Self {
            path: Vec::new(),
            branching,
            height,
            leaf,
            mobility: false,
            apply_delay: Duration::ZERO,
            applied: 0,
            undone: 0,
        }
    }

    pub(crate) fn with_mobility(mut self) -> Self {
        self.mobility = true;
        self
    }

    /// Sleep inside every `apply`, to make searches measurably slow
    pub(crate) fn with_apply_delay(mut self, delay: Duration) -> Self {
        self.apply_delay = delay;
        self
    }

    pub(crate) fn path(&self) -> &[u8] {
        &self.path
    }

    pub(crate) fn applied(&self) -> usize {
        self.applied
    }

    pub(crate) fn undone(&self) -> usize {
        self.undone
    }
}

impl Position for TreePosition {
    type Move = u8;

    fn turn(&self) -> Color {
        if self.path.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn is_game_over(&self) -> bool {
        self.path.len() >= self.height
    }

    fn legal_moves(&self) -> Vec<u8> {
        if self.is_game_over() {
            Vec::new()
        } else {
            (0..self.branching).collect()
        }
    }

    fn count_legal_moves(&self) -> Option<usize> {
        self.mobility.then(|| self.legal_moves().len())
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => (self.leaf)(&self.path),
            _ => 0,
        }
    }

    fn is_capture(&self, _mv: &u8) -> bool {
        false
    }

    fn piece_at_destination(&self, _mv: &u8) -> Option<PieceKind> {
        None
    }

    fn is_promotion(&self, _mv: &u8) -> bool {
        false
    }

    fn apply(&mut self, mv: &u8) {
        self.path.push(*mv);
        self.applied += 1;
        if !self.apply_delay.is_zero() {
            std::thread::sleep(self.apply_delay);
        }
    }

    fn undo(&mut self) {
        self.path.pop();
        self.undone += 1;
    }

    fn move_identifier(&self, mv: &u8) -> String {
        format!("m{mv}")
    }
}
