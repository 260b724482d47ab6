//! Move making and unmaking for search
//!
//! [`MoveGuard`] applies a move when it is created and undoes it when it is
//! dropped, so a move is reverted on every way out of a search frame: normal
//! return, cutoff `break`, or a `?` carrying a time abort.

use crate::board::Position;
use std::ops::{Deref, DerefMut};

/// A move applied to a borrowed position for the guard's lifetime
pub(crate) struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    /// Make a move on the position (reverted on drop)
    pub(crate) fn apply(position: &'a mut P, mv: &P::Move) -> Self {
        position.apply(mv);
        Self { position }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.position.undo();
    }
}
