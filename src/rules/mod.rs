//! Boundary to the rules engine.
//!
//! The search never touches board internals. Everything it needs from the
//! game goes through [`Rules`]: move enumeration, apply/undo, and square
//! occupancy for the evaluator.
//!
//! [`MoveGuard`] scopes one applied move. It is undone either explicitly
//! through [`MoveGuard::undo`], which reports failures, or when the guard
//! is dropped on an early return or unwind.

mod notation;
mod position;

pub use notation::{format_move, parse_move};
pub use position::Position;

use crate::error::Result;
use crate::types::{Color, Piece};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Operations the search needs from a game implementation.
pub trait Rules {
    /// Opaque move token.
    type Move: Copy + Eq + Debug;

    /// Legal moves in a deterministic order. Empty when the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` in place. `mv` must come from [`Rules::legal_moves`].
    fn apply(&mut self, mv: Self::Move);

    /// Revert the most recent [`Rules::apply`].
    fn undo(&mut self) -> Result<()>;

    /// Occupant of the square at `file`, `rank` (both `0..8`).
    fn piece_at(&self, file: usize, rank: usize) -> Option<(Piece, Color)>;

    fn side_to_move(&self) -> Color;
}

/// One applied move, undone when the guard goes away.
pub struct MoveGuard<'a, P: Rules + ?Sized> {
    pos: &'a mut P,
    armed: bool,
}

impl<'a, P: Rules + ?Sized> MoveGuard<'a, P> {
    /// Apply `mv` to `pos` and hold it until undone.
    pub fn apply(pos: &'a mut P, mv: P::Move) -> Self {
        pos.apply(mv);
        Self { pos, armed: true }
    }

    /// Undo the guarded move and surface any failure.
    pub fn undo(mut self) -> Result<()> {
        self.armed = false;
        self.pos.undo()
    }
}

impl<P: Rules + ?Sized> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: Rules + ?Sized> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: Rules + ?Sized> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.pos.undo() {
                log::error!("move guard failed to restore position: {}", e);
            }
        }
    }
}
