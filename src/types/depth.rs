//! Search depth type.
//!
//! A `Depth` is a non-negative count of plies. Negative depths are
//! rejected at construction instead of being clamped.

use crate::error::{EngineError, Result};
use std::fmt;

/// Maximum search depth accepted by [`Depth::new`]
pub const MAX_DEPTH: i32 = 64;

/// Search depth (in plies).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(i32);

impl Depth {
    pub const ZERO: Depth = Depth(0);
    pub const ONE: Depth = Depth(1);
    /// Lookahead used when no depth is configured.
    pub const DEFAULT: Depth = Depth(3);

    /// Validate a raw ply count.
    pub fn new(d: i32) -> Result<Self> {
        if d < 0 || d > MAX_DEPTH {
            Err(EngineError::InvalidDepth(d))
        } else {
            Ok(Depth(d))
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Static evaluation happens at depth zero.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 == 0
    }

    /// Depth of a child node, one ply shallower. Saturates at zero.
    #[inline]
    pub const fn child(self) -> Self {
        if self.0 > 0 {
            Depth(self.0 - 1)
        } else {
            Depth(0)
        }
    }
}

impl TryFrom<i32> for Depth {
    type Error = EngineError;

    fn try_from(d: i32) -> Result<Self> {
        Depth::new(d)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
