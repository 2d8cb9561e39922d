//! Score type for search.
//!
//! Scores are centipawns from White's point of view: positive favours
//! White, negative favours Black.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Bound used for the root window and the root's starting best score.
pub const SCORE_ROOT_BOUND: i32 = 99_999;

/// Starting best score of an inner node. Returned unchanged when a node
/// below the root has no legal moves.
pub const SCORE_NODE_SENTINEL: i32 = 9_999;

/// A signed evaluation in centipawns, White's perspective.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const ROOT_BOUND: Score = Score(SCORE_ROOT_BOUND);
    pub const NODE_SENTINEL: Score = Score(SCORE_NODE_SENTINEL);

    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The score a node starts from before any child has been seen: the
    /// worst value for the side choosing at that node.
    #[inline]
    pub const fn worst_for(maximizing: bool) -> Self {
        if maximizing {
            Score(-SCORE_NODE_SENTINEL)
        } else {
            Score(SCORE_NODE_SENTINEL)
        }
    }

    /// Root counterpart of [`Score::worst_for`].
    #[inline]
    pub const fn root_worst_for(maximizing: bool) -> Self {
        if maximizing {
            Score(-SCORE_ROOT_BOUND)
        } else {
            Score(SCORE_ROOT_BOUND)
        }
    }

    /// True if `self` strictly improves on `other` for the given side.
    #[inline]
    pub fn improves_on(self, other: Score, maximizing: bool) -> bool {
        if maximizing {
            self > other
        } else {
            self < other
        }
    }
}

impl Add for Score {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Score(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Score(self.0 - rhs.0)
    }
}

impl AddAssign<i32> for Score {
    #[inline]
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl SubAssign<i32> for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cp {}", self.0)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_scores() {
        assert_eq!(Score::worst_for(true), Score::cp(-9999));
        assert_eq!(Score::worst_for(false), Score::cp(9999));
        assert_eq!(Score::root_worst_for(true), -Score::ROOT_BOUND);
        assert_eq!(Score::root_worst_for(false), Score::ROOT_BOUND);
    }

    #[test]
    fn test_strict_improvement() {
        assert!(Score::cp(10).improves_on(Score::cp(5), true));
        assert!(!Score::cp(5).improves_on(Score::cp(5), true));
        assert!(Score::cp(-10).improves_on(Score::cp(5), false));
        assert!(!Score::cp(5).improves_on(Score::cp(5), false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::cp(-35).to_string(), "cp -35");
        assert_eq!(format!("{:?}", Score::cp(12)), "Score(12)");
    }
}
