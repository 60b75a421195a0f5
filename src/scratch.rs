//! Reusable forward/reverse score rows.
//!
//! Two equally sized rows allocated once and reused across every
//! subproblem, which is what keeps the decomposition's auxiliary memory
//! linear in the shorter input instead of quadratic.

use crate::score::Score;
use crate::utf8;

/// A pair of equally sized score rows, one per sweep direction.
///
/// The driver requires at least `n + 1` cells per row, where `n` is the
/// length of the shorter input in the active unit. Any surplus capacity is
/// handed to the score-row callback untouched, so two-row DP callbacks can
/// keep their previous row in the upper half; [`Scratch::for_input`] sizes
/// rows at `2 * (n + 1)` for exactly that reason.
#[derive(Debug, Clone)]
pub struct Scratch<T> {
    fwd: Vec<T>,
    rev: Vec<T>,
}

impl<T: Score> Scratch<T> {
    /// Allocate two zeroed rows of `cells` elements each.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            fwd: vec![T::ZERO; cells],
            rev: vec![T::ZERO; cells],
        }
    }

    /// Allocate rows sized for the given input pair: `2 * (n + 1)` cells
    /// where `n` is the shorter side's length in bytes, or in code points
    /// when `utf8` is set.
    pub fn for_input(s1: &[u8], s2: &[u8], utf8: bool) -> Self {
        let (a, b) = if utf8 {
            (utf8::count(s1), utf8::count(s2))
        } else {
            (s1.len(), s2.len())
        };
        let n = a.min(b);
        Self::with_capacity(2 * (n + 1))
    }

    /// Cells per row.
    pub fn capacity(&self) -> usize {
        self.fwd.len()
    }

    /// Reset every cell of both rows to zero.
    pub fn zero(&mut self) {
        self.fwd.fill(T::ZERO);
        self.rev.fill(T::ZERO);
    }

    /// Mutable access to both rows at once.
    pub(crate) fn rows_mut(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.fwd, &mut self.rev)
    }
}
