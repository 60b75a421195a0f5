//! Core types for the alignment driver.
//!
//! This module defines the plain-data types shared across the crate:
//! subproblem rectangles, driver options, the metric direction, and the
//! sweep direction handed to score-row callbacks.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A rectangle on the alignment grid.
///
/// Denotes the substring `s1[x..x + m]` aligned against `s2[y..y + n]`.
/// `x` and `y` are byte offsets into the root strings; `m` and `n` are byte
/// lengths. Under UTF-8 mode all four boundaries land on code-point
/// boundaries, so both ranges slice to a whole number of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subproblem {
    /// Byte offset of the rectangle on the `s1` axis.
    pub x: usize,
    /// Byte length on the `s1` axis.
    pub m: usize,
    /// Byte offset of the rectangle on the `s2` axis.
    pub y: usize,
    /// Byte length on the `s2` axis.
    pub n: usize,
}

impl Subproblem {
    /// Create a subproblem rectangle.
    pub fn new(x: usize, m: usize, y: usize, n: usize) -> Self {
        Self { x, m, y, n }
    }

    /// Byte range covered on the `s1` axis.
    pub fn s1_range(&self) -> Range<usize> {
        self.x..self.x + self.m
    }

    /// Byte range covered on the `s2` axis.
    pub fn s2_range(&self) -> Range<usize> {
        self.y..self.y + self.n
    }

    /// True when either side has zero length (a pure insertion or deletion
    /// run).
    pub fn has_empty_side(&self) -> bool {
        self.m == 0 || self.n == 0
    }
}

/// Driver options.
///
/// Plain data; the symbol equalities used by transposition checks are
/// configured separately via [`crate::Equality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Interpret both strings as UTF-8 at code-point granularity.
    pub utf8: bool,
    /// Enable 2×2-atomic and border-transposition handling.
    pub allow_transpose: bool,
    /// Clear the scratch rows before each subproblem's score sweeps.
    /// When disabled, callbacks are trusted to overwrite every cell they
    /// report as used.
    pub zero_scratch: bool,
}

impl Options {
    /// Create options with default settings: byte mode, no transposition
    /// handling, scratch cleared per step.
    pub fn new() -> Self {
        Self {
            utf8: false,
            allow_transpose: false,
            zero_scratch: true,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the score-row callback's values are maximized or minimized.
///
/// Selects the comparison operator and the initial accumulator of the
/// midpoint scan: similarity starts from zero and takes `>`, distance
/// starts from the element type's maximum and takes `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Higher scores are better (LCS, Needleman-Wunsch similarity).
    Similarity,
    /// Lower scores are better (Levenshtein and other edit distances).
    Distance,
}

impl Metric {
    /// Initial accumulator for the midpoint scan.
    pub fn initial<T: crate::Score>(self) -> T {
        match self {
            Metric::Similarity => T::ZERO,
            Metric::Distance => T::MAX,
        }
    }

    /// True when `candidate` strictly improves on `best` under this metric.
    pub fn improves<T: crate::Score>(self, candidate: T, best: T) -> bool {
        match self {
            Metric::Similarity => candidate > best,
            Metric::Distance => candidate < best,
        }
    }
}

/// Sweep direction handed to a score-row callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Run the recurrence from the left ends of both substrings.
    Forward,
    /// Run the recurrence from the right ends of both substrings.
    Reverse,
}

impl Direction {
    /// True for the reverse sweep.
    pub fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}
