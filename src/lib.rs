//! Hirschberg - Pairwise String Alignment in Linear Auxiliary Memory
//!
//! This library provides a divide-and-conquer driver for pairwise string
//! alignment following the classical Hirschberg decomposition. Given two
//! strings and a caller-supplied *score row* callback (the forward sweep of
//! any two-row DP alignment recurrence - LCS, edit distance,
//! Needleman-Wunsch, Smith-Waterman variants), it repeatedly splits the
//! alignment problem along the shorter axis until each remaining subproblem
//! is small enough for the caller to emit an alignment fragment directly.
//!
//! # Features
//!
//! - **Linear memory**: two reusable score rows replace the O(m·n) DP table
//! - **Pluggable scoring**: any recurrence expressible as a row oracle, over
//!   six numeric element types, maximizing or minimizing
//! - **Byte and UTF-8 modes**: identical decomposition semantics at byte or
//!   code-point granularity, with all boundaries kept on code points
//! - **Transposition-aware**: optional handling that never cuts a
//!   Damerau-style adjacent swap in half
//! - **Lazy iteration**: atoms are produced one pull at a time, in strict
//!   left-to-right order of the ranges they cover
//!
//! # Quick Start
//!
//! ```rust
//! use hirschberg::{subproblems, Direction, Metric, Options};
//! use hirschberg::ScoreRowFn;
//!
//! /// Final LCS-length DP row for `a` against every prefix (or suffix,
//! /// when reversed) of `b`. Uses the upper half of `out` for the
//! /// previous row.
//! fn lcs_row(a: &[u8], b: &[u8], dir: Direction, out: &mut [u64]) -> usize {
//!     let used = b.len() + 1;
//!     let (cur, prev) = out.split_at_mut(used);
//!     let prev = &mut prev[..used];
//!     cur.fill(0);
//!     prev.fill(0);
//!     for i in 1..=a.len() {
//!         let c1 = if dir.is_reverse() { a[a.len() - i] } else { a[i - 1] };
//!         for j in 1..=b.len() {
//!             let c2 = if dir.is_reverse() { b[b.len() - j] } else { b[j - 1] };
//!             cur[j] = if c1 == c2 {
//!                 prev[j - 1] + 1
//!             } else {
//!                 prev[j].max(cur[j - 1])
//!             };
//!         }
//!         prev.copy_from_slice(cur);
//!     }
//!     used
//! }
//!
//! let atoms = subproblems(
//!     b"GTCGTAGAATA",
//!     b"CACGTAGTA",
//!     Options::new(),
//!     Metric::Similarity,
//!     ScoreRowFn::plain(lcs_row),
//! )?;
//!
//! // Atoms tile both strings exactly, in order.
//! let covered: usize = atoms.iter().map(|a| a.m).sum();
//! assert_eq!(covered, b"GTCGTAGAATA".len());
//! # Ok::<(), hirschberg::HirschbergError>(())
//! ```
//!
//! # Interpreting atoms
//!
//! The driver emits rectangles, not alignments: a rectangle with an empty
//! side is a pure insertion or deletion run, a 1-by-1 rectangle is a single
//! symbol pair, a rectangle with a single symbol on one side leaves the
//! caller to pick the matching symbol on the other, and (when enabled) a
//! 2-by-2 transposition rectangle is an adjacent swap kept intact. How the
//! caller renders those - as an edit script, a diff, a similarity score -
//! is outside this crate.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod driver;
pub mod equality;
pub mod error;
pub mod score;
pub mod scratch;
pub mod transpose;
pub mod types;
pub mod utf8;

pub use driver::SubproblemIter;
pub use equality::{ByteEq, CharEq, Equality};
pub use error::{HirschbergError, Result};
pub use score::{PlainScoreRow, Score, ScoreRowFn};
pub use scratch::Scratch;
pub use types::{Direction, Metric, Options, Subproblem};

/// Decompose a string pair into atomic subproblems, eagerly.
///
/// Convenience wrapper over [`SubproblemIter`]: allocates scratch sized for
/// the input, uses the default (case-insensitive) equality, and collects
/// every atom in emission order. When the `s1` side is shorter in the
/// active unit the pair is swapped first, and the returned atoms refer to
/// the swapped orientation; build the iterator directly when you need to
/// observe [`SubproblemIter::swapped`] or override the equality.
pub fn subproblems<'a, T: Score>(
    s1: &'a [u8],
    s2: &'a [u8],
    options: Options,
    metric: Metric,
    score_row: ScoreRowFn<'a, T>,
) -> Result<Vec<Subproblem>> {
    let scratch = Scratch::for_input(s1, s2, options.utf8);
    let iter = SubproblemIter::new(
        s1,
        s2,
        options,
        metric,
        Equality::default(),
        scratch,
        score_row,
    )?;
    Ok(iter.collect())
}

/// Get version information for this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
