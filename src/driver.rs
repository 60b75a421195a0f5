//! The subproblem driver.
//!
//! A stack-driven Hirschberg split loop exposed as a lazy iterator: each
//! pull pops one subproblem and either reports it as atomic or invokes the
//! score-row callback twice (forward and reverse), picks the best column
//! on the shorter axis, and pushes the two children. Atoms come out in
//! strict left-to-right order of their covered ranges, so the caller can
//! concatenate alignment fragments as they arrive.

use tracing::{debug, trace};

use crate::equality::Equality;
use crate::error::{HirschbergError, Result};
use crate::score::{Score, ScoreRowFn};
use crate::scratch::Scratch;
use crate::transpose;
use crate::types::{Direction, Metric, Options, Subproblem};
use crate::utf8;

/// Lazy producer of atomic subproblems for one string pair.
///
/// Owns the work stack and the scratch rows; borrows the input strings for
/// its lifetime. Strictly single-threaded: the caller drives progress by
/// pulling, and the callback runs synchronously inside each pull.
///
/// When the `s1` side is shorter than the `s2` side in the active unit,
/// the two strings are swapped at construction so the split always runs
/// along the longer axis; [`SubproblemIter::swapped`] reports the
/// orientation and emitted atoms refer to the swapped strings.
#[derive(Debug)]
pub struct SubproblemIter<'a, T> {
    s1: &'a [u8],
    s2: &'a [u8],
    swapped: bool,
    options: Options,
    metric: Metric,
    equality: Equality,
    scratch: Scratch<T>,
    score_row: ScoreRowFn<'a, T>,
    stack: Vec<Subproblem>,
    last: Option<Subproblem>,
    is_atom: bool,
}

impl<'a, T: Score> SubproblemIter<'a, T> {
    /// Build an iterator with a single root subproblem pushed.
    ///
    /// Fails with [`HirschbergError::EmptyInput`] when either string has
    /// zero length (the caller handles that trivial all-insertion
    /// alignment directly) and with [`HirschbergError::ScratchTooSmall`]
    /// when the rows cannot hold `n + 1` cells for the shorter side.
    pub fn new(
        s1: &'a [u8],
        s2: &'a [u8],
        options: Options,
        metric: Metric,
        equality: Equality,
        scratch: Scratch<T>,
        score_row: ScoreRowFn<'a, T>,
    ) -> Result<Self> {
        if s1.is_empty() {
            return Err(HirschbergError::EmptyInput { side: "s1" });
        }
        if s2.is_empty() {
            return Err(HirschbergError::EmptyInput { side: "s2" });
        }
        let (len1, len2) = if options.utf8 {
            (utf8::count(s1), utf8::count(s2))
        } else {
            (s1.len(), s2.len())
        };
        // The longer side goes on the s1 axis so every split halves the
        // longer dimension.
        let (s1, s2, short_units, swapped) = if len1 < len2 {
            (s2, s1, len1, true)
        } else {
            (s1, s2, len2, false)
        };
        let required = short_units + 1;
        if scratch.capacity() < required {
            return Err(HirschbergError::ScratchTooSmall {
                required,
                capacity: scratch.capacity(),
            });
        }
        debug!(
            m = s1.len(),
            n = s2.len(),
            utf8 = options.utf8,
            allow_transpose = options.allow_transpose,
            swapped,
            "starting decomposition"
        );
        let root = Subproblem::new(0, s1.len(), 0, s2.len());
        Ok(Self {
            s1,
            s2,
            swapped,
            options,
            metric,
            equality,
            scratch,
            score_row,
            stack: vec![root],
            last: None,
            is_atom: false,
        })
    }

    /// The string on the `s1` axis (after any normalization swap).
    pub fn s1(&self) -> &'a [u8] {
        self.s1
    }

    /// The string on the `s2` axis (after any normalization swap).
    pub fn s2(&self) -> &'a [u8] {
        self.s2
    }

    /// True when the inputs were swapped at construction to put the longer
    /// side on the `s1` axis. Emitted atoms refer to the swapped
    /// orientation.
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// True when the most recent pull emitted an atomic subproblem.
    pub fn is_atom(&self) -> bool {
        self.is_atom
    }

    /// The atom emitted by the most recent pull, if it emitted one.
    pub fn atom(&self) -> Option<Subproblem> {
        if self.is_atom {
            self.last
        } else {
            None
        }
    }

    /// Recover the scratch rows for reuse with another driver instance.
    pub fn into_inner(self) -> Scratch<T> {
        self.scratch
    }

    /// Advance one step: pop a subproblem and either emit it as atomic or
    /// split it. Returns `false` on completion, leaving the atom slot
    /// unchanged.
    pub fn pull(&mut self) -> bool {
        let Some(sub) = self.stack.pop() else {
            return false;
        };
        let s1 = self.s1;
        let s2 = self.s2;
        let a = &s1[sub.s1_range()];
        let b = &s2[sub.s2_range()];
        let (um, un) = if self.options.utf8 {
            (utf8::count(a), utf8::count(b))
        } else {
            (sub.m, sub.n)
        };

        if self.is_atomic(a, b, um, un) {
            self.last = Some(sub);
            self.is_atom = true;
        } else {
            self.split(sub, a, b, um, un);
            self.is_atom = false;
        }
        true
    }

    /// Terminal-shape test: empty side, single symbol on either side, or
    /// an enabled 2×2 transposition.
    fn is_atomic(&self, a: &[u8], b: &[u8], um: usize, un: usize) -> bool {
        if um == 0 || un == 0 || um == 1 || un == 1 {
            return true;
        }
        if self.options.allow_transpose && um == 2 && un == 2 {
            if self.options.utf8 {
                return transpose::is_transpose_utf8(a, b, self.equality.ch);
            }
            return transpose::is_transpose(a, b, self.equality.byte);
        }
        false
    }

    /// One Hirschberg split: midpoint on the `s1` axis, forward and
    /// reverse score rows, best column on the `s2` axis, two children
    /// pushed (right first, so the left child is popped next).
    fn split(&mut self, sub: Subproblem, a: &'a [u8], b: &'a [u8], um: usize, un: usize) {
        let utf8_mode = self.options.utf8;

        let mut split_units = um / 2;
        let mut split_bytes = if utf8_mode {
            utf8::nth_offset(a, split_units)
        } else {
            split_units
        };

        // Never cut an adjacent swap in half: shift the split one symbol
        // right when it straddles a transposition.
        let border = self.options.allow_transpose
            && if utf8_mode {
                transpose::border_transpose_utf8(a, split_bytes, b, self.equality.ch)
            } else {
                transpose::border_transpose(a, split_bytes, b, self.equality.byte)
            };
        if border {
            split_units += 1;
            split_bytes += if utf8_mode {
                utf8::next_len(&a[split_bytes..])
            } else {
                1
            };
        }

        if self.options.zero_scratch {
            self.scratch.zero();
        }
        let row_len = self.scratch.capacity();
        let (fwd_row, rev_row) = self.scratch.rows_mut();
        let used_fwd = self
            .score_row
            .call(&a[..split_bytes], b, Direction::Forward, fwd_row);
        let used_rev = self
            .score_row
            .call(&a[split_bytes..], b, Direction::Reverse, rev_row);
        // Both sweeps must agree on the inclusive column count; a callback
        // writing fewer cells than expected degrades the split, never the
        // driver.
        let u = used_fwd.min(used_rev).min(un + 1).min(row_len);

        let mut best_j = 0usize;
        let mut best_off = 0usize;
        let mut best = self.metric.initial::<T>();
        let mut cursor = 0usize;
        for j in 0..u {
            let sum = fwd_row[j] + rev_row[u - 1 - j];
            // First non-zero tie is accepted while the best still sits at
            // column zero.
            let tie = best_j == 0 && j > 0 && sum.approx_eq(best);
            if self.metric.improves(sum, best) || tie {
                best_j = j;
                best_off = cursor;
                best = sum;
            }
            cursor += if utf8_mode {
                utf8::next_len(&b[cursor..])
            } else {
                1
            };
        }

        let mut sub_m_bytes = split_bytes;
        let mut sub_n_bytes = best_off;
        if (split_units == 0 && best_j == 0) || (split_units == um && best_j == un) {
            // A zero-progress split would loop; take one symbol off each
            // side instead.
            sub_m_bytes = if utf8_mode { utf8::next_len(a) } else { 1 };
            sub_n_bytes = if utf8_mode { utf8::next_len(b) } else { 1 };
        }

        let left = Subproblem::new(sub.x, sub_m_bytes, sub.y, sub_n_bytes);
        let right = Subproblem::new(
            sub.x + sub_m_bytes,
            sub.m - sub_m_bytes,
            sub.y + sub_n_bytes,
            sub.n - sub_n_bytes,
        );
        trace!(?sub, ?left, ?right, "split");
        self.stack.push(right);
        self.stack.push(left);
    }
}

impl<T: Score> Iterator for SubproblemIter<'_, T> {
    type Item = Subproblem;

    /// Convenience mode: loop pulls internally and yield only atoms.
    fn next(&mut self) -> Option<Subproblem> {
        while self.pull() {
            if self.is_atom {
                return self.last;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Plain LCS-length row (no transposition bonus), case-sensitive.
    fn lcs_row(a: &[u8], b: &[u8], dir: Direction, out: &mut [u64]) -> usize {
        let n = b.len();
        let used = n + 1;
        let (cur, prev) = out.split_at_mut(used);
        let prev = &mut prev[..used];
        cur.fill(0);
        prev.fill(0);
        for i in 1..=a.len() {
            let c1 = if dir.is_reverse() { a[a.len() - i] } else { a[i - 1] };
            for j in 1..=n {
                let c2 = if dir.is_reverse() { b[n - j] } else { b[j - 1] };
                cur[j] = if c1 == c2 {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(cur[j - 1])
                };
            }
            prev.copy_from_slice(cur);
        }
        used
    }

    fn run(s1: &[u8], s2: &[u8], options: Options) -> (Vec<Subproblem>, bool) {
        let scratch = Scratch::for_input(s1, s2, options.utf8);
        let iter = SubproblemIter::new(
            s1,
            s2,
            options,
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap();
        let swapped = iter.swapped();
        (iter.collect(), swapped)
    }

    fn assert_covers(atoms: &[Subproblem], m: usize, n: usize) {
        let mut x = 0;
        let mut y = 0;
        for atom in atoms {
            assert_eq!(atom.x, x, "gap or overlap on the s1 axis");
            assert_eq!(atom.y, y, "gap or overlap on the s2 axis");
            x += atom.m;
            y += atom.n;
        }
        assert_eq!(x, m);
        assert_eq!(y, n);
    }

    #[test]
    fn test_empty_root_is_an_error() {
        let scratch: Scratch<u64> = Scratch::with_capacity(8);
        let err = SubproblemIter::new(
            b"abc",
            b"",
            Options::new(),
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap_err();
        assert!(matches!(err, HirschbergError::EmptyInput { side: "s2" }));
    }

    #[test]
    fn test_scratch_too_small_is_an_error() {
        let scratch: Scratch<u64> = Scratch::with_capacity(2);
        let err = SubproblemIter::new(
            b"abcdef",
            b"abc",
            Options::new(),
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HirschbergError::ScratchTooSmall {
                required: 4,
                capacity: 2
            }
        ));
    }

    #[test]
    fn test_atoms_cover_input_in_order() {
        let s1 = b"GTCGTAGAATA";
        let s2 = b"CACGTAGTA";
        let (atoms, swapped) = run(s1, s2, Options::new());
        assert!(!swapped);
        assert_covers(&atoms, s1.len(), s2.len());
    }

    #[test]
    fn test_shorter_first_side_swaps() {
        let (atoms, swapped) = run(b"abc", b"abcdef", Options::new());
        assert!(swapped);
        // Coverage is over the swapped orientation.
        assert_covers(&atoms, 6, 3);
    }

    #[test]
    fn test_atom_shapes() {
        let (atoms, _) = run(b"GTCGTAGAATA", b"CACGTAGTA", Options::new());
        for atom in &atoms {
            let small = atom.m.min(atom.n);
            assert!(
                atom.has_empty_side() || small == 1,
                "non-atomic shape emitted without transposition: {atom:?}"
            );
        }
    }

    #[test]
    fn test_transpose_atom_emitted() {
        let mut options = Options::new();
        options.allow_transpose = true;
        let (atoms, _) = run(b"the", b"teh", options);
        assert_covers(&atoms, 3, 3);
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0], Subproblem::new(0, 1, 0, 1)); // t / t
        assert_eq!(atoms[1], Subproblem::new(1, 2, 1, 2)); // he / eh
    }

    #[test]
    fn test_no_transpose_atoms_when_disabled() {
        let (atoms, _) = run(b"the", b"teh", Options::new());
        for atom in &atoms {
            assert!(atom.has_empty_side() || atom.m.min(atom.n) == 1);
        }
        assert_covers(&atoms, 3, 3);
    }

    #[test]
    fn test_pull_protocol() {
        let scratch = Scratch::for_input(b"ab", b"ab", false);
        let mut iter = SubproblemIter::new(
            b"ab",
            b"ab",
            Options::new(),
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap();
        let mut pulls = 0;
        let mut atoms = 0;
        while iter.pull() {
            pulls += 1;
            if iter.is_atom() {
                atoms += 1;
                assert!(iter.atom().is_some());
            } else {
                assert_eq!(iter.atom(), None);
            }
            assert!(pulls < 64, "driver failed to terminate");
        }
        assert!(atoms >= 1);
        // Completion leaves the atom slot from the final emitting pull.
        assert!(!iter.pull());
    }

    #[test]
    fn test_pull_count_is_linear() {
        let s1 = b"the quick brown fox jumps over the lazy dog";
        let s2 = b"a lazy quick dog drove over the brown fox";
        let scratch = Scratch::for_input(s1, s2, false);
        let mut iter = SubproblemIter::new(
            s1,
            s2,
            Options::new(),
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap();
        let mut pulls = 0usize;
        while iter.pull() {
            pulls += 1;
        }
        assert!(
            pulls <= 4 * (s1.len() + s2.len()),
            "expected O(m + n) pulls, got {pulls}"
        );
    }

    #[test]
    fn test_utf8_boundaries() {
        let s1 = "Hernández".as_bytes();
        let s2 = "hdez".as_bytes();
        let mut options = Options::new();
        options.utf8 = true;
        let scratch = Scratch::for_input(s1, s2, true);
        let iter = SubproblemIter::new(
            s1,
            s2,
            options,
            Metric::Similarity,
            Equality::default(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap();
        let s1_str = std::str::from_utf8(s1).unwrap();
        let atoms: Vec<Subproblem> = iter.collect();
        assert_covers(&atoms, s1.len(), s2.len());
        for atom in &atoms {
            assert!(s1_str.is_char_boundary(atom.x));
            assert!(s1_str.is_char_boundary(atom.x + atom.m));
        }
    }

    #[test]
    fn test_scratch_recovery() {
        let scratch: Scratch<u64> = Scratch::with_capacity(32);
        let iter = SubproblemIter::new(
            b"ab",
            b"ab",
            Options::new(),
            Metric::Similarity,
            Equality::exact(),
            scratch,
            ScoreRowFn::plain(lcs_row),
        )
        .unwrap();
        let scratch = iter.into_inner();
        assert_eq!(scratch.capacity(), 32);
    }
}
