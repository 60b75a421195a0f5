//! Score elements and the score-row callback.
//!
//! The driver is generic over the numeric type of a DP row cell. The
//! [`Score`] trait pins down the small operation set the midpoint scan
//! needs; the callback contract is the forward/reverse row oracle of the
//! classical Hirschberg decomposition.

use crate::types::Direction;
use std::fmt;
use std::ops::Add;

/// A DP row cell: the numeric element the scratch rows hold.
///
/// The driver only ever adds two cells, compares them, and tests them for
/// approximate equality; `ZERO` and `MAX` seed the similarity and distance
/// accumulators respectively.
pub trait Score: Copy + PartialOrd + Add<Output = Self> + 'static {
    /// Additive identity; initial accumulator for similarity metrics.
    const ZERO: Self;
    /// Largest representable value; initial accumulator for distance
    /// metrics.
    const MAX: Self;

    /// Approximate equality, used by the midpoint tie-break. Exact for
    /// integer elements, epsilon-based for floating point.
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! impl_score_int {
    ($($t:ty),*) => {
        $(
            impl Score for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_score_int!(u32, u64, i32, i64);

impl Score for f32 {
    const ZERO: Self = 0.0;
    const MAX: Self = f32::MAX;

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < f32::EPSILON
    }
}

impl Score for f64 {
    const ZERO: Self = 0.0;
    const MAX: Self = f64::MAX;

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < f64::EPSILON
    }
}

/// Context-free score-row function.
///
/// `a` and `b` are the active substrings, `dir` selects the sweep end, and
/// `out` is the scratch row to fill. The return value is the number of
/// cells written, which the driver uses as the bound of its midpoint scan:
/// `b.len() + 1` in byte mode, the code-point count of `b` plus one in
/// UTF-8 mode. Cells past the reported count are callback-private and may
/// be used as working space (e.g. for the previous DP row).
pub type PlainScoreRow<T> = fn(a: &[u8], b: &[u8], dir: Direction, out: &mut [T]) -> usize;

/// A caller-supplied score-row oracle.
///
/// Given a substring pair and a direction, writes the final row of the
/// alignment DP into the scratch row and reports how many cells it wrote.
/// The driver never inspects intermediate rows and does not care how the
/// row was computed.
///
/// Two shapes are supported: a bare function pointer for context-free
/// recurrences, and a boxed closure for callbacks carrying caller state
/// (lookup tables, cost matrices, counters). The closure shape subsumes
/// the opaque-pointer and variadic shapes of C-style APIs.
pub enum ScoreRowFn<'cb, T> {
    /// Context-free function pointer.
    Plain(PlainScoreRow<T>),
    /// Closure carrying arbitrary caller state.
    Context(Box<dyn FnMut(&[u8], &[u8], Direction, &mut [T]) -> usize + 'cb>),
}

impl<'cb, T> ScoreRowFn<'cb, T> {
    /// Wrap a context-free function.
    pub fn plain(f: PlainScoreRow<T>) -> Self {
        ScoreRowFn::Plain(f)
    }

    /// Wrap a closure carrying caller state.
    pub fn with_context<F>(f: F) -> Self
    where
        F: FnMut(&[u8], &[u8], Direction, &mut [T]) -> usize + 'cb,
    {
        ScoreRowFn::Context(Box::new(f))
    }

    /// Dispatch one row computation.
    pub(crate) fn call(&mut self, a: &[u8], b: &[u8], dir: Direction, out: &mut [T]) -> usize {
        match self {
            ScoreRowFn::Plain(f) => f(a, b, dir, out),
            ScoreRowFn::Context(f) => f(a, b, dir, out),
        }
    }
}

impl<T> fmt::Debug for ScoreRowFn<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRowFn::Plain(_) => f.write_str("ScoreRowFn::Plain"),
            ScoreRowFn::Context(_) => f.write_str("ScoreRowFn::Context"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_approx_eq_is_exact() {
        assert!(3u64.approx_eq(3));
        assert!(!3u64.approx_eq(4));
        assert!((-2i32).approx_eq(-2));
    }

    #[test]
    fn test_float_approx_eq() {
        assert!(0.1f64.approx_eq(0.1 + f64::EPSILON / 4.0));
        assert!(!1.0f32.approx_eq(1.5));
    }

    #[test]
    fn test_callback_shapes_dispatch() {
        fn fill_ones(_a: &[u8], b: &[u8], _dir: Direction, out: &mut [u32]) -> usize {
            let used = b.len() + 1;
            for cell in &mut out[..used] {
                *cell = 1;
            }
            used
        }

        let mut row = vec![0u32; 8];
        let mut plain = ScoreRowFn::plain(fill_ones);
        assert_eq!(plain.call(b"ab", b"xyz", Direction::Forward, &mut row), 4);
        assert_eq!(&row[..4], &[1, 1, 1, 1]);

        let mut calls = 0;
        let mut ctx = ScoreRowFn::with_context(|_a, b: &[u8], _dir, out: &mut [u32]| {
            calls += 1;
            out[0] = 7;
            b.len() + 1
        });
        assert_eq!(ctx.call(b"", b"q", Direction::Reverse, &mut row), 2);
        drop(ctx);
        assert_eq!(calls, 1);
        assert_eq!(row[0], 7);
    }
}
