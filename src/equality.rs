//! Configurable symbol equality.
//!
//! The driver compares symbols only in the transposition predicates; the
//! comparisons it uses are injected here so callers can align them with
//! whatever equivalence their score-row callback applies. Defaults are
//! case-insensitive (ASCII lowercase for bytes, the simple lowercase
//! mapping for code points), matching the stock scoring callbacks. Full
//! Unicode case folding can change code-point counts and is out of scope;
//! callers that need it should pre-normalize both inputs.

/// Byte-granularity equality predicate.
pub type ByteEq = fn(u8, u8) -> bool;

/// Code-point-granularity equality predicate.
pub type CharEq = fn(char, char) -> bool;

/// Exact byte equality.
pub fn byte_eq_exact(a: u8, b: u8) -> bool {
    a == b
}

/// ASCII-case-insensitive byte equality.
pub fn byte_eq_ascii_ci(a: u8, b: u8) -> bool {
    a.to_ascii_lowercase() == b.to_ascii_lowercase()
}

/// Exact code-point equality.
pub fn char_eq_exact(a: char, b: char) -> bool {
    a == b
}

/// Case-insensitive code-point equality under the simple lowercase mapping.
pub fn char_eq_ci(a: char, b: char) -> bool {
    fold(a) == fold(b)
}

fn fold(c: char) -> char {
    // Simple one-to-one mapping: take the first scalar of the lowercase
    // expansion. Multi-scalar expansions keep their lead scalar.
    c.to_lowercase().next().unwrap_or(c)
}

/// The pair of equalities a driver instance uses for transposition checks.
///
/// Both members can be overridden with any `fn` item.
#[derive(Debug, Clone, Copy)]
pub struct Equality {
    /// Byte-mode equality.
    pub byte: ByteEq,
    /// UTF-8-mode equality.
    pub ch: CharEq,
}

impl Equality {
    /// Case-insensitive equality on both granularities.
    pub fn case_insensitive() -> Self {
        Self {
            byte: byte_eq_ascii_ci,
            ch: char_eq_ci,
        }
    }

    /// Exact equality on both granularities.
    pub fn exact() -> Self {
        Self {
            byte: byte_eq_exact,
            ch: char_eq_exact,
        }
    }
}

impl Default for Equality {
    fn default() -> Self {
        Self::case_insensitive()
    }
}
