//! Transposition predicates.
//!
//! Two checks keep adjacent swaps intact across the decomposition: the 2×2
//! atomic predicate (is this subproblem exactly a swapped pair?) and the
//! border predicate (does the proposed split fall inside a swap?). Each has
//! a byte and a code-point variant. Both use the configured equality, so a
//! case-insensitive driver treats `Th`/`hT` the same as `th`/`ht`.

use crate::equality::{ByteEq, CharEq};
use crate::utf8;

/// True when `a` and `b` are a 2×2 transposition: the first symbol of `a`
/// equals the second of `b`, the second of `a` equals the first of `b`, and
/// the two symbols of `a` differ. Byte granularity.
pub fn is_transpose(a: &[u8], b: &[u8], eq: ByteEq) -> bool {
    a.len() == 2
        && b.len() == 2
        && eq(a[0], b[1])
        && eq(a[1], b[0])
        && !eq(a[0], a[1])
}

/// Code-point variant of [`is_transpose`]. Both code points on each side
/// must fit entirely inside the subproblem.
pub fn is_transpose_utf8(a: &[u8], b: &[u8], eq: CharEq) -> bool {
    let Some((a1, a1_len)) = utf8::decode_first(a) else {
        return false;
    };
    let Some((a2, a2_len)) = utf8::decode_first(&a[a1_len..]) else {
        return false;
    };
    let Some((b1, b1_len)) = utf8::decode_first(b) else {
        return false;
    };
    let Some((b2, b2_len)) = utf8::decode_first(&b[b1_len..]) else {
        return false;
    };
    if a1_len + a2_len != a.len() || b1_len + b2_len != b.len() {
        return false;
    }
    eq(a1, b2) && eq(a2, b1) && !eq(a1, a2)
}

/// True when splitting `a` before byte `split` would cut an adjacent swap
/// in half: some adjacent pair `b[j-1], b[j]` equals the symbol right of
/// the split followed by the symbol left of it, and the pair differs.
/// Byte granularity.
pub fn border_transpose(a: &[u8], split: usize, b: &[u8], eq: ByteEq) -> bool {
    if a.is_empty() || b.is_empty() || split == 0 || split >= a.len() {
        return false;
    }
    let split_left = a[split - 1];
    let split_right = a[split];
    for j in 1..b.len() {
        if eq(b[j - 1], split_right) && eq(b[j], split_left) && !eq(b[j - 1], b[j]) {
            return true;
        }
    }
    false
}

/// Code-point variant of [`border_transpose`]. `split_offset` is the byte
/// offset of the proposed split inside `a` and must lie on a code-point
/// boundary.
pub fn border_transpose_utf8(a: &[u8], split_offset: usize, b: &[u8], eq: CharEq) -> bool {
    if a.is_empty() || b.is_empty() || split_offset == 0 || split_offset >= a.len() {
        return false;
    }
    let Some((left, _)) = utf8::decode_last(&a[..split_offset]) else {
        return false;
    };
    let Some((right, _)) = utf8::decode_first(&a[split_offset..]) else {
        return false;
    };
    // Equal flanking symbols cannot form a transposition.
    if eq(left, right) {
        return false;
    }

    let Some((mut prev, mut pos)) = utf8::decode_first(b) else {
        return false;
    };
    while pos < b.len() {
        let Some((cur, cur_len)) = utf8::decode_first(&b[pos..]) else {
            return false;
        };
        if eq(prev, right) && eq(cur, left) {
            return true;
        }
        prev = cur;
        pos += cur_len;
    }
    false
}
