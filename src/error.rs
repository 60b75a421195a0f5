//! Error types for the alignment driver.
//!
//! The driver never panics and never retries: every irregular situation is
//! either a construction-time error defined here or degrades to a valid,
//! possibly suboptimal decomposition.

use thiserror::Error;

/// Primary error type for the alignment driver.
#[derive(Debug, Error)]
pub enum HirschbergError {
    /// One of the input strings has zero length at the root. The caller
    /// handles this case directly: the alignment is a pure insertion or
    /// deletion of the non-empty side.
    #[error("empty input on the {side} side: nothing to decompose")]
    EmptyInput {
        /// Which side was empty (`"s1"` or `"s2"`).
        side: &'static str,
    },

    /// The scratch rows cannot hold one score row for the shorter input.
    #[error("scratch rows too small: need {required} cells per row, got {capacity}")]
    ScratchTooSmall {
        /// Required cells per row (`n + 1` in the active unit on the
        /// shorter side).
        required: usize,
        /// Cells per row actually provided.
        capacity: usize,
    },
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, HirschbergError>;
