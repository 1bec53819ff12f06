//! Engine error types.
//!
//! Only contract violations are errors. A full board or a direction in which
//! nothing can move are ordinary outcomes, not failures.

use derive_more::{Display, Error};

/// Errors returned by the board engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Raw input did not name one of the four directions.
    #[display("unrecognized direction: {input:?}")]
    InvalidDirection {
        /// The rejected input, as received.
        input: String,
    },

    /// A board must have at least one cell per side.
    #[display("invalid board size: {size}")]
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },

    /// Rows passed to `Board::from_rows` were not square.
    #[display("expected {expected} cells per row, found {found}")]
    RaggedRows {
        /// Row length implied by the row count.
        expected: usize,
        /// Length of the first offending row.
        found: usize,
    },
}

impl EngineError {
    /// Every variant is an invalid-argument failure: the call was rejected
    /// before any state changed.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidDirection { .. }
                | EngineError::InvalidBoardSize { .. }
                | EngineError::RaggedRows { .. }
        )
    }
}
