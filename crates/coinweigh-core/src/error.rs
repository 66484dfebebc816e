//! Error types shared by the sequential and static solvers.
//!
//! Two kinds of failure exist. A [`SolveError::TooFewCoins`] or
//! [`SolveError::TooManyCoins`] is a rejected request. Every
//! [`InvariantError`] means a selection or extension formula was pushed
//! outside the range where it is known to hold; the computation stops
//! rather than return a wrong strategy.

use crate::hypothesis::Coin;

/// Internal-consistency failures. None of these is recoverable: the
/// algorithms are deterministic, so a retry would fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error(
        "classification matches neither type A nor type B: \
         more={more}, less={less}, double={double}, all_equal={all_equal}"
    )]
    UnknownShape {
        more: usize,
        less: usize,
        double: usize,
        all_equal: bool,
    },

    #[error("{formula} selection applied to a classification of the other type")]
    ShapeMismatch { formula: &'static str },

    #[error("no balanced split exists for more={n_more}, less={n_less}")]
    NoBalancedSplit { n_more: usize, n_less: usize },

    #[error("split needs {needed} known-genuine filler coins, only {available} available")]
    InsufficientFiller { needed: usize, available: usize },

    #[error("scale arms differ in size: left={left}, right={right}")]
    UnequalArms { left: usize, right: usize },

    #[error("planned weighing puts no coin on the scale")]
    EmptySelection,

    #[error("coin {coin} placed on both arms of the scale")]
    OverlappingSelection { coin: Coin },

    #[error("no free code in 1..={limit}")]
    NoMissingCode { limit: u64 },

    #[error("cannot extend a table of {size} codes within {weighings} weighings")]
    NoExtension { size: usize, weighings: u32 },

    #[error("static construction needs at least 2 weighings, got {weighings}")]
    UnsupportedWeighings { weighings: u32 },

    #[error("static weighing {index} is unbalanced: left={left}, right={right}")]
    UnbalancedWeighing {
        index: usize,
        left: usize,
        right: usize,
    },

    #[error("code table invalid: {reason}")]
    InvalidCodeTable { reason: String },
}

/// Errors returned by the public entry points.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("there must be more than 2 coins, got {n}")]
    TooFewCoins { n: u32 },

    #[error("{n} coins exceeds the configured maximum of {max}")]
    TooManyCoins { n: u32, max: u32 },

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl SolveError {
    /// True when the request itself was rejected, as opposed to an
    /// internal defect.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolveError::TooFewCoins { .. } | SolveError::TooManyCoins { .. }
        )
    }
}
