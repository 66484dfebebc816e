//! Solver configuration.
use serde::{Deserialize, Serialize};

/// Tuning knobs shared by both solvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Hypothesis-set size at or above which the three branches of a
    /// weighing are solved concurrently. `usize::MAX` keeps the solver
    /// on the calling thread.
    pub parallel_threshold: usize,
    /// Largest accepted coin count.
    pub max_coins: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            max_coins: 1_000_000,
        }
    }
}

impl SolverConfig {
    /// Configuration that never spawns parallel work.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }
}
