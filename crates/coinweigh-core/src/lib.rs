//! Balance-scale strategies for finding one counterfeit coin.
//!
//! Given `n` coins, at most one of which is heavier or lighter than the
//! rest, compute a strategy with the fewest weighings in the worst case
//! that names the counterfeit and its sign, or shows all coins genuine.
//!
//! - [`solve_sequential`]: adaptive decision tree ([`sequential`]).
//! - [`solve_static`]: fixed weighings decoded through a table of base-3
//!   codes ([`static_code`]).

pub mod classify;
pub mod config;
pub mod error;
pub mod hypothesis;
pub mod planner;
pub mod selection;
pub mod sequential;
pub mod static_code;
pub mod ternary;
pub mod weigh;

use serde::Serialize;

pub use config::SolverConfig;
pub use error::{InvariantError, SolveError};
pub use hypothesis::{Coin, Hypothesis, HypothesisSet, Sign, Verdict};
pub use selection::{Outcome, Selection};
pub use sequential::DecisionNode;
pub use static_code::CodeTable;

/// Adaptive strategy for `coins` coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequentialSolution {
    pub coins: Coin,
    pub weighings: usize,
    pub tree: DecisionNode,
}

/// Non-adaptive strategy for `coins` coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticSolution {
    pub coins: Coin,
    pub weighings: usize,
    pub table: CodeTable,
}

/// Fewest weighings that can handle `n` coins without an extra coin
/// known to be genuine: the smallest `k` with `(3^k - 3) / 2 >= n`.
pub fn lower_bound(n: Coin) -> usize {
    let mut k = 1;
    while static_code::saturated_count(k) < n as usize {
        k += 1;
    }
    k as usize
}

fn check_coins(n: Coin, config: &SolverConfig) -> Result<(), SolveError> {
    if n < 3 {
        return Err(SolveError::TooFewCoins { n });
    }
    if n > config.max_coins {
        return Err(SolveError::TooManyCoins {
            n,
            max: config.max_coins,
        });
    }
    Ok(())
}

pub fn solve_sequential(n: Coin) -> Result<SequentialSolution, SolveError> {
    solve_sequential_with(n, &SolverConfig::default())
}

pub fn solve_sequential_with(
    n: Coin,
    config: &SolverConfig,
) -> Result<SequentialSolution, SolveError> {
    check_coins(n, config)?;
    let (weighings, tree) = sequential::solve(HypothesisSet::initial(n), n, config)?;
    tracing::debug!(coins = n, weighings, "built sequential strategy");
    Ok(SequentialSolution {
        coins: n,
        weighings,
        tree,
    })
}

pub fn solve_static(n: Coin) -> Result<StaticSolution, SolveError> {
    solve_static_with(n, &SolverConfig::default())
}

pub fn solve_static_with(n: Coin, config: &SolverConfig) -> Result<StaticSolution, SolveError> {
    check_coins(n, config)?;
    let table = static_code::weigh_static(n)?;
    table.validate()?;
    Ok(StaticSolution {
        coins: n,
        weighings: table.weighings() as usize,
        table,
    })
}
