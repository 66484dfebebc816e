//! Sequential (adaptive) strategy: a decision tree of weighings.
//!
//! Each node classifies its hypothesis set, plans a balanced weighing,
//! splits the set by outcome and recurses into the three children. The
//! children are independent, so large ones are solved in parallel with
//! rayon.

use serde::Serialize;

use crate::classify::{classify, Classification};
use crate::config::SolverConfig;
use crate::error::InvariantError;
use crate::hypothesis::{Coin, Hypothesis, HypothesisSet, Sign, Verdict};
use crate::planner::plan;
use crate::selection::{Outcome, Selection};
use crate::weigh::{reading, weigh};

/// One node of the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum DecisionNode {
    /// At most one hypothesis remains.
    Leaf { verdict: Verdict },
    /// Weigh `selection`, then continue with the child for the outcome.
    Weighing {
        selection: Selection,
        more: Box<DecisionNode>,
        equal: Box<DecisionNode>,
        less: Box<DecisionNode>,
    },
}

impl DecisionNode {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            DecisionNode::Leaf { .. } => None,
            DecisionNode::Weighing { selection, .. } => Some(selection),
        }
    }

    pub fn child(&self, outcome: Outcome) -> Option<&DecisionNode> {
        match self {
            DecisionNode::Leaf { .. } => None,
            DecisionNode::Weighing {
                more, equal, less, ..
            } => Some(match outcome {
                Outcome::More => &**more,
                Outcome::Equal => &**equal,
                Outcome::Less => &**less,
            }),
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            DecisionNode::Leaf { verdict } => Some(*verdict),
            DecisionNode::Weighing { .. } => None,
        }
    }

    /// Worst-case number of weighings below this node.
    pub fn depth(&self) -> usize {
        match self {
            DecisionNode::Leaf { .. } => 0,
            DecisionNode::Weighing { .. } => {
                1 + Outcome::ALL
                    .iter()
                    .filter_map(|o| self.child(*o))
                    .map(DecisionNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Number of hypotheses still possible at this node, counted as the
    /// reachable leaves below it.
    pub fn hypothesis_count(&self) -> usize {
        match self {
            DecisionNode::Leaf {
                verdict: Verdict::Impossible,
            } => 0,
            DecisionNode::Leaf { .. } => 1,
            DecisionNode::Weighing { .. } => Outcome::ALL
                .iter()
                .filter_map(|o| self.child(*o))
                .map(DecisionNode::hypothesis_count)
                .sum(),
        }
    }

    /// Follow the tree assuming `truth` is the real state of the coins.
    pub fn replay(&self, truth: Hypothesis) -> Verdict {
        let mut node = self;
        loop {
            match node {
                DecisionNode::Leaf { verdict } => return *verdict,
                DecisionNode::Weighing { selection, .. } => {
                    let outcome = reading(truth, selection);
                    match node.child(outcome) {
                        Some(next) => node = next,
                        None => return Verdict::Impossible,
                    }
                }
            }
        }
    }
}

fn resolved_verdict(cfg: &Classification) -> Verdict {
    if cfg.all_equal {
        Verdict::Genuine
    } else if let Some(&coin) = cfg.more.first() {
        Verdict::Counterfeit {
            coin,
            sign: Sign::Heavy,
        }
    } else if let Some(&coin) = cfg.less.first() {
        Verdict::Counterfeit {
            coin,
            sign: Sign::Light,
        }
    } else {
        Verdict::Impossible
    }
}

/// Build the decision tree for `hypotheses` over coins `1..=n`.
///
/// Returns the worst-case weighing count together with the tree.
pub fn solve(
    hypotheses: HypothesisSet,
    n: Coin,
    config: &SolverConfig,
) -> Result<(usize, DecisionNode), InvariantError> {
    let cfg = classify(&hypotheses, n);
    if cfg.possibilities() <= 1 {
        let verdict = resolved_verdict(&cfg);
        return Ok((0, DecisionNode::Leaf { verdict }));
    }

    let selection = plan(&cfg)?;
    let parallel = hypotheses.len() >= config.parallel_threshold;
    let (more, equal, less) = weigh(&hypotheses, &selection).into_parts();
    drop(hypotheses);

    let (more, equal, less) = if parallel {
        let (more, (equal, less)) = rayon::join(
            || solve(more, n, config),
            || {
                rayon::join(
                    || solve(equal, n, config),
                    || solve(less, n, config),
                )
            },
        );
        (more?, equal?, less?)
    } else {
        (
            solve(more, n, config)?,
            solve(equal, n, config)?,
            solve(less, n, config)?,
        )
    };

    let depth = 1 + more.0.max(equal.0).max(less.0);
    let node = DecisionNode::Weighing {
        selection,
        more: Box::new(more.1),
        equal: Box::new(equal.1),
        less: Box::new(less.1),
    };
    Ok((depth, node))
}
