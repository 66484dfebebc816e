//! Weighing simulator: routes each hypothesis to the outcome it predicts.

use crate::hypothesis::{Hypothesis, HypothesisSet};
use crate::selection::{Outcome, Pan, Selection};

/// The three child hypothesis sets produced by one weighing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub more: HypothesisSet,
    pub equal: HypothesisSet,
    pub less: HypothesisSet,
}

impl Split {
    pub fn get(&self, outcome: Outcome) -> &HypothesisSet {
        match outcome {
            Outcome::More => &self.more,
            Outcome::Equal => &self.equal,
            Outcome::Less => &self.less,
        }
    }

    /// Child sizes in More, Equal, Less order.
    pub fn sizes(&self) -> [usize; 3] {
        [self.more.len(), self.equal.len(), self.less.len()]
    }

    pub fn into_parts(self) -> (HypothesisSet, HypothesisSet, HypothesisSet) {
        (self.more, self.equal, self.less)
    }
}

/// Weight a hypothesis adds to one arm: +1 heavy coin on it, -1 light
/// coin on it, 0 otherwise.
fn arm_reading(h: Hypothesis, pan: Option<Pan>, arm: Pan) -> i32 {
    if pan == Some(arm) {
        h.raw().signum()
    } else {
        0
    }
}

fn outcome_for(h: Hypothesis, pan: Option<Pan>) -> Outcome {
    Outcome::from_readings(arm_reading(h, pan, Pan::Left), arm_reading(h, pan, Pan::Right))
}

/// Scale reading if `h` is the true state of the world.
pub fn reading(h: Hypothesis, selection: &Selection) -> Outcome {
    let pan = h.coin().and_then(|coin| selection.pan_of(coin));
    outcome_for(h, pan)
}

/// Partition `hypotheses` by the outcome each predicts for `selection`.
///
/// Every input hypothesis lands in exactly one child, and relative order
/// is preserved within each child.
pub fn weigh(hypotheses: &HypothesisSet, selection: &Selection) -> Split {
    let top = selection
        .left()
        .iter()
        .chain(selection.right())
        .copied()
        .max()
        .unwrap_or(0) as usize;
    let mut pans = vec![None; top + 1];
    for &coin in selection.left() {
        pans[coin as usize] = Some(Pan::Left);
    }
    for &coin in selection.right() {
        pans[coin as usize] = Some(Pan::Right);
    }

    let mut more = Vec::new();
    let mut equal = Vec::new();
    let mut less = Vec::new();
    for h in hypotheses.iter() {
        let pan = h
            .coin()
            .and_then(|coin| pans.get(coin as usize).copied().flatten());
        match outcome_for(h, pan) {
            Outcome::More => more.push(h),
            Outcome::Equal => equal.push(h),
            Outcome::Less => less.push(h),
        }
    }

    Split {
        more: HypothesisSet::from_distinct(more),
        equal: HypothesisSet::from_distinct(equal),
        less: HypothesisSet::from_distinct(less),
    }
}
