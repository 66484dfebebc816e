//! Selection planner: picks the next weighing for a classification.
//!
//! Both formulas aim for three children whose sizes differ by at most
//! one, which is what makes the resulting strategy optimal.
//!
//! **Type A** (Double and Equal coins only): split the `m` Double coins
//! into thirds, weigh one third against another. When `m % 3 == 1` a
//! known-genuine coin replaces one coin on the right arm so the unweighed
//! third can absorb the extra Double coin. Without a genuine coin the
//! split is uneven by one; this only happens on the first weighing.
//!
//! **Type B** (More, Less and Equal coins): the left arm takes `n1` More
//! coins and `n2` Less coins, the right arm the remaining `n_more - n1`
//! More coins and `k` Less coins. `l` genuine fillers pad the right arm
//! (`l > 0`) or the left arm (`l < 0`).

use serde::{Deserialize, Serialize};

use crate::classify::{Classification, Shape};
use crate::error::InvariantError;
use crate::hypothesis::Coin;
use crate::selection::Selection;

/// Coin counts for a type B weighing. See the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCounts {
    pub n1: i64,
    pub n2: i64,
    pub k: i64,
    pub l: i64,
}

impl SplitCounts {
    fn is_feasible(&self) -> bool {
        self.n1 >= 0 && self.n2 >= 0 && self.k >= 0
    }
}

/// Closed-form type B counts for `n_more` More coins and `n_less` Less
/// coins.
///
/// Six cases by `n_more % 2` and `(n_more + n_less) % 3`. Division
/// truncates toward zero, so negative intermediates round up; the caller
/// rejects any negative count.
pub fn split_counts(n_more: usize, n_less: usize) -> SplitCounts {
    let nm = n_more as i64;
    let nl = n_less as i64;
    let odd = nm % 2 == 1;

    let (n1, n2, l) = match ((nm + nl) % 3, odd) {
        (0, true) => {
            let n1 = (nm + 1) / 2;
            (n1, (nl - n1 + 2) / 3, 2)
        }
        (0, false) => {
            let n1 = nm / 2;
            (n1, (nl - n1) / 3, 0)
        }
        (1, true) => {
            let n1 = (nm + 1) / 2;
            (n1, (nl - n1 + 1) / 3, 1)
        }
        (1, false) => {
            let n1 = nm / 2;
            (n1, (nl - n1 - 1) / 3, 0)
        }
        (_, true) => {
            let n1 = (nm - 1) / 2;
            (n1, (nl - n1 - 1) / 3, -1)
        }
        (_, false) => {
            let n1 = nm / 2;
            (n1, (nl - n1 + 1) / 3, 0)
        }
    };

    // Left and right arm must carry the same number of coins.
    let k = 2 * n1 + n2 - nm - l;
    SplitCounts { n1, n2, k, l }
}

/// Plan the next weighing for `cfg`, choosing the formula by shape.
pub fn plan(cfg: &Classification) -> Result<Selection, InvariantError> {
    let selection = match cfg.shape()? {
        Shape::TypeA => plan_type_a(cfg)?,
        Shape::TypeB => plan_type_b(cfg)?,
    };
    tracing::trace!(
        left = ?selection.left(),
        right = ?selection.right(),
        "planned weighing"
    );
    Ok(selection)
}

/// Type A selection. Fails with `ShapeMismatch` on a type B
/// classification.
pub fn plan_type_a(cfg: &Classification) -> Result<Selection, InvariantError> {
    if cfg.shape()? != Shape::TypeA {
        return Err(InvariantError::ShapeMismatch { formula: "type A" });
    }

    let double = &cfg.double;
    let m = double.len();
    let (n, filler) = match m % 3 {
        0 => (m / 3, false),
        1 if !cfg.equal.is_empty() => ((m + 2) / 3, true),
        // Uneven by one coin; (m + 2) / 3 would be the alternative.
        1 => ((m - 1) / 3, false),
        _ => ((m + 1) / 3, false),
    };

    let left = double[..n].to_vec();
    let right = if filler {
        let mut right = double[n..2 * n - 1].to_vec();
        right.push(cfg.equal[0]);
        right
    } else {
        double[n..2 * n].to_vec()
    };
    Selection::new(left, right)
}

/// Type B selection. Retries once with More and Less exchanged when the
/// direct counts come out negative.
pub fn plan_type_b(cfg: &Classification) -> Result<Selection, InvariantError> {
    if cfg.shape()? != Shape::TypeB {
        return Err(InvariantError::ShapeMismatch { formula: "type B" });
    }

    let mut more: &[Coin] = &cfg.more;
    let mut less: &[Coin] = &cfg.less;
    let mut counts = split_counts(more.len(), less.len());
    if !counts.is_feasible() {
        std::mem::swap(&mut more, &mut less);
        counts = split_counts(more.len(), less.len());
    }
    let no_split = InvariantError::NoBalancedSplit {
        n_more: cfg.more.len(),
        n_less: cfg.less.len(),
    };
    if !counts.is_feasible() {
        return Err(no_split);
    }
    let SplitCounts { n1, n2, k, l } = counts;
    let (n1, n2, k) = (n1 as usize, n2 as usize, k as usize);
    if n1 > more.len() || n2 + k > less.len() {
        return Err(no_split);
    }

    let needed = l.unsigned_abs() as usize;
    if cfg.equal.len() < needed {
        return Err(InvariantError::InsufficientFiller {
            needed,
            available: cfg.equal.len(),
        });
    }

    let mut left = Vec::with_capacity(n1 + n2 + 1);
    left.extend_from_slice(&more[..n1]);
    left.extend_from_slice(&less[..n2]);
    if l < 0 {
        left.push(cfg.equal[0]);
    }

    let mut right = Vec::with_capacity(left.len());
    right.extend_from_slice(&more[n1..]);
    right.extend_from_slice(&less[n2..n2 + k]);
    if l > 0 {
        right.extend_from_slice(&cfg.equal[..needed]);
    }

    Selection::new(left, right)
}
