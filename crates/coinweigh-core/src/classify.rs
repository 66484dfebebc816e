//! Per-coin classification of a hypothesis set.
//!
//! Every coin falls into exactly one group:
//! - **Equal**: no surviving hypothesis involves it; it is provably genuine.
//! - **More**: it may be heavy, but not light.
//! - **Less**: it may be light, but not heavy.
//! - **Double**: it may be either.
//!
//! The sets reachable from the initial hypothesis set come in two shapes.
//! Type A has only Double and Equal coins (and normally admits "all
//! genuine"). Type B has no Double coins and excludes "all genuine".
//! Weighing a type A set yields one type A child (balance) and two type
//! B children; weighing a type B set yields three type B children.

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;
use crate::hypothesis::{Coin, HypothesisSet};

/// Group label of a single coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinClass {
    Equal,
    More,
    Less,
    Double,
}

/// Structural shape of a classification, selecting the planner formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    TypeA,
    TypeB,
}

/// Coin groups for one hypothesis set. Each group lists coins in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether "no counterfeit" is still possible.
    pub all_equal: bool,
    pub equal: Vec<Coin>,
    pub more: Vec<Coin>,
    pub less: Vec<Coin>,
    pub double: Vec<Coin>,
}

impl Classification {
    pub fn group(&self, class: CoinClass) -> &[Coin] {
        match class {
            CoinClass::Equal => &self.equal,
            CoinClass::More => &self.more,
            CoinClass::Less => &self.less,
            CoinClass::Double => &self.double,
        }
    }

    /// Number of hypotheses described by this classification.
    pub fn possibilities(&self) -> usize {
        self.more.len() + self.less.len() + 2 * self.double.len() + usize::from(self.all_equal)
    }

    pub fn shape(&self) -> Result<Shape, InvariantError> {
        let no_single = self.more.is_empty() && self.less.is_empty();
        if no_single && (self.all_equal || !self.double.is_empty()) {
            return Ok(Shape::TypeA);
        }
        if self.double.is_empty() && !self.all_equal {
            return Ok(Shape::TypeB);
        }
        Err(InvariantError::UnknownShape {
            more: self.more.len(),
            less: self.less.len(),
            double: self.double.len(),
            all_equal: self.all_equal,
        })
    }
}

/// Classify coins `1..=n` against `hypotheses`.
///
/// Hypotheses naming coins outside `1..=n` are ignored.
pub fn classify(hypotheses: &HypothesisSet, n: Coin) -> Classification {
    // Index 0 is unused; coins are 1-based.
    let mut heavy = vec![false; n as usize + 1];
    let mut light = vec![false; n as usize + 1];
    let mut all_equal = false;

    for h in hypotheses.iter() {
        match h.coin() {
            None => all_equal = true,
            Some(coin) if coin <= n => {
                if h.raw() > 0 {
                    heavy[coin as usize] = true;
                } else {
                    light[coin as usize] = true;
                }
            }
            Some(_) => {}
        }
    }

    let mut cfg = Classification {
        all_equal,
        ..Classification::default()
    };
    for coin in 1..=n {
        let i = coin as usize;
        match (heavy[i], light[i]) {
            (true, true) => cfg.double.push(coin),
            (true, false) => cfg.more.push(coin),
            (false, true) => cfg.less.push(coin),
            (false, false) => cfg.equal.push(coin),
        }
    }
    cfg
}
