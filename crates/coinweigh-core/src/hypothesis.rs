//! Hypotheses about the counterfeit coin and ordered sets of them.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based coin index.
pub type Coin = u32;

/// Whether a counterfeit coin is heavier or lighter than a genuine one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Heavy,
    Light,
}

/// One candidate explanation of the scale readings.
///
/// Encoded as a signed integer: `0` means no counterfeit, `+j` means
/// coin `j` is heavy, `-j` means coin `j` is light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypothesis(i32);

impl Hypothesis {
    /// All coins are genuine.
    pub const GENUINE: Self = Self(0);

    pub fn heavy(coin: Coin) -> Self {
        Self(coin as i32)
    }

    pub fn light(coin: Coin) -> Self {
        Self(-(coin as i32))
    }

    pub fn new(coin: Coin, sign: Sign) -> Self {
        match sign {
            Sign::Heavy => Self::heavy(coin),
            Sign::Light => Self::light(coin),
        }
    }

    pub fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    /// The suspected coin, or `None` for [`Hypothesis::GENUINE`].
    pub fn coin(self) -> Option<Coin> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.unsigned_abs())
        }
    }

    pub fn sign(self) -> Option<Sign> {
        match self.0 {
            0 => None,
            x if x > 0 => Some(Sign::Heavy),
            _ => Some(Sign::Light),
        }
    }

    pub fn is_genuine(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.coin(), self.sign()) {
            (Some(coin), Some(Sign::Heavy)) => write!(f, "{coin}+"),
            (Some(coin), Some(Sign::Light)) => write!(f, "{coin}-"),
            _ => f.write_str("=="),
        }
    }
}

/// What a resolved hypothesis set (at most one member) tells us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// No hypothesis survived; this outcome cannot occur.
    Impossible,
    /// All coins are genuine.
    Genuine,
    /// The named coin is the counterfeit.
    Counterfeit { coin: Coin, sign: Sign },
}

impl Verdict {
    pub fn from_hypothesis(h: Hypothesis) -> Self {
        match (h.coin(), h.sign()) {
            (Some(coin), Some(sign)) => Verdict::Counterfeit { coin, sign },
            _ => Verdict::Genuine,
        }
    }

    /// The hypothesis this verdict stands for, if any.
    pub fn hypothesis(self) -> Option<Hypothesis> {
        match self {
            Verdict::Impossible => None,
            Verdict::Genuine => Some(Hypothesis::GENUINE),
            Verdict::Counterfeit { coin, sign } => Some(Hypothesis::new(coin, sign)),
        }
    }
}

/// Ordered, duplicate-free set of hypotheses.
///
/// Order carries no meaning for correctness but is preserved through
/// every weighing so that generated strategies are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisSet {
    items: Vec<Hypothesis>,
}

impl HypothesisSet {
    /// Every possibility for `n` coins: `0, 1..=n, -1..=-n` (size `2n + 1`).
    pub fn initial(n: Coin) -> Self {
        let mut items = Vec::with_capacity(2 * n as usize + 1);
        items.push(Hypothesis::GENUINE);
        items.extend((1..=n).map(Hypothesis::heavy));
        items.extend((1..=n).map(Hypothesis::light));
        Self { items }
    }

    /// Build from members already known to be distinct. Used by the
    /// weighing simulator, whose outputs partition a duplicate-free input.
    pub(crate) fn from_distinct(items: Vec<Hypothesis>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hypothesis> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[Hypothesis] {
        &self.items
    }

    pub fn contains(&self, h: Hypothesis) -> bool {
        self.items.contains(&h)
    }

    /// The verdict for a resolved set; `None` while two or more remain.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.items.as_slice() {
            [] => Some(Verdict::Impossible),
            [h] => Some(Verdict::from_hypothesis(*h)),
            _ => None,
        }
    }
}

impl FromIterator<Hypothesis> for HypothesisSet {
    /// Keeps the first occurrence of each hypothesis.
    fn from_iter<I: IntoIterator<Item = Hypothesis>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let items = iter.into_iter().filter(|h| seen.insert(*h)).collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a HypothesisSet {
    type Item = &'a Hypothesis;
    type IntoIter = std::slice::Iter<'a, Hypothesis>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
