//! Coin selections for one weighing and the three balance outcomes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;
use crate::hypothesis::Coin;

/// Result of one weighing, read from the left arm's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Left arm heavier.
    More,
    Equal,
    /// Left arm lighter.
    Less,
}

impl Outcome {
    /// Branch order used throughout: More, Equal, Less.
    pub const ALL: [Outcome; 3] = [Outcome::More, Outcome::Equal, Outcome::Less];

    /// Ternary digit of this outcome in a static code: More=1, Less=2, Equal=0.
    pub fn digit(self) -> u64 {
        match self {
            Outcome::Equal => 0,
            Outcome::More => 1,
            Outcome::Less => 2,
        }
    }

    pub fn from_digit(digit: u64) -> Option<Self> {
        match digit {
            0 => Some(Outcome::Equal),
            1 => Some(Outcome::More),
            2 => Some(Outcome::Less),
            _ => None,
        }
    }

    /// Short label used when printing trees.
    pub fn symbol(self) -> char {
        match self {
            Outcome::More => '+',
            Outcome::Equal => '=',
            Outcome::Less => '-',
        }
    }

    pub(crate) fn from_readings(left: i32, right: i32) -> Self {
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Outcome::More,
            std::cmp::Ordering::Equal => Outcome::Equal,
            std::cmp::Ordering::Less => Outcome::Less,
        }
    }
}

/// Which arm a coin sits on during a weighing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Left,
    Right,
}

/// Coins for the left and right arms of one weighing.
///
/// Only constructed through [`Selection::new`], which checks that both
/// arms are non-empty, equally sized and disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    left: Vec<Coin>,
    right: Vec<Coin>,
}

impl Selection {
    pub fn new(left: Vec<Coin>, right: Vec<Coin>) -> Result<Self, InvariantError> {
        if left.len() != right.len() {
            return Err(InvariantError::UnequalArms {
                left: left.len(),
                right: right.len(),
            });
        }
        if left.is_empty() {
            return Err(InvariantError::EmptySelection);
        }
        let on_left: HashSet<Coin> = left.iter().copied().collect();
        if let Some(&coin) = right.iter().find(|c| on_left.contains(c)) {
            return Err(InvariantError::OverlappingSelection { coin });
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &[Coin] {
        &self.left
    }

    pub fn right(&self) -> &[Coin] {
        &self.right
    }

    /// Coins per arm.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Always false for a validated selection; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn pan_of(&self, coin: Coin) -> Option<Pan> {
        if self.left.contains(&coin) {
            Some(Pan::Left)
        } else if self.right.contains(&coin) {
            Some(Pan::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selection() {
        let sel = Selection::new(vec![1, 2], vec![3, 4]).unwrap();
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.pan_of(2), Some(Pan::Left));
        assert_eq!(sel.pan_of(4), Some(Pan::Right));
        assert_eq!(sel.pan_of(5), None);
    }

    #[test]
    fn test_rejects_unequal_arms() {
        assert_eq!(
            Selection::new(vec![1, 2], vec![3]),
            Err(InvariantError::UnequalArms { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            Selection::new(vec![], vec![]),
            Err(InvariantError::EmptySelection)
        );
    }

    #[test]
    fn test_rejects_overlap() {
        assert_eq!(
            Selection::new(vec![1, 2], vec![2, 3]),
            Err(InvariantError::OverlappingSelection { coin: 2 })
        );
    }

    #[test]
    fn test_outcome_digits() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_digit(outcome.digit()), Some(outcome));
        }
        assert_eq!(Outcome::from_digit(3), None);
    }
}
