//! Static (non-adaptive) strategy built from base-3 heavy-codes.
//!
//! Coin `i` gets a heavy-code: the outcome digits the fixed weighings
//! produce if coin `i` is the heavy counterfeit. Its light-code is the
//! complement. Weighing `j` puts every coin whose code has digit 1 at
//! position `k - 1 - j` on the left arm and every coin with digit 2 on
//! the right arm.
//!
//! The saturated case `(3^k - 1) / 2 - 1` coins is built recursively from
//! the `k - 1` solution; smaller counts start from the previous saturated
//! table and add one code at a time.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;
use crate::hypothesis::{Coin, Hypothesis, Sign, Verdict};
use crate::selection::{Outcome, Selection};
use crate::ternary::{complement, digit, overlay_complement, pow3};

/// Largest coin count `k` static weighings can handle.
pub fn saturated_count(k: u32) -> usize {
    ((pow3(k) - 1) / 2 - 1) as usize
}

/// Smallest value in `1..=limit` that is neither a code nor the
/// complement of one.
pub fn missing(codes: &[u64], limit: u64) -> Result<u64, InvariantError> {
    let mut taken = vec![false; limit as usize + 1];
    for &code in codes {
        for value in [code, complement(code)] {
            if let Some(slot) = taken.get_mut(value as usize) {
                *slot = true;
            }
        }
    }
    (1..=limit)
        .find(|&v| !taken[v as usize])
        .ok_or(InvariantError::NoMissingCode { limit })
}

/// Heavy-codes for the saturated case of `k` weighings.
///
/// From the `k - 1` table `b` with `c = 3^(k-1)`: every code of `b` with
/// a leading 0, 1 and 2; then `2c`, the missing value `m` of `b`, and
/// `c + complement(m)`. The `k = 2` table is fixed.
pub fn build_base(k: u32) -> Result<Vec<u64>, InvariantError> {
    match k {
        0 | 1 => Err(InvariantError::UnsupportedWeighings { weighings: k }),
        2 => Ok(vec![1, 8, 3]),
        _ => {
            let prev = build_base(k - 1)?;
            let c = pow3(k - 1);
            let m = missing(&prev, c - 1)?;

            let mut codes = Vec::with_capacity(3 * prev.len() + 3);
            codes.extend_from_slice(&prev);
            codes.extend(prev.iter().map(|&x| x + c));
            codes.extend(prev.iter().map(|&x| x + 2 * c));
            codes.push(2 * c);
            codes.push(m);
            codes.push(c + complement(m));
            codes.sort_unstable();
            Ok(codes)
        }
    }
}

/// Add one code to a valid table for `k` weighings.
///
/// Takes the smallest free value `m` and the first existing code with
/// zero digits wherever `m` is non-zero; that code has those digits set
/// to the complement of `m`'s, and `m` joins the table. This keeps every
/// weighing balanced.
pub fn add_one(codes: &mut Vec<u64>, k: u32) -> Result<(), InvariantError> {
    let used: HashSet<u64> = codes.iter().flat_map(|&c| [c, complement(c)]).collect();

    for m in 1..pow3(k) {
        if used.contains(&m) {
            continue;
        }
        for j in 0..codes.len() {
            let Some(t) = overlay_complement(m, codes[j], k) else {
                continue;
            };
            if t != 0 && !used.contains(&t) {
                codes[j] = t;
                codes.push(m);
                codes.sort_unstable();
                return Ok(());
            }
        }
    }

    Err(InvariantError::NoExtension {
        size: codes.len(),
        weighings: k,
    })
}

/// Build the static table for `n` coins.
pub fn weigh_static(n: u32) -> Result<CodeTable, InvariantError> {
    let target = n as usize;
    let mut k = 2;
    let mut base = 0;
    loop {
        let bound = saturated_count(k);
        if bound <= target {
            base = bound;
        }
        if bound >= target {
            break;
        }
        k += 1;
    }

    let mut codes = build_base(if base == target { k } else { k - 1 })?;
    while codes.len() < target {
        add_one(&mut codes, k)?;
    }
    tracing::debug!(coins = n, weighings = k, "built static code table");
    Ok(CodeTable { weighings: k, codes })
}

/// Heavy-codes for every coin plus the number of weighings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable {
    weighings: u32,
    /// `codes[i - 1]` is the heavy-code of coin `i`.
    codes: Vec<u64>,
}

impl CodeTable {
    /// Wrap an existing table. Call [`CodeTable::validate`] before use.
    pub fn new(weighings: u32, codes: Vec<u64>) -> Self {
        Self { weighings, codes }
    }

    pub fn weighings(&self) -> u32 {
        self.weighings
    }

    pub fn codes(&self) -> &[u64] {
        &self.codes
    }

    pub fn coins(&self) -> usize {
        self.codes.len()
    }

    pub fn heavy_code(&self, coin: Coin) -> Option<u64> {
        let idx = (coin as usize).checked_sub(1)?;
        self.codes.get(idx).copied()
    }

    pub fn light_code(&self, coin: Coin) -> Option<u64> {
        self.heavy_code(coin).map(complement)
    }

    /// Code the fixed weighings produce when `h` is true.
    pub fn code_for(&self, h: Hypothesis) -> Option<u64> {
        match (h.coin(), h.sign()) {
            (Some(coin), Some(Sign::Heavy)) => self.heavy_code(coin),
            (Some(coin), Some(Sign::Light)) => self.light_code(coin),
            _ => Some(0),
        }
    }

    /// Check codes are in range, distinct, and never the complement of
    /// another code.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let top = pow3(self.weighings);
        let mut seen: HashMap<u64, usize> = HashMap::with_capacity(self.codes.len());
        for (i, &code) in self.codes.iter().enumerate() {
            if code == 0 || code >= top {
                return Err(InvariantError::InvalidCodeTable {
                    reason: format!("coin {} has code {code} outside 1..{top}", i + 1),
                });
            }
            if let Some(j) = seen.get(&code).or_else(|| seen.get(&complement(code))) {
                return Err(InvariantError::InvalidCodeTable {
                    reason: format!("coins {} and {} collide", j + 1, i + 1),
                });
            }
            seen.insert(code, i);
        }
        Ok(())
    }

    /// The fixed weighings, first weighing first.
    pub fn selections(&self) -> Result<Vec<Selection>, InvariantError> {
        (0..self.weighings)
            .map(|index| {
                let pos = self.weighings - 1 - index;
                let mut left = Vec::new();
                let mut right = Vec::new();
                for (i, &code) in self.codes.iter().enumerate() {
                    let coin = i as Coin + 1;
                    match digit(code, pos) {
                        1 => left.push(coin),
                        2 => right.push(coin),
                        _ => {}
                    }
                }
                if left.is_empty() || left.len() != right.len() {
                    return Err(InvariantError::UnbalancedWeighing {
                        index: index as usize,
                        left: left.len(),
                        right: right.len(),
                    });
                }
                Selection::new(left, right)
            })
            .collect()
    }

    /// Outcomes of the fixed weighings, in order, when `h` is true.
    pub fn outcomes_for(&self, h: Hypothesis) -> Option<Vec<Outcome>> {
        let code = self.code_for(h)?;
        Some(
            (0..self.weighings)
                .rev()
                .map(|pos| match digit(code, pos) {
                    1 => Outcome::More,
                    2 => Outcome::Less,
                    _ => Outcome::Equal,
                })
                .collect(),
        )
    }

    /// Identify the counterfeit from the observed outcomes.
    pub fn decode(&self, outcomes: &[Outcome]) -> Verdict {
        if outcomes.len() != self.weighings as usize {
            return Verdict::Impossible;
        }
        let code = outcomes.iter().fold(0, |acc, o| acc * 3 + o.digit());
        if code == 0 {
            return Verdict::Genuine;
        }
        self.lookup()
            .into_iter()
            .find(|(c, _)| *c == code)
            .map(|(_, h)| Verdict::from_hypothesis(h))
            .unwrap_or(Verdict::Impossible)
    }

    /// Every reachable code with its hypothesis, sorted by code.
    pub fn lookup(&self) -> Vec<(u64, Hypothesis)> {
        let mut table = Vec::with_capacity(2 * self.codes.len() + 1);
        table.push((0, Hypothesis::GENUINE));
        for (i, &code) in self.codes.iter().enumerate() {
            let coin = i as Coin + 1;
            table.push((code, Hypothesis::heavy(coin)));
            table.push((complement(code), Hypothesis::light(coin)));
        }
        table.sort_unstable_by_key(|(code, _)| *code);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturated_counts() {
        assert_eq!(saturated_count(2), 3);
        assert_eq!(saturated_count(3), 12);
        assert_eq!(saturated_count(4), 39);
        assert_eq!(saturated_count(5), 120);
    }

    #[test]
    fn test_missing_skips_codes_and_complements() {
        // 1, 8, 3 and complements 2, 4, 6 are taken.
        assert_eq!(missing(&[1, 8, 3], 8), Ok(5));
        assert_eq!(
            missing(&[1, 8, 3], 4),
            Err(InvariantError::NoMissingCode { limit: 4 })
        );
    }

    #[test]
    fn test_build_base_three_weighings() {
        assert_eq!(
            build_base(3).unwrap(),
            vec![1, 3, 5, 8, 10, 12, 16, 17, 18, 19, 21, 26]
        );
    }

    #[test]
    fn test_build_base_rejects_single_weighing() {
        assert_eq!(
            build_base(1),
            Err(InvariantError::UnsupportedWeighings { weighings: 1 })
        );
    }

    #[test]
    fn test_add_one_from_two_weighing_base() {
        let mut codes = build_base(2).unwrap();
        add_one(&mut codes, 3).unwrap();
        assert_eq!(codes, vec![3, 8, 9, 19]);
    }

    #[test]
    fn test_validate_detects_complement_collision() {
        // 5 = (1 2), complement 7 = (2 1).
        let table = CodeTable::new(2, vec![5, 7, 1]);
        assert!(matches!(
            table.validate(),
            Err(InvariantError::InvalidCodeTable { .. })
        ));
    }

    #[test]
    fn test_decode_wrong_length_is_impossible() {
        let table = weigh_static(12).unwrap();
        assert_eq!(table.decode(&[Outcome::More]), Verdict::Impossible);
    }
}
