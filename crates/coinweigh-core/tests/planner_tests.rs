use coinweigh_core::classify::{classify, Shape};
use coinweigh_core::planner::{plan, split_counts};
use coinweigh_core::weigh::weigh;
use coinweigh_core::{Coin, Hypothesis, HypothesisSet, Selection};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Coins `1..=n_more` may be heavy, the next `n_less` may be light, and
/// three more are known genuine.
fn type_b_set(n_more: u32, n_less: u32) -> (HypothesisSet, Coin) {
    let set = (1..=n_more)
        .map(Hypothesis::heavy)
        .chain((n_more + 1..=n_more + n_less).map(Hypothesis::light))
        .collect();
    (set, n_more + n_less + 3)
}

fn assert_type_b_balanced(n_more: u32, n_less: u32) {
    let (set, n) = type_b_set(n_more, n_less);
    let cfg = classify(&set, n);
    assert_eq!(cfg.shape(), Ok(Shape::TypeB));
    let selection = plan(&cfg).unwrap_or_else(|e| panic!("({n_more}, {n_less}): {e}"));
    let sizes = weigh(&set, &selection).sizes();
    let max = *sizes.iter().max().unwrap();
    let min = *sizes.iter().min().unwrap();
    assert!(
        max - min <= 1,
        "({n_more}, {n_less}) split into {:?}",
        sizes
    );
}

#[test]
fn test_type_b_small_grid_is_balanced() {
    for n_more in 0..30 {
        for n_less in 0..30 {
            if n_more + n_less >= 2 {
                assert_type_b_balanced(n_more, n_less);
            }
        }
    }
}

#[test]
fn test_type_b_sampled_is_balanced() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..300 {
        let n_more = rng.gen_range(0..200);
        let n_less = rng.gen_range(2..200);
        assert_type_b_balanced(n_more, n_less);
    }
}

#[test]
fn test_split_counts_arms_are_equal() {
    for n_more in 0..50usize {
        for n_less in 0..50usize {
            let c = split_counts(n_more, n_less);
            let left = c.n1 + c.n2 + (-c.l).max(0);
            let right = n_more as i64 - c.n1 + c.k + c.l.max(0);
            assert_eq!(left, right, "({n_more}, {n_less}) -> {:?}", c);
        }
    }
}

#[test]
fn test_weigh_partitions_random_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let n: Coin = rng.gen_range(3..40);
        let mut hypotheses: Vec<Hypothesis> = HypothesisSet::initial(n).iter().collect();
        hypotheses.shuffle(&mut rng);
        let keep = rng.gen_range(0..=hypotheses.len());
        let set: HypothesisSet = hypotheses.into_iter().take(keep).collect();

        let mut coins: Vec<Coin> = (1..=n).collect();
        coins.shuffle(&mut rng);
        let per_arm = rng.gen_range(1..=n as usize / 2);
        let selection = Selection::new(
            coins[..per_arm].to_vec(),
            coins[per_arm..2 * per_arm].to_vec(),
        )
        .unwrap();

        let split = weigh(&set, &selection);
        assert_eq!(split.sizes().iter().sum::<usize>(), set.len());
        for h in set.iter() {
            let hits = [&split.more, &split.equal, &split.less]
                .iter()
                .filter(|child| child.contains(h))
                .count();
            assert_eq!(hits, 1, "{h} routed {hits} times");
        }
    }
}
