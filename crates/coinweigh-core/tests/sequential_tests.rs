use coinweigh_core::{
    lower_bound, solve_sequential, solve_sequential_with, DecisionNode, HypothesisSet, Outcome,
    SolveError, SolverConfig, Verdict,
};

fn child_sizes(node: &DecisionNode) -> Vec<usize> {
    Outcome::ALL
        .iter()
        .filter_map(|o| node.child(*o))
        .map(DecisionNode::hypothesis_count)
        .collect()
}

fn assert_balanced_below(node: &DecisionNode, is_root: bool) {
    if node.selection().is_none() {
        return;
    }
    let sizes = child_sizes(node);
    if !is_root {
        let max = sizes.iter().max().unwrap();
        let min = sizes.iter().min().unwrap();
        assert!(max - min <= 1, "unbalanced weighing: {:?}", sizes);
    }
    for outcome in Outcome::ALL {
        assert_balanced_below(node.child(outcome).unwrap(), false);
    }
}

#[test]
fn test_too_few_coins_is_input_error() {
    for n in 0..3 {
        let err = solve_sequential(n).unwrap_err();
        assert!(matches!(err, SolveError::TooFewCoins { .. }));
        assert!(err.is_input_error());
    }
}

#[test]
fn test_too_many_coins_is_input_error() {
    let config = SolverConfig {
        max_coins: 10,
        ..SolverConfig::default()
    };
    let err = solve_sequential_with(11, &config).unwrap_err();
    assert!(matches!(err, SolveError::TooManyCoins { n: 11, max: 10 }));
    assert!(err.is_input_error());
}

#[test]
fn test_known_weighing_counts() {
    for (n, expected) in [(3, 2), (4, 3), (12, 3), (13, 4), (15, 4), (39, 4), (40, 5)] {
        let solution = solve_sequential(n).unwrap();
        assert_eq!(solution.weighings, expected, "n = {n}");
        assert_eq!(solution.tree.depth(), expected, "n = {n}");
    }
}

#[test]
fn test_weighing_count_is_optimal() {
    for n in 3..=130 {
        let solution = solve_sequential_with(n, &SolverConfig::serial()).unwrap();
        assert_eq!(solution.weighings, lower_bound(n), "n = {n}");
    }
}

#[test]
fn test_every_hypothesis_is_identified() {
    for n in [3, 4, 5, 12, 13, 15, 27, 40] {
        let solution = solve_sequential(n).unwrap();
        let all = HypothesisSet::initial(n);
        assert_eq!(solution.tree.hypothesis_count(), all.len());
        for h in all.iter() {
            assert_eq!(
                solution.tree.replay(h),
                Verdict::from_hypothesis(h),
                "n = {n}, truth = {h}"
            );
        }
    }
}

#[test]
fn test_weighings_after_the_first_are_balanced() {
    for n in [4, 12, 13, 14, 39, 40, 41, 100] {
        let solution = solve_sequential(n).unwrap();
        assert_balanced_below(&solution.tree, true);
    }
}

#[test]
fn test_twelve_coin_first_weighings() {
    let solution = solve_sequential(12).unwrap();
    let first = solution.tree.selection().unwrap();
    assert_eq!(first.left(), &[1, 2, 3, 4]);
    assert_eq!(first.right(), &[5, 6, 7, 8]);

    // Left heavy: 1..4 may be heavy, 5..8 may be light.
    let tilt = solution.tree.child(Outcome::More).unwrap();
    let second = tilt.selection().unwrap();
    assert_eq!(second.left(), &[1, 2, 5]);
    assert_eq!(second.right(), &[3, 4, 6]);
    assert_eq!(child_sizes(tilt), vec![3, 2, 3]);
}

#[test]
fn test_thirteen_coins_leave_one_unweighed_in_balance_branch() {
    let solution = solve_sequential(13).unwrap();
    assert_eq!(child_sizes(&solution.tree), vec![8, 11, 8]);
}

#[test]
fn test_parallel_and_serial_trees_agree() {
    let eager = SolverConfig {
        parallel_threshold: 0,
        ..SolverConfig::default()
    };
    let a = solve_sequential_with(50, &eager).unwrap();
    let b = solve_sequential_with(50, &SolverConfig::serial()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_solution_serializes_to_json() {
    let solution = solve_sequential(3).unwrap();
    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["coins"], 3);
    assert_eq!(json["weighings"], 2);
    assert_eq!(json["tree"]["node"], "weighing");
    assert_eq!(json["tree"]["selection"]["left"], serde_json::json!([1]));
    assert_eq!(json["tree"]["selection"]["right"], serde_json::json!([2]));
}
