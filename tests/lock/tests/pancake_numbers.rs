//! Known pancake numbers, depth histograms and witnesses.
//!
//! Proves:
//! 1. Every strategy reports the published pancake numbers for small sizes
//! 2. Depth histograms cover all `n!` stacks
//! 3. Witnesses really sit at the reported distance
//! 4. Sizes 0 and 1 short-circuit to 0

use pancake_harness::cancel::CancelToken;
use pancake_harness::runner::{run, RunConfigV1, RunOutcomeV1, StrategyV1};
use pancake_kernel::carrier::enumerate::factorial;
use pancake_kernel::carrier::stack::StackV1;
use pancake_search::counters::SearchCountersV1;
use pancake_search::policy::SearchPolicyV1;
use pancake_search::search::shortest_flips;

/// `P(n)` for n = 0..=7 (OEIS A058986).
const KNOWN: [u32; 8] = [0, 0, 1, 3, 4, 5, 7, 8];

fn run_with(n: usize, strategy: StrategyV1) -> RunOutcomeV1 {
    let config = RunConfigV1 {
        strategy,
        ..RunConfigV1::new(n)
    };
    run(&config, &CancelToken::new()).unwrap()
}

fn stack(text: &str) -> StackV1 {
    text.parse().unwrap()
}

// ---------------------------------------------------------------------------
// 1. Known values
// ---------------------------------------------------------------------------

#[test]
fn cached_per_permutation_matches_known_values() {
    for (n, &expected) in KNOWN.iter().enumerate().take(7) {
        let outcome = run_with(n, StrategyV1::default());
        assert!(outcome.is_exact(), "n={n} did not complete");
        assert_eq!(outcome.pancake_number, expected, "n={n}");
    }
}

#[test]
fn naive_per_permutation_matches_known_values() {
    for (n, &expected) in KNOWN.iter().enumerate().take(6) {
        let outcome = run_with(n, StrategyV1::PerPermutation(SearchPolicyV1::naive()));
        assert!(outcome.is_exact(), "n={n} did not complete");
        assert_eq!(outcome.pancake_number, expected, "n={n}");
    }
}

#[test]
fn goal_eccentricity_matches_known_values() {
    for (n, &expected) in KNOWN.iter().enumerate() {
        let outcome = run_with(n, StrategyV1::GoalEccentricity);
        assert!(outcome.is_exact(), "n={n} did not complete");
        assert_eq!(outcome.pancake_number, expected, "n={n}");
    }
}

// ---------------------------------------------------------------------------
// 2. Histograms
// ---------------------------------------------------------------------------

#[test]
fn eccentricity_histograms() {
    let cases: [(usize, &[u64]); 4] = [
        (3, &[1, 2, 2, 1]),
        (4, &[1, 3, 6, 11, 3]),
        (5, &[1, 4, 12, 35, 48, 20]),
        (6, &[1, 5, 20, 79, 199, 281, 133, 2]),
    ];
    for (n, expected) in cases {
        let outcome = run_with(n, StrategyV1::GoalEccentricity);
        assert_eq!(outcome.depth_histogram, expected, "n={n}");
    }
}

#[test]
fn histograms_cover_every_stack() {
    for n in 2..=6 {
        let total = factorial(n).unwrap();
        for strategy in [StrategyV1::default(), StrategyV1::GoalEccentricity] {
            let outcome = run_with(n, strategy);
            assert_eq!(outcome.depth_histogram.iter().sum::<u64>(), total, "n={n}");
            assert_eq!(outcome.permutations_searched, total, "n={n}");
            assert_eq!(outcome.total_permutations, total, "n={n}");
            assert_eq!(
                outcome.depth_histogram.len(),
                outcome.pancake_number as usize + 1,
                "n={n}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Witnesses
// ---------------------------------------------------------------------------

#[test]
fn per_permutation_witness_is_first_lexicographic_maximum() {
    let cases = [
        (2, "2,1"),
        (3, "1,3,2"),
        (4, "2,4,1,3"),
        (5, "1,3,2,5,4"),
        (6, "4,6,2,5,1,3"),
    ];
    for (n, expected) in cases {
        assert_eq!(run_with(n, StrategyV1::default()).witness, stack(expected), "n={n}");
    }
}

#[test]
fn eccentricity_witness_is_first_dequeued_at_maximum_depth() {
    let cases = [
        (3, "1,3,2"),
        (4, "4,2,3,1"),
        (5, "5,1,3,2,4"),
        (6, "5,3,6,1,4,2"),
        (7, "6,2,4,1,7,3,5"),
    ];
    for (n, expected) in cases {
        assert_eq!(
            run_with(n, StrategyV1::GoalEccentricity).witness,
            stack(expected),
            "n={n}"
        );
    }
}

#[test]
fn witnesses_sit_at_reported_distance() {
    for n in 2..=6 {
        for strategy in [StrategyV1::default(), StrategyV1::GoalEccentricity] {
            let outcome = run_with(n, strategy);
            let mut counters = SearchCountersV1::new();
            let result =
                shortest_flips(&outcome.witness, &SearchPolicyV1::default(), &mut counters)
                    .unwrap();
            assert_eq!(result.distance(), Some(outcome.pancake_number), "n={n}");
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Trivial sizes
// ---------------------------------------------------------------------------

#[test]
fn trivial_sizes_do_not_search() {
    for n in 0..=1 {
        for strategy in [
            StrategyV1::default(),
            StrategyV1::PerPermutation(SearchPolicyV1::naive()),
            StrategyV1::GoalEccentricity,
        ] {
            let outcome = run_with(n, strategy);
            assert_eq!(outcome.pancake_number, 0);
            assert!(outcome.counters.is_zero());
            assert_eq!(outcome.depth_histogram, vec![1]);
            assert!(outcome.is_exact());
        }
    }
}
