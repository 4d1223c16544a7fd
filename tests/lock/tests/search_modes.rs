//! Agreement between the naive, cached and goal-rooted searches.
//!
//! Proves:
//! 1. Naive and cached searches return the same distance for every stack
//! 2. The cache never costs dequeues, per stack and in aggregate
//! 3. Aggregate counters are pinned for small sizes
//! 4. Goal-rooted counters are exactly `[n!, n!(n-1), n!]`
//! 5. The flip graph is undirected: distances from the goal equal distances to it

use pancake_harness::cancel::CancelToken;
use pancake_harness::runner::{run, RunConfigV1, StrategyV1};
use pancake_kernel::carrier::enumerate::{factorial, Permutations};
use pancake_kernel::carrier::stack::StackV1;
use pancake_search::counters::SearchCountersV1;
use pancake_search::policy::SearchPolicyV1;
use pancake_search::search::{goal_eccentricity, shortest_flips, ShortestPathV1};

fn search(stack: &StackV1, policy: &SearchPolicyV1) -> (ShortestPathV1, SearchCountersV1) {
    let mut counters = SearchCountersV1::new();
    let result = shortest_flips(stack, policy, &mut counters).unwrap();
    (result, counters)
}

fn inverse(stack: &StackV1) -> StackV1 {
    let mut out = vec![0u8; stack.len()];
    for (position, &value) in stack.as_slice().iter().enumerate() {
        out[usize::from(value) - 1] = u8::try_from(position + 1).unwrap();
    }
    StackV1::new(out).unwrap()
}

// ---------------------------------------------------------------------------
// 1-2. Naive vs cached, per stack
// ---------------------------------------------------------------------------

#[test]
fn naive_and_cached_agree_per_stack() {
    for n in 2..=5 {
        for stack in Permutations::new(n).unwrap() {
            let (naive, naive_counters) = search(&stack, &SearchPolicyV1::naive());
            let (cached, cached_counters) = search(&stack, &SearchPolicyV1::default());
            assert_eq!(naive.distance(), cached.distance(), "stack {stack}");
            assert!(
                cached.dequeued <= naive.dequeued,
                "cache cost dequeues on {stack}: {} > {}",
                cached.dequeued,
                naive.dequeued
            );
            assert_eq!(naive_counters.edges_examined, 0);
            assert_eq!(naive_counters.first_time_enqueued, 0);
            assert_eq!(
                cached.visited,
                Some(cached_counters.first_time_enqueued),
                "misses must equal the visited-set size"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2-3. Aggregate counters
// ---------------------------------------------------------------------------

#[test]
fn aggregate_counters_are_pinned() {
    let cached = [
        (3, [21, 30, 25]),
        (4, [300, 828, 435]),
        (5, [7260, 28560, 11085]),
    ];
    let naive_dequeues = [(3, 27), (4, 534), (5, 23398)];

    for ((n, expected), (_, naive_expected)) in cached.into_iter().zip(naive_dequeues) {
        let outcome = run(&RunConfigV1::new(n), &CancelToken::new()).unwrap();
        let c = outcome.counters;
        assert_eq!(
            [c.dequeued, c.edges_examined, c.first_time_enqueued],
            expected,
            "n={n}"
        );

        let naive = run(
            &RunConfigV1 {
                strategy: StrategyV1::PerPermutation(SearchPolicyV1::naive()),
                ..RunConfigV1::new(n)
            },
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(naive.counters.dequeued, naive_expected, "n={n}");
        assert!(c.first_time_enqueued <= naive.counters.dequeued, "n={n}");
        assert!(c.dequeued <= naive.counters.dequeued, "n={n}");
    }
}

#[test]
fn every_edge_is_examined_after_a_dequeue() {
    for n in 2..=5 {
        let outcome = run(&RunConfigV1::new(n), &CancelToken::new()).unwrap();
        let c = outcome.counters;
        let per_stack = (n as u64) - 1;
        let non_goal_dequeues = c.dequeued - outcome.total_permutations;
        assert_eq!(c.edges_examined, non_goal_dequeues * per_stack, "n={n}");
    }
}

// ---------------------------------------------------------------------------
// 4. Goal-rooted counters
// ---------------------------------------------------------------------------

#[test]
fn goal_rooted_counters_are_exact() {
    for n in 2..=7 {
        let total = factorial(n).unwrap();
        let mut counters = SearchCountersV1::new();
        let result = goal_eccentricity(n, &mut counters).unwrap();
        assert_eq!(counters.dequeued, total, "n={n}");
        assert_eq!(counters.edges_examined, total * (n as u64 - 1), "n={n}");
        assert_eq!(counters.first_time_enqueued, total, "n={n}");
        assert_eq!(result.states_reached, total, "n={n}");
    }
}

// ---------------------------------------------------------------------------
// 5. Symmetry
// ---------------------------------------------------------------------------

#[test]
fn goal_rooted_histogram_matches_per_stack_distances() {
    for n in 2..=6 {
        let per_perm = run(&RunConfigV1::new(n), &CancelToken::new()).unwrap();
        let mut counters = SearchCountersV1::new();
        let ecc = goal_eccentricity(n, &mut counters).unwrap();
        assert_eq!(per_perm.depth_histogram, ecc.depth_histogram, "n={n}");
        assert_eq!(per_perm.pancake_number, ecc.eccentricity, "n={n}");
    }
}

#[test]
fn inverse_stack_has_same_distance() {
    for stack in Permutations::new(5).unwrap() {
        let (forward, _) = search(&stack, &SearchPolicyV1::default());
        let (backward, _) = search(&inverse(&stack), &SearchPolicyV1::default());
        assert_eq!(forward.distance(), backward.distance(), "stack {stack}");
    }
}
