//! Shared helpers for pancake benchmark suites.

use pancake_harness::cancel::CancelToken;
use pancake_harness::runner::{run, RunConfigV1, RunOutcomeV1, StrategyV1};
use pancake_kernel::proof::canon::canonical_json_bytes;
use pancake_kernel::proof::hash::{canonical_hash, ContentHash};
use pancake_kernel::proof::hash_domain::HashDomain;
use pancake_search::policy::SearchPolicyV1;

/// A named run configuration measured by the macro benchmarks.
pub struct Regime {
    pub name: &'static str,
    pub config: RunConfigV1,
    /// Pancake number the regime must produce.
    pub expected: u32,
}

fn regime(name: &'static str, stack_size: usize, strategy: StrategyV1, expected: u32) -> Regime {
    Regime {
        name,
        config: RunConfigV1 {
            strategy,
            ..RunConfigV1::new(stack_size)
        },
        expected,
    }
}

/// Benchmark regimes, cheapest first.
///
/// Naive search is limited to sizes where it finishes in milliseconds.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        regime("naive/5", 5, StrategyV1::PerPermutation(SearchPolicyV1::naive()), 5),
        regime("cached/5", 5, StrategyV1::default(), 5),
        regime("cached/6", 6, StrategyV1::default(), 7),
        regime("eccentricity/6", 6, StrategyV1::GoalEccentricity, 7),
        regime("eccentricity/7", 7, StrategyV1::GoalEccentricity, 8),
        regime("eccentricity/8", 8, StrategyV1::GoalEccentricity, 9),
    ]
}

/// Run a regime to completion.
///
/// # Panics
///
/// Panics if the run fails or produces the wrong pancake number. Benchmark
/// results for a wrong answer are meaningless.
#[must_use]
pub fn run_regime(regime: &Regime) -> RunOutcomeV1 {
    let outcome = run(&regime.config, &CancelToken::new()).expect("benchmark run failed");
    assert!(outcome.is_exact(), "{}: run did not complete", regime.name);
    assert_eq!(
        outcome.pancake_number, regime.expected,
        "{}: wrong pancake number",
        regime.name
    );
    outcome
}

/// Digest over the answer-bearing parts of an outcome.
///
/// Two builds that disagree on this digest are not measuring the same work.
///
/// # Panics
///
/// Panics if canonical serialization fails.
#[must_use]
pub fn bench_guard(outcome: &RunOutcomeV1) -> ContentHash {
    let value = serde_json::json!({
        "counters": outcome.counters.to_json_value(),
        "depth_histogram": outcome.depth_histogram,
        "pancake_number": outcome.pancake_number,
        "stack_size": outcome.config.stack_size,
    });
    let bytes = canonical_json_bytes(&value).expect("canonical guard bytes");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}
