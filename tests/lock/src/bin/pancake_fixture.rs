//! Binary that runs the pancake pipeline and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `pancake_fixture`
//!
//! Output: key=value lines (see source for format).

use pancake_harness::cancel::CancelToken;
use pancake_harness::report::RunReportV1;
use pancake_harness::runner::{run, RunConfigV1, StrategyV1};
use pancake_search::counters::SearchCountersV1;
use pancake_search::search::goal_eccentricity;

fn main() {
    let cancel = CancelToken::new();

    for n in 0..=6 {
        let outcome = run(&RunConfigV1::new(n), &cancel).expect("per-permutation run failed");
        println!("pancake_number_{n}={}", outcome.pancake_number);
    }

    let per_perm = run(&RunConfigV1::new(5), &cancel).expect("per-permutation run failed");
    let report = RunReportV1::from_outcome(&per_perm).expect("report serialization failed");
    println!("run_report_digest={}", report.digest.as_str());
    println!("witness={}", per_perm.witness);
    println!(
        "counters={},{},{}",
        per_perm.counters.dequeued,
        per_perm.counters.edges_examined,
        per_perm.counters.first_time_enqueued
    );

    let ecc_config = RunConfigV1 {
        strategy: StrategyV1::GoalEccentricity,
        ..RunConfigV1::new(7)
    };
    let ecc = run(&ecc_config, &cancel).expect("eccentricity run failed");
    let ecc_report = RunReportV1::from_outcome(&ecc).expect("report serialization failed");
    println!("eccentricity_run_report_digest={}", ecc_report.digest.as_str());

    let mut counters = SearchCountersV1::new();
    let search = goal_eccentricity(6, &mut counters).expect("eccentricity search failed");
    let search_digest = search.digest().expect("search report serialization failed");
    println!("search_report_digest={}", search_digest.as_str());
    println!(
        "depth_histogram_6={}",
        search
            .depth_histogram
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );
}
