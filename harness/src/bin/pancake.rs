//! `pancake`: compute the pancake number for a stack size.
//!
//! Usage: `pancake [SIZE] [--no-cache] [--strategy per-permutation|eccentricity]
//!         [--max-permutations K] [--max-dequeues K] [--time-limit-secs S]
//!         [--solve STACK] [--json]`
//!
//! Results go to stdout; logs go to stderr (filter with `RUST_LOG`).
//!
//! Exit codes: 0 success, 1 runtime error, 2 usage error, 70 internal
//! invariant violation.

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use pancake_harness::cancel::CancelToken;
use pancake_harness::report::RunReportV1;
use pancake_harness::runner::{run, RunConfigV1, RunError, RunOutcomeV1, StrategyV1};
use pancake_kernel::carrier::stack::StackV1;
use pancake_kernel::operators::flip::flip;
use pancake_kernel::proof::canon::canonical_json_bytes;
use pancake_search::counters::SearchCountersV1;
use pancake_search::policy::{CacheModeV1, SearchPolicyV1, DEFAULT_MAX_DEQUEUES};
use pancake_search::search::shortest_flip_sequence;

const EXIT_RUNTIME: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_INVARIANT: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// One breadth-first search per stack.
    PerPermutation,
    /// One breadth-first search from the sorted stack.
    Eccentricity,
}

#[derive(Debug, Parser)]
#[command(
    name = "pancake",
    version,
    about = "Compute pancake numbers by exhaustive breadth-first search"
)]
struct Cli {
    /// Stack size. Prompted for on stdin when omitted.
    size: Option<usize>,

    /// Search without the visited-set cache (naive baseline).
    /// Per-permutation strategy only.
    #[arg(long)]
    no_cache: bool,

    #[arg(long, value_enum, default_value_t = Strategy::PerPermutation)]
    strategy: Strategy,

    /// Stop after this many stacks.
    #[arg(long, value_name = "K")]
    max_permutations: Option<u64>,

    /// Dequeue budget for each per-stack search.
    #[arg(long, value_name = "K", default_value_t = DEFAULT_MAX_DEQUEUES)]
    max_dequeues: u64,

    /// Cancel the run after this many seconds.
    #[arg(long, value_name = "S")]
    time_limit_secs: Option<u64>,

    /// Print a shortest flip sequence for one stack, e.g. `3,1,2`.
    #[arg(
        long,
        value_name = "STACK",
        conflicts_with_all = ["size", "no_cache", "strategy", "max_permutations", "time_limit_secs"]
    )]
    solve: Option<StackV1>,

    /// Print canonical JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_cache && cli.strategy == Strategy::Eccentricity {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--no-cache only applies to --strategy per-permutation",
            )
            .exit();
    }

    if let Some(stack) = &cli.solve {
        return solve(stack, cli.json);
    }

    let size = match cli.size {
        Some(size) => size,
        None => match prompt_size() {
            Ok(size) => size,
            Err(detail) => {
                eprintln!("error: {detail}");
                return ExitCode::from(EXIT_USAGE);
            }
        },
    };

    let config = RunConfigV1 {
        stack_size: size,
        strategy: match cli.strategy {
            Strategy::PerPermutation => StrategyV1::PerPermutation(SearchPolicyV1 {
                cache: if cli.no_cache {
                    CacheModeV1::Disabled
                } else {
                    CacheModeV1::Enabled
                },
                max_dequeues: cli.max_dequeues,
            }),
            Strategy::Eccentricity => StrategyV1::GoalEccentricity,
        },
        max_permutations: cli.max_permutations,
    };

    let cancel = CancelToken::new();
    if let Some(secs) = cli.time_limit_secs {
        let deadline = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(secs));
            deadline.cancel();
        });
    }

    let outcome = match run(&config, &cancel) {
        Ok(outcome) => outcome,
        Err(e) => return run_error_exit(&e),
    };

    let report = match RunReportV1::from_outcome(&outcome) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "report serialization failed");
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_RUNTIME);
        }
    };

    if cli.json {
        println!("{}", report.as_text());
        println!("digest={}", report.digest);
    } else {
        print_text(&outcome);
    }
    ExitCode::SUCCESS
}

fn prompt_size() -> Result<usize, String> {
    print!("Stack size? ");
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| format!("stack size must be a non-negative integer, got {:?}", line.trim()))
}

fn run_error_exit(e: &RunError) -> ExitCode {
    if e.is_invariant_violation() {
        error!(error = %e, "internal invariant violated");
        eprintln!("fatal: {e}");
        return ExitCode::from(EXIT_INVARIANT);
    }
    eprintln!("error: {e}");
    match e {
        RunError::InvalidStackSize { .. } => ExitCode::from(EXIT_USAGE),
        RunError::Search(_) => ExitCode::from(EXIT_RUNTIME),
    }
}

fn print_text(outcome: &RunOutcomeV1) {
    println!("pancake number: {}", outcome.pancake_number);
    println!("Total states evaluated: {}", outcome.counters.dequeued);
    let cached = match &outcome.config.strategy {
        StrategyV1::PerPermutation(policy) => policy.cache.is_enabled(),
        StrategyV1::GoalEccentricity => true,
    };
    if cached {
        println!(
            "Cache hits (edges examined): {}",
            outcome.counters.edges_examined
        );
        println!(
            "Cache misses (first-time states enqueued): {}",
            outcome.counters.first_time_enqueued
        );
    }
    println!("Worst-case stack: {}", outcome.witness);
    if outcome.config.strategy == StrategyV1::GoalEccentricity {
        println!("Goal eccentricity histogram:");
        for (depth, count) in outcome.depth_histogram.iter().enumerate() {
            println!("  {depth} flips: {count}");
        }
    }
    if !outcome.is_exact() {
        eprintln!(
            "warning: run stopped early after {} of {} stacks; {} is a lower bound",
            outcome.permutations_searched, outcome.total_permutations, outcome.pancake_number
        );
    }
}

fn solve(stack: &StackV1, json: bool) -> ExitCode {
    let mut counters = SearchCountersV1::new();
    let sequence = match shortest_flip_sequence(stack, &mut counters) {
        Ok(sequence) => sequence,
        Err(e) => return run_error_exit(&RunError::Search(e)),
    };
    if json {
        return match canonical_json_bytes(&sequence.to_json_value()) {
            Ok(bytes) => {
                println!("{}", String::from_utf8_lossy(&bytes));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(EXIT_RUNTIME)
            }
        };
    }
    println!("flips: {}", sequence.len());
    let mut current = stack.clone();
    println!("  {current}");
    for &cut in &sequence.cuts {
        current = match flip(&current, cut) {
            Ok(next) => next,
            Err(e) => {
                eprintln!("fatal: {e}");
                return ExitCode::from(EXIT_INVARIANT);
            }
        };
        println!("  flip {cut} -> {current}");
    }
    ExitCode::SUCCESS
}
