//! Run orchestration: stack size in, pancake number out.
//!
//! Two strategies produce the same answer:
//!
//! - [`StrategyV1::PerPermutation`]: one [`shortest_flips`] per stack, in
//!   lexicographic order, keeping the running maximum. Cancellation and the
//!   permutation budget are checked between stacks.
//! - [`StrategyV1::GoalEccentricity`]: a single [`goal_eccentricity`] search.
//!
//! Sizes 0 and 1 have exactly one stack, already sorted; the runner answers
//! 0 without searching.

use pancake_kernel::carrier::enumerate::{factorial, Permutations};
use pancake_kernel::carrier::stack::{StackV1, MAX_STACK_SIZE};
use pancake_search::counters::SearchCountersV1;
use pancake_search::error::SearchError;
use pancake_search::policy::SearchPolicyV1;
use pancake_search::search::{goal_eccentricity, shortest_flips, TerminationReasonV1};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;

/// Stacks between progress log lines.
const PROGRESS_INTERVAL: u64 = 1 << 14;

/// Error during a run. Runs that stop early are not errors; see
/// [`RunTerminationV1`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Stack size above the supported maximum.
    #[error("stack size {n} is not supported (maximum {max})")]
    InvalidStackSize { n: usize, max: usize },
    /// The search layer failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl RunError {
    /// Whether this error signals a defect rather than bad input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Search(e) if e.is_invariant_violation())
    }
}

/// How the pancake number is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyV1 {
    /// One search per stack, with the given policy.
    PerPermutation(SearchPolicyV1),
    /// One search rooted at the goal.
    GoalEccentricity,
}

impl StrategyV1 {
    /// JSON form bound into run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::PerPermutation(policy) => serde_json::json!({
                "policy": policy.to_json_value(),
                "type": "per_permutation",
            }),
            Self::GoalEccentricity => serde_json::json!({"type": "goal_eccentricity"}),
        }
    }
}

impl Default for StrategyV1 {
    fn default() -> Self {
        Self::PerPermutation(SearchPolicyV1::default())
    }
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfigV1 {
    /// Number of pancakes.
    pub stack_size: usize,
    pub strategy: StrategyV1,
    /// Stop after this many stacks (per-permutation strategy only).
    pub max_permutations: Option<u64>,
}

impl RunConfigV1 {
    /// Default strategy and no budget for `stack_size` pancakes.
    #[must_use]
    pub fn new(stack_size: usize) -> Self {
        Self {
            stack_size,
            ..Self::default()
        }
    }

    /// JSON form bound into run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_permutations": self.max_permutations,
            "stack_size": self.stack_size,
            "strategy": self.strategy.to_json_value(),
        })
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTerminationV1 {
    /// Every stack was accounted for; the pancake number is exact.
    Completed,
    /// The cancel token was set.
    Cancelled { after_permutations: u64 },
    /// `max_permutations` stacks were searched.
    PermutationBudgetExceeded { budget: u64 },
    /// A single search ran out of dequeues.
    DequeueBudgetExceeded { stack: StackV1, budget: u64 },
}

impl RunTerminationV1 {
    /// JSON form bound into run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Completed => serde_json::json!({"type": "completed"}),
            Self::Cancelled { after_permutations } => serde_json::json!({
                "after_permutations": after_permutations,
                "type": "cancelled",
            }),
            Self::PermutationBudgetExceeded { budget } => serde_json::json!({
                "budget": budget,
                "type": "permutation_budget_exceeded",
            }),
            Self::DequeueBudgetExceeded { stack, budget } => serde_json::json!({
                "budget": budget,
                "stack": stack.as_slice(),
                "type": "dequeue_budget_exceeded",
            }),
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcomeV1 {
    pub config: RunConfigV1,
    /// Largest distance observed; exact only when [`Self::is_exact`].
    pub pancake_number: u32,
    /// A stack at distance `pancake_number`.
    pub witness: StackV1,
    /// `depth_histogram[d]` = stacks found exactly `d` flips from the goal.
    pub depth_histogram: Vec<u64>,
    /// Counters accumulated over the whole run.
    pub counters: SearchCountersV1,
    /// Stacks whose distance is accounted for.
    pub permutations_searched: u64,
    /// `n!`.
    pub total_permutations: u64,
    pub termination: RunTerminationV1,
}

impl RunOutcomeV1 {
    /// Whether every stack was accounted for.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.termination == RunTerminationV1::Completed
    }
}

/// Compute the pancake number described by `config`.
///
/// # Errors
///
/// - [`RunError::InvalidStackSize`] before any search if the size is too large.
/// - [`RunError::Search`] if the policy is invalid or a search detects an
///   internal invariant violation.
pub fn run(config: &RunConfigV1, cancel: &CancelToken) -> Result<RunOutcomeV1, RunError> {
    run_observed(config, cancel, |_, _| {})
}

/// [`run`], calling `observe(stack, distance)` after each per-permutation
/// search completes. The goal-eccentricity strategy never calls it.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_observed<F>(
    config: &RunConfigV1,
    cancel: &CancelToken,
    observe: F,
) -> Result<RunOutcomeV1, RunError>
where
    F: FnMut(&StackV1, u32),
{
    let n = config.stack_size;
    let (Some(total_permutations), Ok(goal)) = (factorial(n), StackV1::goal(n)) else {
        return Err(RunError::InvalidStackSize {
            n,
            max: MAX_STACK_SIZE,
        });
    };
    if let StrategyV1::PerPermutation(policy) = &config.strategy {
        policy.validate()?;
    }

    info!(
        stack_size = n,
        total_permutations,
        strategy = ?config.strategy,
        "pancake run starting"
    );

    if n <= 1 {
        return Ok(RunOutcomeV1 {
            config: config.clone(),
            pancake_number: 0,
            witness: goal,
            depth_histogram: vec![1],
            counters: SearchCountersV1::new(),
            permutations_searched: total_permutations,
            total_permutations,
            termination: RunTerminationV1::Completed,
        });
    }

    let outcome = match &config.strategy {
        StrategyV1::PerPermutation(policy) => {
            run_per_permutation(config, policy, total_permutations, cancel, observe)?
        }
        StrategyV1::GoalEccentricity => run_goal_eccentricity(config, total_permutations, cancel)?,
    };

    if outcome.is_exact() {
        info!(
            pancake_number = outcome.pancake_number,
            dequeued = outcome.counters.dequeued,
            "pancake run completed"
        );
    } else {
        warn!(
            termination = ?outcome.termination,
            lower_bound = outcome.pancake_number,
            "pancake run stopped early"
        );
    }
    Ok(outcome)
}

fn run_per_permutation(
    config: &RunConfigV1,
    policy: &SearchPolicyV1,
    total_permutations: u64,
    cancel: &CancelToken,
    mut observe: impl FnMut(&StackV1, u32),
) -> Result<RunOutcomeV1, RunError> {
    let mut counters = SearchCountersV1::new();
    let mut depth_histogram: Vec<u64> = Vec::new();
    let mut best: Option<(u32, StackV1)> = None;
    let mut searched: u64 = 0;
    let mut termination = RunTerminationV1::Completed;

    for stack in Permutations::new(config.stack_size).map_err(SearchError::from)? {
        if cancel.is_cancelled() {
            termination = RunTerminationV1::Cancelled {
                after_permutations: searched,
            };
            break;
        }
        if let Some(budget) = config.max_permutations {
            if searched >= budget {
                termination = RunTerminationV1::PermutationBudgetExceeded { budget };
                break;
            }
        }

        let result = shortest_flips(&stack, policy, &mut counters)?;
        let distance = match result.termination {
            TerminationReasonV1::GoalReached { distance } => distance,
            TerminationReasonV1::DequeueBudgetExceeded { budget } => {
                termination = RunTerminationV1::DequeueBudgetExceeded { stack, budget };
                break;
            }
        };

        searched += 1;
        let depth = distance as usize;
        if depth_histogram.len() <= depth {
            depth_histogram.resize(depth + 1, 0);
        }
        depth_histogram[depth] += 1;
        observe(&stack, distance);
        if best.as_ref().is_none_or(|(d, _)| distance > *d) {
            best = Some((distance, stack));
        }
        if searched % PROGRESS_INTERVAL == 0 {
            debug!(
                searched,
                total_permutations,
                dequeued = counters.dequeued,
                "per-permutation progress"
            );
        }
    }

    let (pancake_number, witness) = match best {
        Some(found) => found,
        None => (0, StackV1::goal(config.stack_size).map_err(SearchError::from)?),
    };
    Ok(RunOutcomeV1 {
        config: config.clone(),
        pancake_number,
        witness,
        depth_histogram,
        counters,
        permutations_searched: searched,
        total_permutations,
        termination,
    })
}

fn run_goal_eccentricity(
    config: &RunConfigV1,
    total_permutations: u64,
    cancel: &CancelToken,
) -> Result<RunOutcomeV1, RunError> {
    let n = config.stack_size;
    if cancel.is_cancelled() {
        return Ok(RunOutcomeV1 {
            config: config.clone(),
            pancake_number: 0,
            witness: StackV1::goal(n).map_err(SearchError::from)?,
            depth_histogram: Vec::new(),
            counters: SearchCountersV1::new(),
            permutations_searched: 0,
            total_permutations,
            termination: RunTerminationV1::Cancelled {
                after_permutations: 0,
            },
        });
    }

    let mut counters = SearchCountersV1::new();
    let result = goal_eccentricity(n, &mut counters)?;
    debug!(
        states_reached = result.states_reached,
        frontier_high_water = result.frontier_high_water,
        "goal eccentricity search finished"
    );
    Ok(RunOutcomeV1 {
        config: config.clone(),
        pancake_number: result.eccentricity,
        witness: result.witness,
        depth_histogram: result.depth_histogram,
        counters,
        permutations_searched: result.states_reached,
        total_permutations,
        termination: RunTerminationV1::Completed,
    })
}
