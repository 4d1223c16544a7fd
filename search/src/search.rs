//! Search entry points and the breadth-first expansion loop.
//!
//! Three searches share one skeleton (pop the oldest entry, expand it through
//! [`neighbors`], enqueue at `depth + 1`):
//!
//! - [`shortest_flips`] with the cache disabled: naive BFS, no visited set.
//! - [`shortest_flips`] with the cache enabled: each stack enqueued once.
//! - [`goal_eccentricity`]: one cached BFS rooted at the goal that runs until
//!   the frontier empties. Flip is an involution, so the flip graph is
//!   undirected and the deepest level reached is the pancake number.
//!
//! No I/O happens inside any loop here; instrumentation goes to the
//! caller-owned [`SearchCountersV1`].

use std::collections::BTreeMap;

use pancake_kernel::carrier::stack::StackV1;
use pancake_kernel::operators::flip::{flip, neighbors, FlipFailure};

use crate::counters::SearchCountersV1;
use crate::error::SearchError;
use crate::frontier::BreadthFirstFrontier;
use crate::policy::SearchPolicyV1;

/// Why a per-stack search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal was dequeued at `distance`.
    GoalReached { distance: u32 },
    /// The dequeue budget ran out before the goal was dequeued.
    DequeueBudgetExceeded { budget: u64 },
}

/// Result of a single per-stack search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathV1 {
    /// The stack the search started from.
    pub start: StackV1,
    /// How the search ended.
    pub termination: TerminationReasonV1,
    /// Dequeues performed by this search alone.
    pub dequeued: u64,
    /// Largest frontier length observed.
    pub frontier_high_water: u64,
    /// Distinct stacks enqueued, when the visited set was in use.
    pub visited: Option<u64>,
}

impl ShortestPathV1 {
    /// Minimum number of flips, if the goal was reached.
    #[must_use]
    pub fn distance(&self) -> Option<u32> {
        match self.termination {
            TerminationReasonV1::GoalReached { distance } => Some(distance),
            TerminationReasonV1::DequeueBudgetExceeded { .. } => None,
        }
    }
}

/// Minimum number of flips that sort `start`.
///
/// With [`CacheModeV1::Enabled`](crate::policy::CacheModeV1::Enabled) the
/// root and every first-time neighbor enter the visited set (counted in
/// `first_time_enqueued`) and every neighbor examined is counted in
/// `edges_examined`. With the cache disabled only `dequeued` moves.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] before any step is taken.
/// - [`SearchError::GoalUnreachable`] if the frontier empties without the
///   goal, which indicates a defect.
pub fn shortest_flips(
    start: &StackV1,
    policy: &SearchPolicyV1,
    counters: &mut SearchCountersV1,
) -> Result<ShortestPathV1, SearchError> {
    policy.validate()?;

    let cached = policy.cache.is_enabled();
    let mut frontier = if cached {
        counters.first_time_enqueued += 1;
        BreadthFirstFrontier::with_visited_set(start.clone())
    } else {
        BreadthFirstFrontier::without_visited_set(start.clone())
    };
    let mut dequeued: u64 = 0;

    let termination = loop {
        if dequeued >= policy.max_dequeues {
            break TerminationReasonV1::DequeueBudgetExceeded {
                budget: policy.max_dequeues,
            };
        }
        let Some(current) = frontier.pop() else {
            return Err(SearchError::GoalUnreachable {
                start: start.to_string(),
                dequeued,
            });
        };
        dequeued += 1;
        counters.dequeued += 1;

        if current.stack.is_goal() {
            break TerminationReasonV1::GoalReached {
                distance: current.depth,
            };
        }

        let child_depth = current.depth + 1;
        for (_cut, next) in neighbors(&current.stack) {
            if cached {
                counters.edges_examined += 1;
                if frontier.push(next, child_depth) {
                    counters.first_time_enqueued += 1;
                }
            } else {
                frontier.push(next, child_depth);
            }
        }
    };

    Ok(ShortestPathV1 {
        start: start.clone(),
        termination,
        dequeued,
        frontier_high_water: frontier.high_water(),
        visited: frontier.visited_count().map(|n| n as u64),
    })
}

/// Result of the single BFS rooted at the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccentricityV1 {
    /// Stack size searched.
    pub stack_size: usize,
    /// Greatest distance from the goal; equals the pancake number.
    pub eccentricity: u32,
    /// `depth_histogram[d]` = number of stacks exactly `d` flips from the goal.
    pub depth_histogram: Vec<u64>,
    /// The first stack dequeued at the greatest distance.
    pub witness: StackV1,
    /// Distinct stacks reached (`n!` for a connected graph).
    pub states_reached: u64,
    /// Largest frontier length observed.
    pub frontier_high_water: u64,
}

/// Eccentricity of the goal stack of size `n` in the flip graph.
///
/// Runs one cached BFS from the goal until the frontier is exhausted.
/// Exhaustion is the normal end state here.
///
/// # Errors
///
/// Returns [`SearchError::InvalidStackSize`] if `n` exceeds the maximum
/// stack size.
pub fn goal_eccentricity(
    n: usize,
    counters: &mut SearchCountersV1,
) -> Result<EccentricityV1, SearchError> {
    let goal = StackV1::goal(n)?;
    let mut frontier = BreadthFirstFrontier::with_visited_set(goal.clone());
    counters.first_time_enqueued += 1;

    let mut depth_histogram: Vec<u64> = Vec::new();
    let mut eccentricity = 0u32;
    let mut witness = goal;

    while let Some(current) = frontier.pop() {
        counters.dequeued += 1;
        let depth = current.depth as usize;
        if depth_histogram.len() <= depth {
            depth_histogram.resize(depth + 1, 0);
        }
        depth_histogram[depth] += 1;

        for (_cut, next) in neighbors(&current.stack) {
            counters.edges_examined += 1;
            if frontier.push(next, current.depth + 1) {
                counters.first_time_enqueued += 1;
            }
        }

        if current.depth > eccentricity {
            eccentricity = current.depth;
            witness = current.stack;
        }
    }

    Ok(EccentricityV1 {
        stack_size: n,
        eccentricity,
        depth_histogram,
        witness,
        states_reached: frontier.visited_count().map_or(0, |v| v as u64),
        frontier_high_water: frontier.high_water(),
    })
}

/// An optimal sequence of cuts that sorts `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSequenceV1 {
    pub start: StackV1,
    /// Cut positions in application order.
    pub cuts: Vec<usize>,
}

impl FlipSequenceV1 {
    /// Number of flips in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Whether `start` was already sorted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Apply every cut to `start` in order and return the final stack.
    ///
    /// # Errors
    ///
    /// Returns [`FlipFailure`] if a cut is out of range for the stack.
    pub fn replay(&self) -> Result<StackV1, FlipFailure> {
        self.cuts
            .iter()
            .try_fold(self.start.clone(), |stack, &cut| flip(&stack, cut))
    }
}

/// Shortest flip sequence from `start` to the goal.
///
/// Cached BFS that records, for each first-time stack, the parent it was
/// reached from and the cut used. The path is rebuilt by walking parents
/// back from the goal.
///
/// # Errors
///
/// Returns [`SearchError::GoalUnreachable`] if the frontier empties without
/// the goal, which indicates a defect.
pub fn shortest_flip_sequence(
    start: &StackV1,
    counters: &mut SearchCountersV1,
) -> Result<FlipSequenceV1, SearchError> {
    let mut frontier = BreadthFirstFrontier::with_visited_set(start.clone());
    counters.first_time_enqueued += 1;
    let mut parents: BTreeMap<StackV1, (StackV1, usize)> = BTreeMap::new();
    let mut dequeued = 0u64;

    while let Some(current) = frontier.pop() {
        dequeued += 1;
        counters.dequeued += 1;

        if current.stack.is_goal() {
            let mut cuts = Vec::new();
            let mut cursor = current.stack;
            while let Some((parent, cut)) = parents.remove(&cursor) {
                cuts.push(cut);
                cursor = parent;
            }
            cuts.reverse();
            return Ok(FlipSequenceV1 {
                start: start.clone(),
                cuts,
            });
        }

        for (cut, next) in neighbors(&current.stack) {
            counters.edges_examined += 1;
            if frontier.push(next.clone(), current.depth + 1) {
                counters.first_time_enqueued += 1;
                parents.insert(next, (current.stack.clone(), cut));
            }
        }
    }

    Err(SearchError::GoalUnreachable {
        start: start.to_string(),
        dequeued,
    })
}
