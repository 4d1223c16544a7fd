//! Typed search errors.
//!
//! Budget exhaustion is not an error: it is a
//! [`crate::search::TerminationReasonV1`] on an otherwise complete result.

use pancake_kernel::carrier::stack::StackError;

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot drive a search (rejected before any step).
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The goal stack for the requested size could not be built.
    #[error("invalid stack size: {0}")]
    InvalidStackSize(#[from] StackError),
    /// The frontier emptied without reaching the goal.
    ///
    /// The flip graph is connected, so this is an internal defect, never a
    /// property of the input. Callers must treat it as fatal.
    #[error("internal invariant violated: frontier exhausted from {start} after {dequeued} dequeues without reaching the goal")]
    GoalUnreachable { start: String, dequeued: u64 },
}

impl SearchError {
    /// Whether this error signals a defect rather than bad input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::GoalUnreachable { .. })
    }
}
