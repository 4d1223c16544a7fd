//! Diagnostic counters, passed explicitly into every search.
//!
//! Counters are observational only; no search decision reads them.

use std::ops::AddAssign;

/// Accumulator for search instrumentation.
///
/// The caller owns the accumulator and decides its scope: one per full
/// computation, one per search, or one shared across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCountersV1 {
    /// States popped from the frontier (including the goal pop).
    pub dequeued: u64,
    /// Neighbors examined against the visited set ("cache hits").
    ///
    /// Only counted when a visited set is in use.
    pub edges_examined: u64,
    /// States inserted into the visited set, root included ("cache misses").
    ///
    /// Only counted when a visited set is in use.
    pub first_time_enqueued: u64,
}

impl SearchCountersV1 {
    /// A zeroed accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been counted.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// JSON form bound into reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "dequeued": self.dequeued,
            "edges_examined": self.edges_examined,
            "first_time_enqueued": self.first_time_enqueued,
        })
    }
}

impl AddAssign for SearchCountersV1 {
    fn add_assign(&mut self, rhs: Self) {
        self.dequeued += rhs.dequeued;
        self.edges_examined += rhs.edges_examined;
        self.first_time_enqueued += rhs.first_time_enqueued;
    }
}
