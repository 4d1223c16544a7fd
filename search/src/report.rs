//! JSON forms of search results.
//!
//! Every report is a `serde_json::Value` built field by field, so the shape
//! is explicit and independent of Rust field order. Bytes for hashing or
//! printing always go through
//! [`canonical_json_bytes`](pancake_kernel::proof::canon::canonical_json_bytes).

use pancake_kernel::carrier::stack::StackV1;
use pancake_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pancake_kernel::proof::hash::{canonical_hash, stack_fingerprint, ContentHash};
use pancake_kernel::proof::hash_domain::HashDomain;

use crate::search::{EccentricityV1, FlipSequenceV1, ShortestPathV1, TerminationReasonV1};

/// JSON form of a stack: its pancakes and its fingerprint.
#[must_use]
pub fn stack_to_json(stack: &StackV1) -> serde_json::Value {
    serde_json::json!({
        "fingerprint": stack_fingerprint(stack).as_str(),
        "pancakes": stack.as_slice(),
    })
}

/// Digest of canonical search-report bytes.
#[must_use]
pub fn search_report_digest(bytes: &[u8]) -> ContentHash {
    canonical_hash(HashDomain::SearchReport, bytes)
}

/// JSON form of a termination reason, tagged by `type`.
#[must_use]
pub fn termination_reason_to_json(reason: &TerminationReasonV1) -> serde_json::Value {
    match reason {
        TerminationReasonV1::GoalReached { distance } => {
            serde_json::json!({"distance": distance, "type": "goal_reached"})
        }
        TerminationReasonV1::DequeueBudgetExceeded { budget } => {
            serde_json::json!({"budget": budget, "type": "dequeue_budget_exceeded"})
        }
    }
}

impl ShortestPathV1 {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "dequeued": self.dequeued,
            "frontier_high_water": self.frontier_high_water,
            "start": stack_to_json(&self.start),
            "termination_reason": termination_reason_to_json(&self.termination),
            "visited": self.visited,
        })
    }
}

impl EccentricityV1 {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_histogram": self.depth_histogram,
            "eccentricity": self.eccentricity,
            "frontier_high_water": self.frontier_high_water,
            "stack_size": self.stack_size,
            "states_reached": self.states_reached,
            "witness": stack_to_json(&self.witness),
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// [`search_report_digest`] of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(search_report_digest(&self.to_canonical_json_bytes()?))
    }
}

impl FlipSequenceV1 {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cuts": self.cuts,
            "flips": self.cuts.len(),
            "start": stack_to_json(&self.start),
        })
    }
}
