//! `RunReportV1`: the canonical, digest-bound record of a run.
//!
//! The report commits to the configuration (strategy, policy, budgets) as
//! well as the result, so two reports with the same digest were produced
//! under the same conditions.

use pancake_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pancake_kernel::proof::hash::{canonical_hash, ContentHash};
use pancake_kernel::proof::hash_domain::HashDomain;
use pancake_search::report::stack_to_json;

use crate::runner::RunOutcomeV1;

/// Schema identifier written into every report.
pub const RUN_REPORT_SCHEMA_VERSION: &str = "pancake.run_report.v1";

/// A serialized run report and its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportV1 {
    /// Canonical JSON bytes.
    pub bytes: Vec<u8>,
    /// `canonical_hash(HashDomain::RunReport, bytes)`.
    pub digest: ContentHash,
}

impl RunReportV1 {
    /// Build the report for `outcome`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn from_outcome(outcome: &RunOutcomeV1) -> Result<Self, CanonError> {
        let bytes = canonical_json_bytes(&outcome_to_json(outcome))?;
        let digest = report_digest(&bytes);
        Ok(Self { bytes, digest })
    }

    /// The report as UTF-8 text.
    #[must_use]
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Digest of canonical report bytes.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> ContentHash {
    canonical_hash(HashDomain::RunReport, bytes)
}

fn outcome_to_json(outcome: &RunOutcomeV1) -> serde_json::Value {
    serde_json::json!({
        "config": outcome.config.to_json_value(),
        "counters": outcome.counters.to_json_value(),
        "depth_histogram": outcome.depth_histogram,
        "exact": outcome.is_exact(),
        "pancake_number": outcome.pancake_number,
        "permutations_searched": outcome.permutations_searched,
        "schema_version": RUN_REPORT_SCHEMA_VERSION,
        "termination": outcome.termination.to_json_value(),
        "total_permutations": outcome.total_permutations,
        "witness": stack_to_json(&outcome.witness),
    })
}
