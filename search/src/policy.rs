//! Search policy types.

use crate::error::SearchError;

/// Default per-search dequeue budget.
///
/// A cached search dequeues at most `n!` states, so this only binds for
/// stacks of 12 or more, or for the naive mode, whose frontier grows with
/// path multiplicity.
pub const DEFAULT_MAX_DEQUEUES: u64 = 50_000_000;

/// Whether a per-stack search keeps a visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheModeV1 {
    /// Naive BFS: every neighbor is enqueued, states may repeat.
    Disabled,
    /// A neighbor is enqueued only the first time it is seen.
    #[default]
    Enabled,
}

impl CacheModeV1 {
    /// Stable string form used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
        }
    }

    /// Whether the visited set is in use.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Configuration for a single per-stack search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Visited-set mode.
    pub cache: CacheModeV1,
    /// Hard cap on dequeues within one search.
    pub max_dequeues: u64,
}

impl SearchPolicyV1 {
    /// Policy for the naive baseline.
    #[must_use]
    pub fn naive() -> Self {
        Self {
            cache: CacheModeV1::Disabled,
            ..Self::default()
        }
    }

    /// Reject policies that cannot make progress.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_dequeues` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_dequeues == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_dequeues must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON form bound into run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cache": self.cache.as_str(),
            "max_dequeues": self.max_dequeues,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            cache: CacheModeV1::Enabled,
            max_dequeues: DEFAULT_MAX_DEQUEUES,
        }
    }
}
