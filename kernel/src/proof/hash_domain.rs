//! Typed domain separators for canonical hashing.
//!
//! Every hash computed by the workspace selects a [`HashDomain`]; the raw
//! prefix bytes live only here. Each prefix is null-terminated so that no
//! prefix is a byte-prefix of another.

/// Typed domain separator for [`super::hash::canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashDomain {
    /// Stack fingerprints (witness permutations in reports).
    Stack,
    /// Single-search result reports.
    SearchReport,
    /// Full-run report content.
    RunReport,
    /// Benchmark determinism guard.
    BenchGuard,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        Self::Stack,
        Self::SearchReport,
        Self::RunReport,
        Self::BenchGuard,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Stack => b"PANCAKE::STACK::V1\0",
            Self::SearchReport => b"PANCAKE::SEARCH_REPORT::V1\0",
            Self::RunReport => b"PANCAKE::RUN_REPORT::V1\0",
            Self::BenchGuard => b"PANCAKE::BENCH_GUARD::V1\0",
        }
    }
}

impl core::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}
