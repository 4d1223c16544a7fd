//! Proof module: canonical hashing and canonical JSON bytes for reports.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
