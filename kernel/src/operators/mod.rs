//! Operators module: the flip operator and neighbor enumeration.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod flip;
