//! Carrier module: the permutation value type and its enumeration.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod enumerate;
pub mod stack;
