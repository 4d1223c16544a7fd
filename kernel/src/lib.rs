//! Pancake Kernel: the pure core of the pancake-number search.
//!
//! # API Surface
//!
//! - [`carrier::stack::StackV1`] -- a validated permutation of `1..=n`
//! - [`carrier::enumerate::Permutations`] -- every stack of a given size, in lexicographic order
//! - [`operators::flip::flip`] / [`operators::flip::neighbors`] -- the prefix-reversal operator
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `operators` depends on `carrier`. `proof` hashes carrier
//! values. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
