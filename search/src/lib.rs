//! Pancake Search: exhaustive breadth-first search over the flip graph.
//!
//! This crate provides the search layer. It depends only on
//! `pancake_kernel`; it does NOT depend on `pancake_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pancake_kernel  ←  pancake_search  ←  pancake_harness
//! (stack, flip)      (frontier, BFS)     (runner, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`BreadthFirstFrontier`](frontier::BreadthFirstFrontier): FIFO frontier with optional visited set
//! - [`SearchCountersV1`](counters::SearchCountersV1): injected diagnostic accumulator
//! - [`SearchPolicyV1`](policy::SearchPolicyV1): cache mode and dequeue budget
//! - [`shortest_flips`](search::shortest_flips): distance from one stack to the goal
//! - [`goal_eccentricity`](search::goal_eccentricity): one BFS from the goal over the whole graph
//! - [`shortest_flip_sequence`](search::shortest_flip_sequence): an optimal list of cuts

#![forbid(unsafe_code)]

pub mod counters;
pub mod error;
pub mod frontier;
pub mod policy;
pub mod report;
pub mod search;
