//! Pancake Harness: top-level orchestration of the search engine.
//!
//! The harness turns a stack size into a pancake number: it enumerates all
//! `n!` stacks and runs one search per stack, or runs the single goal-rooted
//! search once, and packages the result as a canonical, digest-bound report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `pancake_search`. It owns cancellation, run budgets, logging and output.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod report;
pub mod runner;
