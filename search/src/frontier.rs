//! Breadth-first frontier with an optional visited set.
//!
//! Entries are served strictly first-in-first-out, which is what makes the
//! first dequeue of any state happen at its shortest distance from the root.
//!
//! The visited set is a `BTreeSet<StackV1>` keyed by stack value (not by
//! entry identity). A stack enters it exactly once, when first enqueued, and
//! is never removed.

use std::collections::{BTreeSet, VecDeque};

use pancake_kernel::carrier::stack::StackV1;

/// A frontier entry: a stack and its distance from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntryV1 {
    pub stack: StackV1,
    pub depth: u32,
}

/// FIFO frontier manager.
///
/// Maintains:
/// - A `VecDeque` of pending entries
/// - An optional `BTreeSet<StackV1>` of every stack ever enqueued
/// - The high-water mark of the queue length
#[derive(Debug)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<FrontierEntryV1>,
    visited: Option<BTreeSet<StackV1>>,
    high_water: u64,
}

impl BreadthFirstFrontier {
    /// A frontier holding `root` at depth 0, whose visited set holds `root`.
    #[must_use]
    pub fn with_visited_set(root: StackV1) -> Self {
        let mut visited = BTreeSet::new();
        visited.insert(root.clone());
        Self::seeded(root, Some(visited))
    }

    /// A frontier holding `root` at depth 0 with no deduplication.
    #[must_use]
    pub fn without_visited_set(root: StackV1) -> Self {
        Self::seeded(root, None)
    }

    fn seeded(root: StackV1, visited: Option<BTreeSet<StackV1>>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(FrontierEntryV1 {
            stack: root,
            depth: 0,
        });
        Self {
            queue,
            visited,
            high_water: 1,
        }
    }

    /// Push a stack at `depth`, marking it visited.
    ///
    /// Returns `false` if a visited set is in use and the stack was already
    /// in it (stack not added). Without a visited set, always enqueues.
    pub fn push(&mut self, stack: StackV1, depth: u32) -> bool {
        if let Some(visited) = self.visited.as_mut() {
            if visited.contains(&stack) {
                return false;
            }
            visited.insert(stack.clone());
        }
        self.queue.push_back(FrontierEntryV1 { stack, depth });
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Pop the oldest entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntryV1> {
        self.queue.pop_front()
    }

    /// Whether `stack` has ever been enqueued (always `false` without a visited set).
    #[cfg(test)]
    fn is_visited(&self, stack: &StackV1) -> bool {
        self.visited.as_ref().is_some_and(|v| v.contains(stack))
    }

    /// Size of the visited set, or `None` when deduplication is off.
    #[must_use]
    pub fn visited_count(&self) -> Option<usize> {
        self.visited.as_ref().map(BTreeSet::len)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
