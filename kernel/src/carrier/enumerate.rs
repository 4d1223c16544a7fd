//! Exhaustive enumeration of every stack of a given size.
//!
//! Stacks are produced in lexicographic order starting from the goal stack,
//! so the first item is always `(1, 2, ..., n)` and the last is
//! `(n, ..., 2, 1)`. Size 0 yields exactly one (empty) stack.

use crate::carrier::stack::{StackError, StackV1};

/// `n!`, or `None` if it does not fit in a `u64`.
#[must_use]
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, u64::checked_mul)
}

/// Iterator over all `n!` stacks of size `n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<u8>>,
}

impl Permutations {
    /// Start enumeration at the goal stack of size `n`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::TooLarge`] if `n` exceeds the maximum stack size.
    pub fn new(n: usize) -> Result<Self, StackError> {
        let goal = StackV1::goal(n)?;
        Ok(Self {
            next: Some(goal.as_slice().to_vec()),
        })
    }
}

impl Iterator for Permutations {
    type Item = StackV1;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if advance_lexicographic(&mut successor) {
            self.next = Some(successor);
        }
        Some(StackV1::from_permutation_unchecked(current))
    }
}

/// Rearrange `a` into its lexicographic successor.
///
/// Returns `false` (leaving `a` untouched) when `a` is already the last
/// arrangement.
fn advance_lexicographic(a: &mut [u8]) -> bool {
    if a.len() < 2 {
        return false;
    }
    // Pivot: rightmost i with a[i] < a[i + 1].
    let Some(pivot) = (0..a.len() - 1).rev().find(|&i| a[i] < a[i + 1]) else {
        return false;
    };
    // Rightmost element greater than the pivot; the suffix is non-increasing.
    let Some(successor) = (pivot + 1..a.len()).rev().find(|&j| a[j] > a[pivot]) else {
        return false;
    };
    a.swap(pivot, successor);
    a[pivot + 1..].reverse();
    true
}
