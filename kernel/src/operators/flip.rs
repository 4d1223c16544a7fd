//! `flip()`: the prefix-reversal operator, and neighbor enumeration.
//!
//! A flip at cut `k` reverses the top `k` pancakes and leaves the rest in
//! place. The operator never mutates its input.
//!
//! Flipping twice at the same cut restores the original stack, so every
//! edge of the flip graph has a reverse edge with the same cut. Searches
//! rooted at the goal rely on this: distance(goal, s) == distance(s, goal).

use crate::carrier::stack::StackV1;

/// Typed failure for flip application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlipFailure {
    /// The cut must satisfy `1 <= cut <= len`.
    #[error("cut {cut} is outside 1..={len}")]
    CutOutOfRange { cut: usize, len: usize },
}

/// Reverse the top `cut` pancakes of `stack`.
///
/// # Errors
///
/// Returns [`FlipFailure::CutOutOfRange`] unless `1 <= cut <= stack.len()`.
pub fn flip(stack: &StackV1, cut: usize) -> Result<StackV1, FlipFailure> {
    if cut == 0 || cut > stack.len() {
        return Err(FlipFailure::CutOutOfRange {
            cut,
            len: stack.len(),
        });
    }
    Ok(flip_in_range(stack, cut))
}

fn flip_in_range(stack: &StackV1, cut: usize) -> StackV1 {
    let mut pancakes = stack.as_slice().to_vec();
    pancakes[..cut].reverse();
    StackV1::from_permutation_unchecked(pancakes)
}

/// Enumerate the flip neighbors of `stack`.
///
/// Yields exactly `len - 1` `(cut, neighbor)` pairs for cut `2..=len` in
/// increasing cut order. Cut 1 is a no-op and is never yielded, so the flip
/// graph has no self-loops.
#[must_use]
pub fn neighbors(stack: &StackV1) -> Neighbors<'_> {
    Neighbors {
        stack,
        next_cut: 2,
    }
}

/// Iterator returned by [`neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    stack: &'a StackV1,
    next_cut: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, StackV1);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_cut > self.stack.len() {
            return None;
        }
        let cut = self.next_cut;
        self.next_cut += 1;
        Some((cut, flip_in_range(self.stack, cut)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.stack.len() + 1).saturating_sub(self.next_cut);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
