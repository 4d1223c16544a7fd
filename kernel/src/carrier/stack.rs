//! `StackV1`: an immutable permutation of `1..=n`.
//!
//! Position 0 is the top of the stack; a flip at cut `k` reverses
//! positions `0..k`.
//!
//! # Equality semantics
//!
//! `StackV1` derives `Eq`, `Ord` and `Hash` over its element bytes, so two
//! stacks are equal iff every position matches. Search visited sets key on
//! the value directly; there is no identity-based comparison anywhere.

use std::fmt;
use std::str::FromStr;

/// Largest supported stack size.
///
/// `20!` is the largest factorial that fits in a `u64`, which bounds every
/// counter the search accumulates over a full computation.
pub const MAX_STACK_SIZE: usize = 20;

/// Typed failure for stack construction. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// More elements than [`MAX_STACK_SIZE`].
    #[error("stack of {len} pancakes exceeds the maximum of {max}")]
    TooLarge { len: usize, max: usize },
    /// An element outside `1..=len`.
    #[error("pancake {value} is outside 1..={len}")]
    OutOfRange { value: u8, len: usize },
    /// An element that appears more than once.
    #[error("pancake {value} appears more than once")]
    Duplicate { value: u8 },
    /// A token in the textual form that is not a pancake size.
    #[error("cannot parse {token:?} as a pancake size")]
    Parse { token: String },
}

/// A permutation of `1..=n` (`n` may be zero).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackV1 {
    pancakes: Vec<u8>,
}

impl StackV1 {
    /// Validate and wrap a sequence of pancake sizes.
    ///
    /// # Errors
    ///
    /// Returns [`StackError`] if the sequence is longer than
    /// [`MAX_STACK_SIZE`] or is not a permutation of `1..=len`.
    pub fn new(pancakes: Vec<u8>) -> Result<Self, StackError> {
        let len = pancakes.len();
        if len > MAX_STACK_SIZE {
            return Err(StackError::TooLarge {
                len,
                max: MAX_STACK_SIZE,
            });
        }
        let mut seen = [false; MAX_STACK_SIZE + 1];
        for &value in &pancakes {
            let idx = usize::from(value);
            if idx == 0 || idx > len {
                return Err(StackError::OutOfRange { value, len });
            }
            if seen[idx] {
                return Err(StackError::Duplicate { value });
            }
            seen[idx] = true;
        }
        Ok(Self { pancakes })
    }

    /// The sorted stack `(1, 2, ..., n)`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::TooLarge`] if `n` exceeds [`MAX_STACK_SIZE`].
    pub fn goal(n: usize) -> Result<Self, StackError> {
        if n > MAX_STACK_SIZE {
            return Err(StackError::TooLarge {
                len: n,
                max: MAX_STACK_SIZE,
            });
        }
        // n <= MAX_STACK_SIZE, so every value fits in a u8.
        #[allow(clippy::cast_possible_truncation)]
        let pancakes = (1..=n).map(|v| v as u8).collect();
        Ok(Self { pancakes })
    }

    /// Wrap a sequence already known to be a permutation.
    ///
    /// Only the kernel may call this: operators and enumeration preserve
    /// the permutation property by construction.
    pub(crate) fn from_permutation_unchecked(pancakes: Vec<u8>) -> Self {
        debug_assert!(Self::new(pancakes.clone()).is_ok());
        Self { pancakes }
    }

    /// Number of pancakes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pancakes.len()
    }

    /// Whether the stack has no pancakes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pancakes.is_empty()
    }

    /// The pancake sizes, top first.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.pancakes
    }

    /// Whether this is the sorted stack for its size.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.pancakes
            .iter()
            .enumerate()
            .all(|(i, &v)| usize::from(v) == i + 1)
    }

    /// Bytes hashed for the stack fingerprint: one byte per pancake.
    #[must_use]
    pub fn identity_bytes(&self) -> &[u8] {
        &self.pancakes
    }
}

impl fmt::Display for StackV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.pancakes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// Parses `"3,1,2"`, `"(3,1,2)"` or `"3 1 2"`.
impl FromStr for StackV1 {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches('(').trim_end_matches(')');
        let pancakes = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<u8>().map_err(|_| StackError::Parse {
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(pancakes)
    }
}
