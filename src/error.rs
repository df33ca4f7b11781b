//! Error type shared by every list in the crate.
//!
//! All failures are immediate and local: an operation that returns an error
//! leaves its list exactly as it was.
//!
//! ```
//! use ring_lru::{CircularList, Error};
//!
//! let mut ring = CircularList::new();
//! ring.add(1).unwrap();
//! assert_eq!(ring.add(1), Err(Error::DuplicateValue));
//! assert_eq!(ring.len(), 1);
//! ```

use core::fmt;

/// Errors reported by [`CircularList`](crate::CircularList),
/// [`JosephusSolver`](crate::JosephusSolver) and [`LruList`](crate::LruList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument the structure cannot work with: an absent value handed to
    /// an LRU list, a zero capacity, a zero elimination step.
    InvalidArgument(&'static str),
    /// The value is already stored in the ring. Ring values must be unique.
    DuplicateValue,
    /// The Josephus simulation needs at least one element.
    EmptyRing,
    /// An internal invariant does not hold. Only produced by
    /// `check_invariants`.
    InvariantViolation(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::DuplicateValue => f.write_str("value is already present in the ring"),
            Error::EmptyRing => f.write_str("ring is empty"),
            Error::InvariantViolation(what) => write!(f, "invariant violated: {}", what),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
