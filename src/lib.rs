#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Structure | Use |
//! |------|-----------|-----|
//! | [`CircularList`] | Circular singly linked ring, sentinel head | Rotating membership, Josephus rings |
//! | [`JosephusSolver`] | Consumes a `CircularList` | Every n-th elimination |
//! | [`LruList`] | Singly linked chain, sentinel head | Fixed-capacity recency cache |
//!
//! ## Performance Characteristics
//!
//! | Type | Insert | Lookup | Remove |
//! |------|--------|--------|--------|
//! | `CircularList` | O(n) | O(1) | O(1) at a cursor |
//! | `LruList` | O(1), O(n) when evicting | O(1) | O(n) |
//!
//! ## Code Examples
//!
//! ### Josephus
//!
//! ```rust
//! use ring_lru::{CircularList, JosephusSolver};
//! use core::num::NonZeroUsize;
//!
//! let ring = CircularList::from_ring_order(1..=41).unwrap();
//! let solver = JosephusSolver::new(NonZeroUsize::new(3).unwrap());
//!
//! let mut order = Vec::new();
//! let survivor = solver.solve_with(ring, |v| order.push(*v)).unwrap();
//! assert_eq!(survivor, 31);
//! assert_eq!(&order[..3], &[3, 6, 9]);
//! ```
//!
//! ### LRU
//!
//! ```rust
//! use ring_lru::LruList;
//! use ring_lru::config::LruListConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruListConfig {
//!     capacity: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut list = LruList::init(config);
//! list.add("a");
//! list.add("b");
//! list.add("a");                        // "a" becomes most recently used
//! assert_eq!(list.add("c"), Some("b")); // "b" evicted
//! ```
//!
//! ## Modules
//!
//! - [`circular`]: circular singly linked list and its cursor
//! - [`josephus`]: Josephus elimination over a circular list
//! - [`lru`]: recency-ordered list with a capacity bound
//! - [`config`]: configuration structures
//! - [`metrics`]: metrics reporting
//! - [`error`]: the crate's error type

#![no_std]

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

extern crate alloc;

/// Singly linked list node shared by both lists.
///
/// **Note**: internal infrastructure built on raw pointers; the public list
/// types uphold its invariants.
pub(crate) mod node;

/// Error type.
pub mod error;

/// List configuration structures.
pub mod config;

/// Circular singly linked list.
///
/// A ring with a sentinel head and unique values, plus a cursor that can walk
/// the ring and unlink elements as it goes.
pub mod circular;

/// Josephus problem solver.
///
/// Eliminates every n-th element of a [`CircularList`] until one survives.
pub mod josephus;

/// Least Recently Used (LRU) list.
///
/// A fixed-capacity singly linked list that keeps values in recency order and
/// evicts the least recently used value on overflow.
pub mod lru;

/// List metrics system.
pub mod metrics;

pub use circular::{CircularList, CursorMut};
pub use error::Error;
pub use josephus::{josephus, JosephusOutcome, JosephusSolver};
pub use lru::LruList;
