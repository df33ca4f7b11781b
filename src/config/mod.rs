//! List Configuration Module
//!
//! Configuration structures for the lists in this crate. Config structs have
//! public fields so they can be written out in full at the call site.
//!
//! | Config | List | Description |
//! |--------|------|-------------|
//! | `LruListConfig` | [`LruList`](crate::LruList) | Capacity-bounded recency list |
//!
//! [`CircularList`](crate::CircularList) takes no configuration, and the
//! [`JosephusSolver`](crate::JosephusSolver) is built from its step count alone.
//!
//! # Examples
//!
//! ```
//! use ring_lru::config::LruListConfig;
//! use ring_lru::LruList;
//! use core::num::NonZeroUsize;
//!
//! let config = LruListConfig {
//!     capacity: NonZeroUsize::new(100).unwrap(),
//! };
//! let list: LruList<u64> = LruList::init(config);
//! assert_eq!(list.cap().get(), 100);
//! ```

pub mod lru;

pub use lru::{LruListConfig, DEFAULT_CAPACITY};
