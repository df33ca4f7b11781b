//! Configuration for the LRU list.

use crate::error::Error;
use core::fmt;
use core::num::NonZeroUsize;

/// Capacity used by [`LruListConfig::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for an [`LruList`](crate::LruList).
///
/// # Examples
///
/// ```
/// use ring_lru::config::LruListConfig;
/// use ring_lru::LruList;
/// use core::num::NonZeroUsize;
///
/// let config = LruListConfig {
///     capacity: NonZeroUsize::new(3).unwrap(),
/// };
/// let mut list = LruList::init(config);
/// list.add("a");
/// assert_eq!(list.len(), 1);
///
/// assert_eq!(LruListConfig::default().capacity.get(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruListConfig {
    /// Maximum number of values the list holds before it starts evicting.
    pub capacity: NonZeroUsize,
}

impl LruListConfig {
    /// Builds a config from a plain integer, rejecting zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        NonZeroUsize::new(capacity)
            .map(|capacity| LruListConfig { capacity })
            .ok_or(Error::InvalidArgument("capacity must be non-zero"))
    }
}

impl Default for LruListConfig {
    fn default() -> Self {
        LruListConfig {
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl fmt::Debug for LruListConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruListConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
