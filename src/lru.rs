//! Least Recently Used (LRU) List
//!
//! A fixed-capacity, recency-ordered list of unique values backed by a singly
//! linked list with a sentinel head. The sentinel's successor is the most
//! recently used value; the last node is the least recently used one and is
//! the first to go when the list overflows.
//!
//! ```text
//! head ──▶ MRU ──▶ ... ──▶ LRU ──▶ ∅
//! ```
//!
//! # Algorithm
//!
//! - Adding a value that is already present removes its node and inserts a
//!   fresh one at the front.
//! - Adding a new value to a full list first evicts the last node.
//! - Otherwise the value is inserted at the front.
//!
//! A hash map from value to node gives O(1) membership. The list keeps no tail
//! pointer and nodes have no back links, so unlinking walks from the head to
//! find the predecessor.
//!
//! # Performance Characteristics
//!
//! - `contains`: O(1)
//! - `add` of a new value into a non-full list: O(1)
//! - `add` that evicts or refreshes, `remove`, `remove_last`: O(n)
//!
//! # Thread Safety
//!
//! Not synchronised. Wrap the list in a `Mutex` to share it across threads.

extern crate alloc;

use crate::config::LruListConfig;
use crate::error::Error;
use crate::metrics::{ListMetrics, LruListMetrics};
use crate::node::Node;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use core::ptr;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

use log::trace;

/// A capacity-bounded list of unique values in most-recent-first order.
///
/// # Examples
///
/// ```
/// use ring_lru::LruList;
/// use core::num::NonZeroUsize;
///
/// let mut list = LruList::new(NonZeroUsize::new(3).unwrap());
/// list.add(1);
/// list.add(2);
/// list.add(3);
/// list.add(1); // 1 becomes the most recent again
///
/// assert_eq!(list.add(4), Some(2)); // 2 is now the least recent
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 1, 3]);
/// ```
///
/// # Safety
///
/// `head` is a sentinel allocated in the constructor and freed in `Drop`. The
/// chain from `head.next` holds exactly `len` nodes and ends in null. Every
/// pointer in `map` refers to a node in that chain holding the key's value.
pub struct LruList<T, S = DefaultHashBuilder> {
    config: LruListConfig,
    head: *mut Node<T>,
    len: usize,
    map: HashMap<T, *mut Node<T>, S>,
    metrics: LruListMetrics,
}

// SAFETY: the list owns every node it points to, including those referenced
// from the map.
unsafe impl<T: Send, S: Send> Send for LruList<T, S> {}

// SAFETY: all mutation requires &mut self.
unsafe impl<T: Sync, S: Sync> Sync for LruList<T, S> {}

impl<T: Hash + Eq + Clone> LruList<T> {
    /// Creates a list that holds at most `cap` values.
    pub fn new(cap: NonZeroUsize) -> Self {
        LruList::init(LruListConfig { capacity: cap })
    }

    /// Creates a list from a config.
    pub fn init(config: LruListConfig) -> Self {
        LruList::with_hasher(config, DefaultHashBuilder::default())
    }

    /// Creates a list from a plain integer capacity, rejecting zero.
    pub fn try_with_capacity(cap: usize) -> Result<Self, Error> {
        LruListConfig::try_with_capacity(cap).map(LruList::init)
    }
}

impl<T: Hash + Eq + Clone> Default for LruList<T> {
    /// A list with the default capacity of 10.
    fn default() -> Self {
        LruList::init(LruListConfig::default())
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> LruList<T, S> {
    /// Creates a list that hashes its value map with `hash_builder`.
    pub fn with_hasher(config: LruListConfig, hash_builder: S) -> Self {
        let cap = config.capacity;
        LruList {
            config,
            head: Box::into_raw(Box::new(Node::new_sentinel())),
            len: 0,
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            metrics: LruListMetrics::new(cap.get() as u64),
        }
    }

    /// Makes `value` the most recently used entry.
    ///
    /// A value already present is refreshed and the length is unchanged. A new
    /// value is inserted at the front, evicting the least recently used value
    /// first if the list is full. Returns the evicted value, if any.
    pub fn add(&mut self, value: T) -> Option<T> {
        self.metrics.core.record_request();
        if self.map.contains_key(&value) {
            return self.update(value);
        }
        let evicted = if self.is_full() {
            self.remove_last()
        } else {
            None
        };
        self.insert_at_first(value);
        evicted
    }

    /// Removes `value` and re-inserts it as a new node at the front.
    ///
    /// The old node is released rather than moved. A value that was not
    /// present is simply inserted, evicting the last value if the list is
    /// full. Returns the evicted value, if any.
    pub fn update(&mut self, value: T) -> Option<T> {
        let mut evicted = None;
        if self.unlink(&value).is_some() {
            self.metrics.record_refresh();
        } else if self.is_full() {
            evicted = self.remove_last();
        }
        self.insert_at_first(value);
        evicted
    }

    fn insert_at_first(&mut self, value: T) {
        let node = Node::alloc(value.clone());
        // SAFETY: head is valid for the lifetime of the list and `node` is a
        // fresh allocation not linked anywhere else
        unsafe {
            (*node).next = (*self.head).next;
            (*self.head).next = node;
        }
        self.map.insert(value, node);
        self.len += 1;
        self.metrics.core.record_insertion();
    }
}

impl<T: Hash + Eq, S: BuildHasher> LruList<T, S> {
    /// Returns true if `value` is stored in the list.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(value)
    }

    /// Removes `value` from the list and returns it.
    ///
    /// Removing a value that is not present, or removing from an empty list,
    /// does nothing.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let removed = self.unlink(value)?;
        self.metrics.core.record_removal();
        Some(removed)
    }

    /// Removes a value held in an `Option`.
    ///
    /// An absent value can never be stored in the list, so `None` is an
    /// [`Error::InvalidArgument`] rather than a silent no-op.
    pub fn try_remove<Q>(&mut self, value: Option<&Q>) -> Result<Option<T>, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match value {
            Some(value) => Ok(self.remove(value)),
            None => Err(Error::InvalidArgument("absent values are not cached")),
        }
    }

    /// Evicts the least recently used value and returns it.
    ///
    /// Walks to the penultimate node, since no tail pointer is kept.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so head.next is a live node and the
        // walk stops on the node whose successor is the last one
        let value = unsafe {
            let mut prev = self.head;
            while !(*(*prev).next).next.is_null() {
                prev = (*prev).next;
            }
            let tail = (*prev).next;
            (*prev).next = ptr::null_mut();
            self.len -= 1;
            Node::release(tail)?
        };
        self.map.remove(&value);
        self.metrics.core.record_eviction();
        trace!("lru: evicted least recent value, len={}", self.len);
        Some(value)
    }

    /// Walks the chain and reports the first broken invariant, if any.
    pub fn check_invariants(&self) -> Result<(), Error> {
        if self.len > self.config.capacity.get() {
            return Err(Error::InvariantViolation("length exceeds capacity"));
        }
        if self.map.len() != self.len {
            return Err(Error::InvariantViolation("map size differs from length"));
        }
        // SAFETY: head is valid; the walk is bounded by `len + 1` steps and
        // stops at the first null pointer
        unsafe {
            let mut node = (*self.head).next;
            let mut count = 0;
            while !node.is_null() {
                count += 1;
                if count > self.len {
                    return Err(Error::InvariantViolation("chain is longer than length"));
                }
                match &(*node).val {
                    Some(v) if self.map.get(v).copied() == Some(node) => {}
                    _ => return Err(Error::InvariantViolation("node not indexed by its value")),
                }
                node = (*node).next;
            }
            if count != self.len {
                return Err(Error::InvariantViolation("chain is shorter than length"));
            }
        }
        Ok(())
    }

    /// Unlinks and releases the node holding `value`.
    fn unlink<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let target = self.map.remove(value)?;
        // SAFETY: nodes in the map are live and linked into the chain, so the
        // walk from head finds the predecessor before reaching null
        unsafe {
            let mut prev = self.head;
            while !(*prev).next.is_null() && (*prev).next != target {
                prev = (*prev).next;
            }
            debug_assert_eq!((*prev).next, target, "indexed node missing from chain");
            (*prev).next = (*target).next;
            self.len -= 1;
            Node::release(target)
        }
    }
}

impl<T, S> LruList<T, S> {
    /// Returns the maximum number of values the list holds.
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next new value will evict the least recent one.
    pub fn is_full(&self) -> bool {
        self.len == self.config.capacity.get()
    }

    /// Returns the most recently used value.
    pub fn peek_front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the least recently used value, the next eviction candidate.
    pub fn peek_back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Iterates from the most recently used value to the least.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            // SAFETY: head is valid for the lifetime of the list
            next: unsafe { (*self.head).next },
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the list's metrics.
    pub fn list_metrics(&self) -> &LruListMetrics {
        &self.metrics
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // SAFETY: the chain from head.next is null-terminated; each node is
        // read for its successor before being released
        unsafe {
            let mut node = (*self.head).next;
            while !node.is_null() {
                let next = (*node).next;
                Node::release(node);
                node = next;
            }
            (*self.head).next = ptr::null_mut();
        }
        self.map.clear();
        self.len = 0;
    }
}

impl<T, S> Drop for LruList<T, S> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: head was allocated in the constructor and is freed only here
        unsafe {
            if !self.head.is_null() {
                let _ = Box::from_raw(self.head);
                self.head = ptr::null_mut();
            }
        }
    }
}

impl<T, S> ListMetrics for LruList<T, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for LruList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruList")
            .field("capacity", &self.config.capacity)
            .field("len", &self.len)
            .field("values", &DebugValues(self))
            .finish()
    }
}

/// Most recent first.
struct DebugValues<'a, T, S>(&'a LruList<T, S>);

impl<T: fmt::Debug, S> fmt::Debug for DebugValues<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a LruList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over an [`LruList`], most recent first.
pub struct Iter<'a, T> {
    next: *const Node<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 || self.next.is_null() {
            return None;
        }
        // SAFETY: a non-null pointer in the chain is a live real node borrowed
        // for as long as the list is
        unsafe {
            let node: &'a Node<T> = &*self.next;
            self.next = node.next;
            self.remaining -= 1;
            Some(node.value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
