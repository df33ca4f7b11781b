//! Circular Singly Linked List
//!
//! A ring of singly linked nodes hanging off a sentinel head. The sentinel's
//! successor is the ring's designated first element; the sentinel itself never
//! takes part in the cycle.
//!
//! ```text
//!            ┌─────────────────────────────┐
//!            ▼                             │
//! head ──▶ first ──▶ second ──▶ ... ──▶ last
//! ```
//!
//! With a single element, that element's successor is itself.
//!
//! # Uniqueness
//!
//! Values are unique within a ring. A hash index of the stored values makes the
//! check O(1) and [`CircularList::add`] rejects a duplicate with
//! [`Error::DuplicateValue`] instead of inserting it.
//!
//! # Performance Characteristics
//!
//! - `add`: O(n), the last node is found by walking the ring
//! - `contains`: O(1)
//! - `pop_front`: O(n), same walk as `add`
//! - cursor `move_next` / `remove_current`: O(1)

extern crate alloc;

use crate::error::Error;
use crate::node::Node;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use core::ptr;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

use log::trace;

/// A circular singly linked list with unique values.
///
/// New values always become the ring's first element. The ring can be walked
/// with [`iter`](CircularList::iter) or edited in place through a
/// [`CursorMut`].
///
/// # Examples
///
/// ```
/// use ring_lru::CircularList;
///
/// let mut ring = CircularList::new();
/// ring.add(3).unwrap();
/// ring.add(2).unwrap();
/// ring.add(1).unwrap();
///
/// assert_eq!(ring.head(), Some(&1));
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
///
/// # Safety
///
/// `head` is a sentinel allocated in the constructor and freed in `Drop`.
/// Every real node is reachable from `head.next` in exactly `len` steps and is
/// owned by the list until it is unlinked and released.
pub struct CircularList<T, S = DefaultHashBuilder> {
    head: *mut Node<T>,
    len: usize,
    index: HashSet<T, S>,
}

// SAFETY: the list owns every node it points to; nothing is shared outside it.
unsafe impl<T: Send, S: Send> Send for CircularList<T, S> {}

// SAFETY: all mutation requires &mut self.
unsafe impl<T: Sync, S: Sync> Sync for CircularList<T, S> {}

impl<T: Hash + Eq + Clone> CircularList<T> {
    /// Creates an empty ring.
    pub fn new() -> Self {
        CircularList::with_hasher(DefaultHashBuilder::default())
    }

    /// Builds a ring whose forward traversal yields `values` in order.
    ///
    /// Since [`add`](CircularList::add) inserts at the front, the values are
    /// added last to first.
    ///
    /// ```
    /// use ring_lru::CircularList;
    ///
    /// let ring = CircularList::from_ring_order(1..=4).unwrap();
    /// assert_eq!(ring.head(), Some(&1));
    /// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_ring_order<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut ring = CircularList::new();
        for value in values.into_iter().rev() {
            ring.add(value)?;
        }
        Ok(ring)
    }
}

impl<T: Hash + Eq + Clone> Default for CircularList<T> {
    fn default() -> Self {
        CircularList::new()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> CircularList<T, S> {
    /// Creates an empty ring that hashes its value index with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        CircularList {
            head: Box::into_raw(Box::new(Node::new_sentinel())),
            len: 0,
            index: HashSet::with_hasher(hash_builder),
        }
    }

    /// Inserts `value` as the new first element of the ring.
    ///
    /// On an empty ring the new node points at itself. Otherwise the last node
    /// is located by walking the ring and re-pointed at the new node, which in
    /// turn points at the old first element.
    ///
    /// Returns [`Error::DuplicateValue`] and leaves the ring untouched when
    /// `value` is already present.
    pub fn add(&mut self, value: T) -> Result<(), Error> {
        if self.index.contains(&value) {
            trace!("ring: rejected duplicate value, len={}", self.len);
            return Err(Error::DuplicateValue);
        }
        self.index.insert(value.clone());
        let node = Node::alloc(value);

        // SAFETY: head is valid for the lifetime of the list and every pointer
        // reachable from it is a live node owned by this list
        unsafe {
            let first = (*self.head).next;
            if first.is_null() {
                (*node).next = node;
            } else {
                let last = self.last_node();
                (*node).next = first;
                (*last).next = node;
            }
            (*self.head).next = node;
        }
        self.len += 1;
        Ok(())
    }
}

impl<T: Hash + Eq, S: BuildHasher> CircularList<T, S> {
    /// Returns true if `value` is stored in the ring.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains(value)
    }

    /// Returns a cursor positioned on the ring's first element.
    ///
    /// The cursor's trailing pointer starts on the last node, so removing the
    /// first element keeps the ring closed.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, S> {
        // SAFETY: head is valid for the lifetime of the list
        let current = unsafe { (*self.head).next };
        let prev = if current.is_null() {
            ptr::null_mut()
        } else {
            // SAFETY: the ring is non-empty
            unsafe { self.last_node() }
        };
        CursorMut {
            list: self,
            prev,
            current,
        }
    }

    /// Removes the first element and returns it.
    ///
    /// The sentinel moves on to the removed element's successor.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_mut().remove_current()
    }

    /// Walks the ring and reports the first broken invariant, if any.
    ///
    /// Checks that the ring closes after exactly `len` steps from the first
    /// element, that the sentinel stays out of the cycle and that the value
    /// index matches the nodes.
    pub fn check_invariants(&self) -> Result<(), Error> {
        // SAFETY: head is valid for the lifetime of the list; the walk is
        // bounded by `len` and stops at the first null pointer
        unsafe {
            let first = (*self.head).next;
            if self.len == 0 {
                if !first.is_null() {
                    return Err(Error::InvariantViolation("empty ring has a first element"));
                }
                if !self.index.is_empty() {
                    return Err(Error::InvariantViolation("empty ring has indexed values"));
                }
                return Ok(());
            }
            if first.is_null() {
                return Err(Error::InvariantViolation("non-empty ring has no first element"));
            }
            if self.index.len() != self.len {
                return Err(Error::InvariantViolation("index size differs from ring length"));
            }

            let mut node = first;
            for step in 1..=self.len {
                match &(*node).val {
                    Some(v) if self.index.contains(v) => {}
                    _ => return Err(Error::InvariantViolation("node value missing from index")),
                }
                node = (*node).next;
                if node.is_null() {
                    return Err(Error::InvariantViolation("ring broken by a null successor"));
                }
                if node == self.head {
                    return Err(Error::InvariantViolation("sentinel is part of the ring"));
                }
                if node == first && step != self.len {
                    return Err(Error::InvariantViolation("ring is shorter than its length"));
                }
            }
            if node != first {
                return Err(Error::InvariantViolation("ring does not close after len steps"));
            }
        }
        Ok(())
    }
}

impl<T, S> CircularList<T, S> {
    /// Returns the first element of the ring.
    pub fn head(&self) -> Option<&T> {
        // SAFETY: head is valid; a non-null successor is a live real node
        unsafe {
            let first = (*self.head).next;
            if first.is_null() {
                None
            } else {
                Some((*first).value())
            }
        }
    }

    /// Returns the number of elements in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ring has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates once around the ring, starting at the first element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            // SAFETY: head is valid for the lifetime of the list
            next: unsafe { (*self.head).next },
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // SAFETY: exactly `len` real nodes are reachable from head.next; each
        // is read for its successor before being released
        unsafe {
            let mut node = (*self.head).next;
            for _ in 0..self.len {
                let next = (*node).next;
                Node::release(node);
                node = next;
            }
            (*self.head).next = ptr::null_mut();
        }
        self.len = 0;
        self.index.clear();
    }

    /// Finds the node whose successor is the first element.
    ///
    /// # Safety
    ///
    /// The ring must be non-empty.
    unsafe fn last_node(&self) -> *mut Node<T> {
        let first = (*self.head).next;
        let mut node = (*first).next;
        while (*node).next != first {
            node = (*node).next;
        }
        node
    }
}

impl<T, S> Drop for CircularList<T, S> {
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

impl<T: fmt::Debug, S> fmt::Debug for CircularList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("len", &self.len)
            .field("ring", &DebugRing(self))
            .finish()
    }
}

struct DebugRing<'a, T, S>(&'a CircularList<T, S>);

impl<T: fmt::Debug, S> fmt::Debug for DebugRing<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a CircularList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over one lap of a [`CircularList`].
pub struct Iter<'a, T> {
    next: *const Node<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `remaining > 0` means `next` is a live real node borrowed
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

/// A cursor that walks a [`CircularList`] forever and can unlink the element
/// under it.
///
/// The cursor keeps a trailing pointer to the node before the current one, so
/// removal is O(1). Removing the ring's first element moves the sentinel on to
/// the successor.
///
/// ```
/// use ring_lru::CircularList;
///
/// let mut ring = CircularList::from_ring_order([1, 2, 3]).unwrap();
/// let mut cursor = ring.cursor_mut();
/// cursor.move_next();
/// assert_eq!(cursor.remove_current(), Some(2));
/// assert_eq!(cursor.current(), Some(&3));
/// drop(cursor);
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct CursorMut<'a, T, S = DefaultHashBuilder> {
    list: &'a mut CircularList<T, S>,
    prev: *mut Node<T>,
    current: *mut Node<T>,
}

impl<T: Hash + Eq, S: BuildHasher> CursorMut<'_, T, S> {
    /// Returns the element under the cursor, or `None` once the ring is empty.
    pub fn current(&self) -> Option<&T> {
        if self.current.is_null() {
            return None;
        }
        // SAFETY: a non-null cursor position is a live real node
        unsafe { Some((*self.current).value()) }
    }

    /// Returns the element after the cursor.
    pub fn peek_next(&self) -> Option<&T> {
        if self.current.is_null() {
            return None;
        }
        // SAFETY: successors of live ring nodes are live ring nodes
        unsafe { Some((*(*self.current).next).value()) }
    }

    /// Advances the cursor one node around the ring.
    pub fn move_next(&mut self) {
        if self.current.is_null() {
            return;
        }
        self.prev = self.current;
        // SAFETY: current is a live ring node
        self.current = unsafe { (*self.current).next };
    }

    /// Unlinks the element under the cursor, frees its node and returns the
    /// value. The cursor moves on to the removed element's successor.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current.is_null() {
            return None;
        }
        let removed = self.current;

        // SAFETY: prev and current are live ring nodes with prev.next == current;
        // the removed node is unlinked before it is released
        let val = unsafe {
            let next = (*removed).next;
            if self.list.len == 1 {
                (*self.list.head).next = ptr::null_mut();
                self.prev = ptr::null_mut();
                self.current = ptr::null_mut();
            } else {
                (*self.prev).next = next;
                if (*self.list.head).next == removed {
                    (*self.list.head).next = next;
                }
                self.current = next;
            }
            self.list.len -= 1;
            Node::release(removed)
        };

        if let Some(v) = &val {
            self.list.index.remove(v);
        }
        val
    }

    /// Returns the number of elements left in the ring.
    pub fn len(&self) -> usize {
        self.list.len
    }

    /// Returns true once every element has been removed.
    pub fn is_empty(&self) -> bool {
        self.list.len == 0
    }
}
