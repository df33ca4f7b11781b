extern crate alloc;

use alloc::boxed::Box;
use core::ptr;

/// A cell in a singly linked list.
///
/// Holds an optional value and a raw pointer to the successor. A node whose
/// value is `None` is a sentinel: it marks the head of a list and never takes
/// part in the chain of real elements. A real node's identity is its address,
/// not its value.
pub(crate) struct Node<T> {
    /// The stored value. `None` for sentinels and for released nodes.
    pub(crate) val: Option<T>,
    /// Pointer to the successor, or null when there is none.
    pub(crate) next: *mut Node<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `val`.
    pub(crate) fn new(val: T) -> Self {
        Node {
            val: Some(val),
            next: ptr::null_mut(),
        }
    }

    /// Creates a sentinel node.
    pub(crate) fn new_sentinel() -> Self {
        Node {
            val: None,
            next: ptr::null_mut(),
        }
    }

    /// Allocates a node holding `val` and leaks it as a raw pointer.
    ///
    /// Ownership passes to whichever list links the pointer in; that list must
    /// eventually give it back through [`Node::release`] or `Box::from_raw`.
    pub(crate) fn alloc(val: T) -> *mut Node<T> {
        Box::into_raw(Box::new(Node::new(val)))
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics on a sentinel, or on a node whose value was taken by
    /// [`Node::release`].
    pub(crate) fn value(&self) -> &T {
        match &self.val {
            Some(v) => v,
            None => unreachable!("sentinel or released node has no value"),
        }
    }

    /// Takes ownership of an unlinked node and releases it.
    ///
    /// The value and successor pointer are cleared before the allocation is
    /// dropped, so the freed cell never holds on to evicted data. Returns the
    /// value the node held.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must already be unlinked from
    /// every list, and must not be used again after this call.
    pub(crate) unsafe fn release(node: *mut Node<T>) -> Option<T> {
        // SAFETY: caller guarantees `node` is a live allocation from `alloc`
        let mut boxed = unsafe { Box::from_raw(node) };
        boxed.next = ptr::null_mut();
        boxed.val.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_sentinel_has_no_value() {
        let sentinel: Node<u32> = Node::new_sentinel();
        assert!(sentinel.val.is_none());
        assert!(sentinel.next.is_null());
    }

    #[test]
    fn test_alloc_and_release() {
        let node = Node::alloc(String::from("payload"));
        unsafe {
            assert_eq!((*node).value(), "payload");
            assert!((*node).next.is_null());
            let val = Node::release(node);
            assert_eq!(val.as_deref(), Some("payload"));
        }
    }

    #[test]
    fn test_value_of_detached_node() {
        let node = Node::new(5u32);
        assert_eq!(node.value(), &5);
    }

    #[test]
    #[should_panic(expected = "sentinel or released node has no value")]
    fn test_sentinel_value_panics() {
        let sentinel: Node<u32> = Node::new_sentinel();
        sentinel.value();
    }

    #[test]
    fn test_self_loop_release() {
        // A lone ring node points at itself; releasing must not follow `next`.
        let node = Node::alloc(7u32);
        unsafe {
            (*node).next = node;
            assert_eq!(Node::release(node), Some(7));
        }
    }
}
