#![no_std]
extern crate alloc;
extern crate ring_lru;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use ring_lru::config::LruListConfig;
use ring_lru::{josephus, CircularList, JosephusSolver, LruList};

fn make_lru<T: core::hash::Hash + Eq + Clone>(cap: usize) -> LruList<T> {
    let config = LruListConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruList::init(config)
}

#[test]
fn test_circular_in_no_std() {
    let mut ring = CircularList::new();
    for i in (0..5).rev() {
        ring.add(format!("value-{}", i)).unwrap();
    }
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.head().map(String::as_str), Some("value-0"));
    assert!(ring.contains("value-3"));

    let values: Vec<&String> = ring.iter().collect();
    assert_eq!(values.len(), 5);
    assert_eq!(values[4], "value-4");
}

#[test]
fn test_josephus_in_no_std() {
    let ring = CircularList::from_ring_order(1..=10u32).unwrap();
    assert_eq!(josephus(ring, 3), Ok(4));

    let ring = CircularList::from_ring_order(1..=6u32).unwrap();
    let solver = JosephusSolver::new(NonZeroUsize::new(2).unwrap());
    let outcome = solver.solve(ring).unwrap();
    assert_eq!(outcome.eliminated, [2, 4, 6, 3, 1]);
    assert_eq!(outcome.survivor, 5);
}

#[test]
fn test_lru_in_no_std() {
    let mut list = make_lru(2);
    list.add(String::from("a"));
    list.add(String::from("b"));
    list.add(String::from("a"));

    assert_eq!(list.add(String::from("c")), Some(String::from("b")));
    assert!(list.contains("a"));
    assert!(!list.contains("b"));
    assert_eq!(list.remove("a"), Some(String::from("a")));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_lru_with_vec_values() {
    let mut list: LruList<Vec<u8>> = make_lru(3);
    for i in 0..4u8 {
        list.add(alloc::vec![i; 3]);
    }
    assert_eq!(list.len(), 3);
    assert!(!list.contains(&alloc::vec![0u8; 3]));
    assert_eq!(list.peek_front(), Some(&alloc::vec![3u8; 3]));
}
