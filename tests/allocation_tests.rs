//! Allocation accounting for the lists.
//!
//! Uses an instrumented global allocator to check that removing, evicting and
//! dropping release every node. Kept in its own test binary so no other test
//! allocates concurrently inside a measured region.

use ring_lru::{CircularList, JosephusSolver, LruList};
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;
use std::num::NonZeroUsize;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

fn net_bytes(region: &Region<'_, System>) -> isize {
    let stats = region.change();
    stats.bytes_allocated as isize - stats.bytes_deallocated as isize
}

#[test]
fn test_nodes_released() {
    // Lists are dropped inside each block; whatever they allocated must be
    // returned once the block ends.
    let region = Region::new(GLOBAL);
    {
        let mut list = LruList::new(NonZeroUsize::new(16).unwrap());
        for i in 0..1_000u64 {
            list.add(i % 40);
            if i % 7 == 0 {
                list.remove(&(i % 13));
            }
        }
        assert_eq!(list.len(), 16);
    }
    assert_eq!(net_bytes(&region), 0, "LruList leaked nodes");

    let region = Region::new(GLOBAL);
    {
        let ring = CircularList::from_ring_order(0..500u64).unwrap();
        let solver = JosephusSolver::try_new(3).unwrap();
        let outcome = solver.solve(ring).unwrap();
        assert_eq!(outcome.eliminated.len(), 499);
    }
    assert_eq!(net_bytes(&region), 0, "Josephus leaked nodes");

    let region = Region::new(GLOBAL);
    {
        let mut ring = CircularList::new();
        for i in 0..64u64 {
            ring.add(i).unwrap();
        }
        for _ in 0..32 {
            ring.pop_front();
        }
        ring.clear();
        ring.add(1).unwrap();
    }
    assert_eq!(net_bytes(&region), 0, "CircularList leaked nodes");
}
