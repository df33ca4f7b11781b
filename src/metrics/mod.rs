//! List Metrics System
//!
//! Counters for the lists in this crate, reported through the [`ListMetrics`]
//! trait as a `BTreeMap`. A BTreeMap keeps the keys in a stable order, so two
//! runs of the same workload print identical reports.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod josephus;
pub mod lru;

pub use josephus::JosephusMetrics;
pub use lru::LruListMetrics;

/// Counters common to every list that stores values.
#[derive(Debug, Default, Clone)]
pub struct CoreListMetrics {
    /// Number of values handed to the list for storage
    pub requests: u64,

    /// Number of nodes allocated for new values
    pub insertions: u64,

    /// Number of values removed on request
    pub removals: u64,

    /// Number of values pushed out by the capacity bound
    pub evictions: u64,
}

impl CoreListMetrics {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a value was offered to the list.
    pub fn record_request(&mut self) {
        self.requests += 1;
    }

    /// Records that a node was allocated and linked in.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Records a capacity eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of requests that caused an eviction, or 0.0 before any request.
    pub fn eviction_rate(&self) -> f64 {
        if self.requests > 0 {
            self.evictions as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("eviction_rate".to_string(), self.eviction_rate());

        metrics
    }
}

/// Uniform metrics reporting for every list in the crate.
pub trait ListMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Name of the algorithm, e.g. "LRU".
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_metrics_start_at_zero() {
        let metrics = CoreListMetrics::new();
        let map = metrics.to_btreemap();
        assert_eq!(map.get("requests"), Some(&0.0));
        assert_eq!(map.get("evictions"), Some(&0.0));
        assert_eq!(map.get("eviction_rate"), Some(&0.0));
    }

    #[test]
    fn test_eviction_rate() {
        let mut metrics = CoreListMetrics::new();
        for _ in 0..4 {
            metrics.record_request();
        }
        metrics.record_eviction();
        assert_eq!(metrics.eviction_rate(), 0.25);
    }

    #[test]
    fn test_keys_are_sorted() {
        let metrics = CoreListMetrics::new();
        let keys: alloc::vec::Vec<_> = metrics.to_btreemap().into_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
