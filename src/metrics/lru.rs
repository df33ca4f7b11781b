//! LRU List Metrics
//!
//! Metrics specific to the recency-ordered [`LruList`](crate::LruList).

extern crate alloc;

use super::{CoreListMetrics, ListMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreListMetrics)
#[derive(Debug, Clone)]
pub struct LruListMetrics {
    /// Core metrics common to all lists
    pub core: CoreListMetrics,

    /// Number of adds that hit a value already present and moved it to the
    /// front
    pub refreshes: u64,

    /// Capacity of the list the metrics belong to
    pub capacity: u64,
}

impl LruListMetrics {
    /// Creates metrics for a list holding at most `capacity` values.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreListMetrics::new(),
            refreshes: 0,
            capacity,
        }
    }

    /// Records that an existing value was moved to the front.
    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    /// Fraction of requests that found the value already present.
    pub fn refresh_rate(&self) -> f64 {
        if self.core.requests > 0 {
            self.refreshes as f64 / self.core.requests as f64
        } else {
            0.0
        }
    }

    /// Converts LRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("refreshes".to_string(), self.refreshes as f64);
        metrics.insert("refresh_rate".to_string(), self.refresh_rate());
        metrics
    }
}

impl ListMetrics for LruListMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
