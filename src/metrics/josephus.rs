//! Josephus Simulation Metrics

extern crate alloc;

use super::ListMetrics;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters collected over one Josephus simulation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JosephusMetrics {
    /// Number of elements in the ring when the simulation started
    pub ring_size: u64,

    /// Number of elements eliminated
    pub eliminations: u64,

    /// Number of single-node moves the cursor made around the ring
    pub steps: u64,
}

impl JosephusMetrics {
    /// Creates metrics for a ring of `ring_size` elements.
    pub fn new(ring_size: u64) -> Self {
        Self {
            ring_size,
            ..Default::default()
        }
    }

    /// Records one elimination.
    pub fn record_elimination(&mut self) {
        self.eliminations += 1;
    }

    /// Records `count` cursor moves.
    pub fn record_steps(&mut self, count: u64) {
        self.steps += count;
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("eliminations".to_string(), self.eliminations as f64);
        metrics.insert("ring_size".to_string(), self.ring_size as f64);
        metrics.insert("steps".to_string(), self.steps as f64);
        metrics
    }
}

impl ListMetrics for JosephusMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "Josephus"
    }
}
