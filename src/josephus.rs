//! Josephus Elimination
//!
//! Simulates the Josephus problem on a [`CircularList`]: starting at the ring's
//! first element, count off `n` elements, eliminate the n-th, and continue
//! counting from its successor until a single element survives.
//!
//! The solver takes the ring by value. The simulation destroys it, and no
//! other handle can observe the ring half-way through.
//!
//! ```
//! use ring_lru::{CircularList, JosephusSolver};
//! use core::num::NonZeroUsize;
//!
//! let ring = CircularList::from_ring_order(1..=5).unwrap();
//! let solver = JosephusSolver::new(NonZeroUsize::new(2).unwrap());
//! let outcome = solver.solve(ring).unwrap();
//!
//! assert_eq!(outcome.survivor, 3);
//! assert_eq!(outcome.eliminated, vec![2, 4, 1, 5]);
//! ```

extern crate alloc;

use crate::circular::CircularList;
use crate::error::Error;
use crate::metrics::JosephusMetrics;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

use log::{debug, info};

/// Result of a full Josephus simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JosephusOutcome<T> {
    /// The last element left in the ring.
    pub survivor: T,
    /// Every eliminated element, in elimination order.
    pub eliminated: Vec<T>,
    /// Counters collected during the run.
    pub metrics: JosephusMetrics,
}

/// Eliminates every n-th element of a ring until one remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JosephusSolver {
    step: NonZeroUsize,
}

impl JosephusSolver {
    /// Creates a solver that eliminates every `step`-th element.
    pub fn new(step: NonZeroUsize) -> Self {
        JosephusSolver { step }
    }

    /// Creates a solver from a plain integer, rejecting a zero step.
    pub fn try_new(step: usize) -> Result<Self, Error> {
        NonZeroUsize::new(step)
            .map(JosephusSolver::new)
            .ok_or(Error::InvalidArgument("elimination step must be non-zero"))
    }

    /// Returns the elimination step.
    pub fn step(&self) -> NonZeroUsize {
        self.step
    }

    /// Runs the simulation and collects the elimination order.
    ///
    /// Victims are moved into [`JosephusOutcome::eliminated`] as they leave
    /// the ring.
    pub fn solve<T, S>(&self, list: CircularList<T, S>) -> Result<JosephusOutcome<T>, Error>
    where
        T: Hash + Eq + fmt::Debug,
        S: BuildHasher,
    {
        let mut eliminated = Vec::with_capacity(list.len().saturating_sub(1));
        let mut metrics = JosephusMetrics::new(list.len() as u64);
        let survivor = self.run(list, &mut metrics, |v| eliminated.push(v))?;
        Ok(JosephusOutcome {
            survivor,
            eliminated,
            metrics,
        })
    }

    /// Runs the simulation, calling `on_eliminate` with each element as it is
    /// removed, and returns the survivor.
    pub fn solve_with<T, S, F>(
        &self,
        list: CircularList<T, S>,
        mut on_eliminate: F,
    ) -> Result<T, Error>
    where
        T: Hash + Eq + fmt::Debug,
        S: BuildHasher,
        F: FnMut(&T),
    {
        let mut metrics = JosephusMetrics::new(list.len() as u64);
        self.run(list, &mut metrics, |v| on_eliminate(&v))
    }

    fn run<T, S, F>(
        &self,
        mut list: CircularList<T, S>,
        metrics: &mut JosephusMetrics,
        mut sink: F,
    ) -> Result<T, Error>
    where
        T: Hash + Eq + fmt::Debug,
        S: BuildHasher,
        F: FnMut(T),
    {
        if list.is_empty() {
            return Err(Error::EmptyRing);
        }
        let step = self.step.get();
        debug!("josephus: ring of {} elements, step {}", list.len(), step);

        let mut cursor = list.cursor_mut();
        while cursor.len() > 1 {
            // Counting starts at 1 on the current element, so the victim is
            // step - 1 moves ahead. Whole laps land back on the same node.
            let moves = (step - 1) % cursor.len();
            for _ in 0..moves {
                cursor.move_next();
            }
            metrics.record_steps(moves as u64);

            if let Some(victim) = cursor.remove_current() {
                metrics.record_elimination();
                debug!("josephus: kill {:?}, {} remaining", victim, cursor.len());
                sink(victim);
            }
        }

        let survivor = cursor.remove_current().ok_or(Error::EmptyRing)?;
        info!(
            "josephus: alive {:?} after {} eliminations",
            survivor, metrics.eliminations
        );
        Ok(survivor)
    }
}

/// Runs the Josephus simulation on `list` with step `n` and returns the
/// survivor.
///
/// ```
/// use ring_lru::{josephus, CircularList};
///
/// let ring = CircularList::from_ring_order(1..=7).unwrap();
/// assert_eq!(josephus(ring, 3), Ok(4));
/// ```
pub fn josephus<T, S>(list: CircularList<T, S>, n: usize) -> Result<T, Error>
where
    T: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    JosephusSolver::try_new(n)?.solve_with(list, |_| {})
}
