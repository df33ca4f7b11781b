//! Solves the Josephus problem for a ring of 100 people, every second one
//! eliminated.
//!
//! Run with `RUST_LOG=debug cargo run --example josephus` to watch every
//! elimination.

use ring_lru::metrics::ListMetrics;
use ring_lru::{CircularList, Error, JosephusSolver};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ring = CircularList::from_ring_order(1..=100u32)?;
    let solver = JosephusSolver::try_new(2)?;
    let outcome = solver.solve(ring)?;

    println!("Survivor: {}", outcome.survivor);
    println!("First eliminated: {:?}", &outcome.eliminated[..10]);
    for (name, value) in outcome.metrics.metrics() {
        println!("  {name}: {value}");
    }
    Ok(())
}
