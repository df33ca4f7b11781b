//! Feeds a short access sequence through an LRU list of default capacity.

use ring_lru::metrics::ListMetrics;
use ring_lru::LruList;

fn main() {
    env_logger::init();

    let mut list = LruList::default();
    for value in [1, 2, 3, 1, 4] {
        if let Some(evicted) = list.add(value) {
            println!("evicted {evicted}");
        }
    }

    println!("len = {}", list.len());
    println!("most recent first: {:?}", list.iter().collect::<Vec<_>>());
    println!("{} metrics: {:?}", list.algorithm_name(), list.metrics());
}
