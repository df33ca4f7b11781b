//! Log output of the Josephus solver.
//!
//! Installs a capturing logger, so it lives in its own test binary with a
//! single test.

use log::{Level, LevelFilter, Log, Metadata, Record};
use ring_lru::{CircularList, JosephusSolver};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_josephus_logs_each_victim_and_the_survivor() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let ring = CircularList::from_ring_order(["ann", "bob", "cat", "dan", "eve"]).unwrap();
    let solver = JosephusSolver::try_new(2).unwrap();
    let outcome = solver.solve(ring).unwrap();
    assert_eq!(outcome.survivor, "cat");

    let lines = LOGGER.lines.lock().unwrap();
    let kills: Vec<&str> = lines
        .iter()
        .filter(|(level, line)| *level == Level::Debug && line.contains("kill"))
        .map(|(_, line)| line.as_str())
        .collect();
    assert_eq!(kills.len(), 4, "one debug line per elimination");
    for (line, victim) in kills.iter().zip(["\"bob\"", "\"dan\"", "\"ann\"", "\"eve\""]) {
        assert!(line.contains(victim), "{line:?} should name {victim}");
    }

    let alive: Vec<&(Level, String)> = lines
        .iter()
        .filter(|(_, line)| line.contains("alive"))
        .collect();
    assert_eq!(alive.len(), 1);
    assert_eq!(alive[0].0, Level::Info);
    assert!(alive[0].1.contains("\"cat\""), "survivor is named in the log");
}
