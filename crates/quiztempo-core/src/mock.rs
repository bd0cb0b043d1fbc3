//! In-memory clock and sink for testing the session without real time or disk.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::SessionResult;
use crate::traits::{Clock, ResultSink, SavedFiles};

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// A clock fixed at 2025-01-01 10:00:00 UTC.
    pub fn at_fixed_start() -> Self {
        Self::new(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap())
    }

    /// Move the clock forward by a number of seconds (fractions allowed).
    pub fn advance_secs(&self, seconds: f64) {
        let delta = Duration::milliseconds((seconds * 1000.0).round() as i64);
        *self.now.lock().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A sink that keeps persisted results in memory.
///
/// Can be told to fail so save-failure handling can be exercised.
pub struct MemorySink {
    /// Every result successfully persisted, in order.
    saved: Mutex<Vec<SessionResult>>,
    /// Number of `persist` calls, including failed ones.
    call_count: AtomicU32,
    /// When set, `persist` returns an error.
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            call_count: AtomicU32::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Create a sink whose writes fail until [`MemorySink::set_failing`] clears it.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Get the number of calls made to this sink.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get every result persisted so far.
    pub fn saved(&self) -> Vec<SessionResult> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn persist(&self, result: &SessionResult) -> anyhow::Result<SavedFiles> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.failing.load(Ordering::Relaxed) {
            anyhow::bail!("memory sink configured to fail");
        }
        self.saved.lock().unwrap().push(result.clone());
        Ok(SavedFiles::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::at_fixed_start();
        let start = clock.now();
        clock.advance_secs(1.5);
        assert_eq!((clock.now() - start).num_milliseconds(), 1500);
    }

    #[test]
    fn memory_sink_counts_and_fails_on_demand() {
        let sink = MemorySink::failing();
        let result = SessionResult {
            session_id: "s".into(),
            question_count: 0,
            records: vec![],
        };

        assert!(sink.persist(&result).is_err());
        assert!(sink.saved().is_empty());

        sink.set_failing(false);
        sink.persist(&result).unwrap();
        assert_eq!(sink.call_count(), 2);
        assert_eq!(sink.saved().len(), 1);
    }
}
