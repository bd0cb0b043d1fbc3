//! Seams between the session state machine and the outside world.
//!
//! The session reads wall-clock time through [`Clock`] and hands finished
//! results to a [`ResultSink`]. The `quiztempo-report` crate provides the
//! file-backed sink; [`crate::mock`] provides in-memory doubles.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SessionResult;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ---------------------------------------------------------------------------
// Result sink
// ---------------------------------------------------------------------------

/// Destination for finished session results.
pub trait ResultSink: Send + Sync {
    /// Human-readable sink name (e.g. "files").
    fn name(&self) -> &str;

    /// Persist a finished session.
    ///
    /// Implementations must not report success unless every representation
    /// was written in full.
    fn persist(&self, result: &SessionResult) -> anyhow::Result<SavedFiles>;
}

/// Where a sink put a session's results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFiles {
    /// Paths written, structured format first. Empty for in-memory sinks.
    pub paths: Vec<PathBuf>,
}
