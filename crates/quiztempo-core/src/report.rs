//! Results summary: score, mean latency, and the per-question detail view.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerRecord, SessionResult};

/// Aggregated outcome of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Number of correct answers.
    pub score: usize,
    /// Number of answered questions.
    pub total: usize,
    /// Average seconds per answer, `None` when nothing was answered.
    pub mean_latency_seconds: Option<f64>,
    /// Records in the order they were answered.
    pub details: Vec<AnswerRecord>,
}

/// Summarize a sequence of answer records.
pub fn summarize(records: &[AnswerRecord]) -> ResultsSummary {
    let total = records.len();
    let score = records.iter().filter(|r| r.is_correct).count();
    let mean_latency_seconds = if total == 0 {
        None
    } else {
        Some(records.iter().map(|r| r.elapsed_seconds).sum::<f64>() / total as f64)
    };

    ResultsSummary {
        score,
        total,
        mean_latency_seconds,
        details: records.to_vec(),
    }
}

impl ResultsSummary {
    /// Summarize a persisted session.
    pub fn from_result(result: &SessionResult) -> Self {
        summarize(&result.records)
    }

    /// "Score: 1 of 2".
    pub fn score_line(&self) -> String {
        format!("Score: {} of {}", self.score, self.total)
    }

    /// "Average time: 1.50s", or a dash when there is nothing to average.
    pub fn latency_line(&self) -> String {
        match self.mean_latency_seconds {
            Some(mean) => format!("Average time: {mean:.2}s"),
            None => "Average time: -".to_string(),
        }
    }

    /// Returns true if every answered question was correct.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}
