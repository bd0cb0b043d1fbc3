//! Core data model types for quiztempo.
//!
//! Questions are produced once per session by the generator, answer records
//! are appended by the evaluator, and a `SessionResult` is what gets
//! persisted when a session completes.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single multiplication question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Text shown to the user.
    pub prompt: String,
    /// The two factors, in the order they were drawn.
    pub operands: (u32, u32),
    /// The product of the operands.
    pub correct_answer: i64,
}

impl Question {
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            prompt: format!("What is {a} x {b}?"),
            operands: (a, b),
            correct_answer: i64::from(a) * i64::from(b),
        }
    }

    /// The operands as an unordered pair, smallest first.
    ///
    /// Used to avoid asking both "a x b" and "b x a" in one session.
    pub fn pair_key(&self) -> (u32, u32) {
        let (a, b) = self.operands;
        (a.min(b), a.max(b))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prompt)
    }
}

/// The stored outcome of one answered question.
///
/// Field order matches the persisted column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Zero-based position of the question in the session.
    pub question_index: usize,
    pub prompt: String,
    /// The raw text the user submitted, verbatim.
    pub user_input: String,
    pub correct_answer: i64,
    /// Seconds between first presentation and submission, to hundredths.
    pub elapsed_seconds: f64,
    pub is_correct: bool,
}

/// A finished session as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Session start timestamp, `%Y-%m-%d_%H-%M-%S`.
    pub session_id: String,
    /// Number of questions the session was started with.
    pub question_count: usize,
    /// Answer records in submission order.
    pub records: Vec<AnswerRecord>,
}

impl SessionResult {
    /// Load a result from a JSON file written by the JSON sink.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        let result: SessionResult =
            serde_json::from_str(&content).context("failed to parse results JSON")?;
        Ok(result)
    }
}
