//! Quiz session state machine.
//!
//! A [`QuizSession`] owns at most one running quiz and moves it through
//! `NotStarted -> InProgress -> Completed -> (reset) -> NotStarted`. Each
//! external action (start, present, submit, reset) has exactly one entry
//! point; actions issued in the wrong phase fail without touching state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::evaluator::evaluate;
use crate::generator::{self, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::model::{AnswerRecord, Question, SessionResult};
use crate::report::{summarize, ResultsSummary};
use crate::traits::{Clock, ResultSink, SavedFiles};

/// Format of the session id, which doubles as the results file key.
pub const SESSION_ID_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Session id for a quiz started at `at`, in the user's local time.
pub fn session_id_at(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(SESSION_ID_FORMAT).to_string()
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

/// All state of one running quiz.
#[derive(Debug, Clone)]
pub struct SessionState {
    session_id: String,
    questions: Vec<Question>,
    current_index: usize,
    records: Vec<AnswerRecord>,
    timer_start: Option<DateTime<Utc>>,
    completed: bool,
}

impl SessionState {
    fn new(session_id: String, questions: Vec<Question>) -> Self {
        Self {
            session_id,
            questions,
            current_index: 0,
            records: Vec::new(),
            timer_start: None,
            completed: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// When the current question was first presented, if it has been.
    pub fn timer_start(&self) -> Option<DateTime<Utc>> {
        self.timer_start
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn to_result(&self) -> SessionResult {
        SessionResult {
            session_id: self.session_id.clone(),
            question_count: self.questions.len(),
            records: self.records.clone(),
        }
    }
}

/// The question currently awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    /// Zero-based index of the question.
    pub index: usize,
    /// Total number of questions in the session.
    pub total: usize,
    pub prompt: String,
}

/// What happened after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// More questions remain.
    Continue(AnswerRecord),
    /// That was the last question; results have been handed to the sink.
    Completed(AnswerRecord),
}

impl SubmitOutcome {
    pub fn record(&self) -> &AnswerRecord {
        match self {
            SubmitOutcome::Continue(r) | SubmitOutcome::Completed(r) => r,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

/// Outcome of persisting a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// No save has been attempted for the current session.
    Pending,
    Saved(SavedFiles),
    /// The last attempt failed; records remain in memory.
    Failed(String),
}

/// Owner of the quiz state, with one method per user action.
pub struct QuizSession {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn ResultSink>,
    state: Option<SessionState>,
    save_status: SaveStatus,
}

impl QuizSession {
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            clock,
            sink,
            state: None,
            save_status: SaveStatus::Pending,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            None => Phase::NotStarted,
            Some(state) if state.completed => Phase::Completed,
            Some(_) => Phase::InProgress,
        }
    }

    /// The running session's state, if one has been started.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Start a quiz of `n` randomly generated questions.
    pub fn start(&mut self, n: usize) -> Result<(), QuizError> {
        self.start_with_rng(n, &mut rand::rng())
    }

    /// Start a quiz of `n` questions drawn from the supplied random source.
    pub fn start_with_rng<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<(), QuizError> {
        self.expect_phase(Phase::NotStarted, "start")?;
        let questions = generator::generate_with(n, rng)?;
        self.begin(questions);
        Ok(())
    }

    /// Start a quiz with a fixed list of questions.
    pub fn start_with_questions(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        self.expect_phase(Phase::NotStarted, "start")?;
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&questions.len()) {
            return Err(QuizError::InvalidQuestionCount {
                requested: questions.len(),
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }
        self.begin(questions);
        Ok(())
    }

    fn begin(&mut self, questions: Vec<Question>) {
        let session_id = session_id_at(self.clock.now());
        tracing::info!(
            session_id = %session_id,
            questions = questions.len(),
            "quiz started"
        );
        self.state = Some(SessionState::new(session_id, questions));
        self.save_status = SaveStatus::Pending;
    }

    /// Show the current question, starting its timer on first presentation.
    ///
    /// Presenting the same question again leaves the timer and records alone.
    pub fn present(&mut self) -> Result<PresentedQuestion, QuizError> {
        self.expect_phase(Phase::InProgress, "present a question")?;
        let now = self.clock.now();
        let state = self.active_state_mut()?;

        if state.timer_start.is_none() {
            state.timer_start = Some(now);
        }

        let question = &state.questions[state.current_index];
        Ok(PresentedQuestion {
            index: state.current_index,
            total: state.questions.len(),
            prompt: question.prompt.clone(),
        })
    }

    /// Answer the current question with raw user text.
    ///
    /// A submission for a question that was never presented records zero
    /// elapsed time. After the last question the session completes and the
    /// results are handed to the sink exactly once; a failed save does not
    /// fail the submission.
    pub fn submit(&mut self, raw_input: &str) -> Result<SubmitOutcome, QuizError> {
        self.expect_phase(Phase::InProgress, "submit an answer")?;
        let now = self.clock.now();
        let state = self.active_state_mut()?;

        let elapsed = state
            .timer_start
            .map(|start| (now - start).num_milliseconds() as f64 / 1000.0)
            .unwrap_or(0.0);
        let index = state.current_index;
        let record = evaluate(raw_input, &state.questions[index], index, elapsed);

        state.records.push(record.clone());
        state.current_index += 1;
        state.timer_start = None;
        debug_assert_eq!(state.current_index, state.records.len());

        tracing::debug!(
            question = index,
            correct = record.is_correct,
            elapsed_seconds = record.elapsed_seconds,
            "answer recorded"
        );

        if state.current_index < state.questions.len() {
            return Ok(SubmitOutcome::Continue(record));
        }

        state.completed = true;
        let summary = summarize(&state.records);
        tracing::info!(
            session_id = %state.session_id,
            score = summary.score,
            total = summary.total,
            "quiz completed"
        );

        // Persistence failures are reported through `save_status`, never here.
        let _ = self.save();
        Ok(SubmitOutcome::Completed(record))
    }

    /// Try again to persist a completed session whose save failed.
    ///
    /// A session that was already saved is not written a second time.
    pub fn retry_save(&mut self) -> Result<SavedFiles, QuizError> {
        self.expect_phase(Phase::Completed, "retry saving")?;
        self.save()
    }

    fn save(&mut self) -> Result<SavedFiles, QuizError> {
        if let SaveStatus::Saved(files) = &self.save_status {
            return Ok(files.clone());
        }
        let result = match &self.state {
            Some(state) => state.to_result(),
            None => {
                return Err(QuizError::InvalidTransition {
                    action: "save",
                    phase: Phase::NotStarted,
                })
            }
        };

        match self.sink.persist(&result) {
            Ok(files) => {
                tracing::info!(
                    session_id = %result.session_id,
                    sink = self.sink.name(),
                    files = files.paths.len(),
                    "results saved"
                );
                self.save_status = SaveStatus::Saved(files.clone());
                Ok(files)
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(
                    session_id = %result.session_id,
                    sink = self.sink.name(),
                    error = %message,
                    "failed to save results"
                );
                self.save_status = SaveStatus::Failed(message.clone());
                Err(QuizError::Persistence(message))
            }
        }
    }

    /// Score and latency for the answers given so far.
    pub fn summary(&self) -> Option<ResultsSummary> {
        self.state.as_ref().map(|s| summarize(&s.records))
    }

    /// The persistable form of the current session.
    pub fn result(&self) -> Option<SessionResult> {
        self.state.as_ref().map(SessionState::to_result)
    }

    /// Discard a completed session and return to `NotStarted`.
    ///
    /// Files already written are left in place.
    pub fn reset(&mut self) -> Result<(), QuizError> {
        self.expect_phase(Phase::Completed, "reset")?;
        if let Some(state) = self.state.take() {
            tracing::info!(session_id = %state.session_id, "quiz reset");
        }
        self.save_status = SaveStatus::Pending;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), QuizError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition { action, phase })
        }
    }

    fn active_state_mut(&mut self) -> Result<&mut SessionState, QuizError> {
        let phase = self.phase();
        match self.state.as_mut() {
            Some(state) if !state.completed => Ok(state),
            _ => Err(QuizError::InvalidTransition {
                action: "continue",
                phase,
            }),
        }
    }
}
