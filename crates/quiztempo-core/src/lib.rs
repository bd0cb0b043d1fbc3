//! quiztempo-core — Quiz session state machine, question generation, and scoring.
//!
//! This crate defines the data model, the session state machine, and the
//! seams (clock and result sink) that the rest of quiztempo builds on.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod mock;
pub mod model;
pub mod report;
pub mod session;
pub mod traits;

pub use error::QuizError;
pub use session::{Phase, QuizSession, SaveStatus, SubmitOutcome};
