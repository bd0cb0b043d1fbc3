//! Quiz error types.
//!
//! These errors cover configuration mistakes caught before a quiz starts
//! and actions issued in the wrong session state. Malformed answers are not
//! errors: they are scored as incorrect by the evaluator.

use thiserror::Error;

use crate::session::Phase;

/// Errors raised by the quiz core.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The requested question count is outside the supported range.
    #[error("question count must be between {min} and {max}, got {requested}")]
    InvalidQuestionCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// More questions were requested than there are distinct operand pairs.
    #[error("cannot generate {requested} distinct questions: only {available} unique operand pairs exist")]
    InfeasibleQuestionCount { requested: usize, available: usize },

    /// The sampler hit its draw bound before collecting enough pairs.
    #[error("gave up after {draws} draws with {collected} of {requested} questions generated")]
    GenerationExhausted {
        requested: usize,
        collected: usize,
        draws: usize,
    },

    /// An action was issued in a state that does not accept it.
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    /// Writing the results to disk failed.
    #[error("failed to save results: {0}")]
    Persistence(String),
}

impl QuizError {
    /// Returns `true` if this error was detected before any quiz state changed
    /// and should be shown to the user as a setup problem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidQuestionCount { .. } | QuizError::InfeasibleQuestionCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        let err = QuizError::InfeasibleQuestionCount {
            requested: 50,
            available: 45,
        };
        assert!(err.is_configuration());
        assert!(err.to_string().contains("45 unique operand pairs"));

        let err = QuizError::InvalidTransition {
            action: "submit",
            phase: Phase::Completed,
        };
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "cannot submit while the quiz is completed");
    }
}
