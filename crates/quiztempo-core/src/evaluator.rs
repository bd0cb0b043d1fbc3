//! Answer evaluation.

use crate::model::{AnswerRecord, Question};

/// Score a raw answer against a question.
///
/// The input is parsed as a float after trimming whitespace. Anything that
/// fails to parse is scored incorrect rather than reported, so a typo never
/// blocks the quiz. No tolerance is applied: "42" and "42.0" both match 42.
pub fn evaluate(
    raw_input: &str,
    question: &Question,
    question_index: usize,
    elapsed_seconds: f64,
) -> AnswerRecord {
    let is_correct = raw_input
        .trim()
        .parse::<f64>()
        .map(|value| value == question.correct_answer as f64)
        .unwrap_or(false);

    AnswerRecord {
        question_index,
        prompt: question.prompt.clone(),
        user_input: raw_input.to_string(),
        correct_answer: question.correct_answer,
        elapsed_seconds: round_hundredths(elapsed_seconds),
        is_correct,
    }
}

/// Round to two decimals, clamping negative or non-finite deltas to zero.
fn round_hundredths(seconds: f64) -> f64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0.0;
    }
    (seconds * 100.0).round() / 100.0
}
