//! Multiplication question generator.
//!
//! Draws the first factor from 1..=6 and the second from 1..=10, rejecting
//! any pair whose unordered form was already used in the session.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::QuizError;
use crate::model::Question;

/// Range of the first operand.
pub const FIRST_OPERAND: RangeInclusive<u32> = 1..=6;
/// Range of the second operand.
pub const SECOND_OPERAND: RangeInclusive<u32> = 1..=10;

/// Smallest question count a session accepts.
pub const MIN_QUESTIONS: usize = 1;
/// Largest question count a session accepts.
pub const MAX_QUESTIONS: usize = 50;

/// Upper bound on rejection-sampling draws for a single `generate` call.
const MAX_DRAWS: usize = 100_000;

/// Number of distinct unordered operand pairs the grid can produce.
pub fn distinct_pair_count() -> usize {
    let mut pairs = HashSet::new();
    for a in FIRST_OPERAND {
        for b in SECOND_OPERAND {
            pairs.insert((a.min(b), a.max(b)));
        }
    }
    pairs.len()
}

/// Check that `n` questions can be generated, without drawing any.
pub fn check_feasible(n: usize) -> Result<(), QuizError> {
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&n) {
        return Err(QuizError::InvalidQuestionCount {
            requested: n,
            min: MIN_QUESTIONS,
            max: MAX_QUESTIONS,
        });
    }
    let available = distinct_pair_count();
    if n > available {
        return Err(QuizError::InfeasibleQuestionCount {
            requested: n,
            available,
        });
    }
    Ok(())
}

/// Generate `n` questions with pairwise-distinct unordered operand pairs.
pub fn generate(n: usize) -> Result<Vec<Question>, QuizError> {
    generate_with(n, &mut rand::rng())
}

/// Generate `n` questions using the supplied random source.
pub fn generate_with<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Question>, QuizError> {
    check_feasible(n)?;

    let mut seen = HashSet::with_capacity(n);
    let mut questions = Vec::with_capacity(n);
    let mut draws = 0usize;

    while questions.len() < n {
        if draws >= MAX_DRAWS {
            return Err(QuizError::GenerationExhausted {
                requested: n,
                collected: questions.len(),
                draws,
            });
        }
        draws += 1;

        let a = rng.random_range(FIRST_OPERAND);
        let b = rng.random_range(SECOND_OPERAND);
        let question = Question::new(a, b);
        if seen.insert(question.pair_key()) {
            questions.push(question);
        }
    }

    tracing::debug!(count = n, draws, "generated questions");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_has_45_unordered_pairs() {
        // 6 x 10 ordered pairs collapse to 45 once (a, b) and (b, a) merge.
        assert_eq!(distinct_pair_count(), 45);
    }

    #[test]
    fn every_feasible_count_yields_distinct_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in MIN_QUESTIONS..=distinct_pair_count() {
            let questions = generate_with(n, &mut rng).unwrap();
            assert_eq!(questions.len(), n);

            let keys: HashSet<_> = questions.iter().map(Question::pair_key).collect();
            assert_eq!(keys.len(), n, "duplicate pair for n={n}");

            for q in &questions {
                assert!(FIRST_OPERAND.contains(&q.operands.0));
                assert!(SECOND_OPERAND.contains(&q.operands.1));
                assert_eq!(
                    q.correct_answer,
                    i64::from(q.operands.0) * i64::from(q.operands.1)
                );
            }
        }
    }

    #[test]
    fn counts_above_pair_limit_are_rejected_up_front() {
        for n in (distinct_pair_count() + 1)..=MAX_QUESTIONS {
            let err = generate(n).unwrap_err();
            assert!(
                matches!(err, QuizError::InfeasibleQuestionCount { available: 45, .. }),
                "unexpected error for n={n}: {err}"
            );
        }
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        assert!(matches!(
            generate(0),
            Err(QuizError::InvalidQuestionCount { requested: 0, .. })
        ));
        assert!(matches!(
            generate(51),
            Err(QuizError::InvalidQuestionCount { requested: 51, .. })
        ));
    }

    #[test]
    fn same_seed_same_questions() {
        let first = generate_with(10, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = generate_with(10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }
}
