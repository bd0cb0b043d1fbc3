use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quiztempo_core::evaluator::evaluate;
use quiztempo_core::generator::{distinct_pair_count, generate_with};
use quiztempo_core::model::{AnswerRecord, Question};
use quiztempo_core::report::summarize;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for n in [5usize, 20, distinct_pair_count()] {
        group.bench_function(format!("n={n}"), |b| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_with(black_box(n), &mut rng).unwrap())
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let question = Question::new(6, 7);
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("correct", |b| {
        b.iter(|| evaluate(black_box("42"), &question, 0, black_box(1.234)))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| evaluate(black_box("forty-two"), &question, 0, black_box(1.234)))
    });

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let records: Vec<AnswerRecord> = (0..45)
        .map(|i| AnswerRecord {
            question_index: i,
            prompt: String::new(),
            user_input: String::new(),
            correct_answer: 0,
            elapsed_seconds: i as f64 * 0.1,
            is_correct: i % 2 == 0,
        })
        .collect();

    c.bench_function("summarize_45", |b| b.iter(|| summarize(black_box(&records))));
}

criterion_group!(benches, bench_generate, bench_evaluate, bench_summarize);
criterion_main!(benches);
