//! Flat tabular (CSV) results output: a header row, then one row per answer.

use anyhow::{Context, Result};

use quiztempo_core::model::SessionResult;

/// Column names, in the order `AnswerRecord` serializes its fields.
pub const COLUMNS: [&str; 6] = [
    "question_index",
    "prompt",
    "user_input",
    "correct_answer",
    "elapsed_seconds",
    "is_correct",
];

/// Render a session's records as CSV.
///
/// The header is written explicitly so a session with no records still
/// produces a well-formed file.
pub fn generate_csv(result: &SessionResult) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .context("failed to write CSV header")?;
    for record in &result.records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write CSV row {}", record.question_index))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
