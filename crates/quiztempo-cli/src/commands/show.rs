//! The `quiztempo show` command.

use std::path::PathBuf;

use anyhow::Result;

use quiztempo_core::model::SessionResult;
use quiztempo_core::report::ResultsSummary;

use super::results_table;

pub fn execute(path: PathBuf) -> Result<()> {
    let result = SessionResult::load_json(&path)?;
    let summary = ResultsSummary::from_result(&result);

    println!(
        "Session {} ({} question(s))",
        result.session_id, result.question_count
    );
    println!("{}", results_table(&summary));
    println!("{}", summary.score_line());
    println!("{}", summary.latency_line());

    if summary.total < result.question_count {
        println!(
            "Warning: only {} of {} questions were answered.",
            summary.total, result.question_count
        );
    }

    Ok(())
}
