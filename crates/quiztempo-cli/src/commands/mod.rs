pub mod init;
pub mod play;
pub mod show;

use comfy_table::{Cell, Table};

use quiztempo_core::report::ResultsSummary;

/// Per-question results table, in answer order.
pub(crate) fn results_table(summary: &ResultsSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Expected", "Correct", "Time (s)"]);

    for record in &summary.details {
        table.add_row(vec![
            Cell::new(record.question_index + 1),
            Cell::new(&record.prompt),
            Cell::new(&record.user_input),
            Cell::new(record.correct_answer),
            Cell::new(if record.is_correct { "yes" } else { "no" }),
            Cell::new(format!("{:.2}", record.elapsed_seconds)),
        ]);
    }

    table
}
