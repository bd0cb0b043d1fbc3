//! The `quiztempo play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quiztempo_core::config::load_config_from;
use quiztempo_core::generator::check_feasible;
use quiztempo_core::traits::SystemClock;
use quiztempo_core::{Phase, QuizSession, SaveStatus};
use quiztempo_report::FileSink;

use super::results_table;

pub fn execute(
    questions: Option<usize>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let count = questions.unwrap_or(config.default_questions);
    let output_dir = output.unwrap_or(config.output_dir);

    // Surface an impossible question count before anything is shown.
    check_feasible(count)?;
    tracing::debug!(count, output = %output_dir.display(), seeded = seed.is_some(), "starting play");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let sink = Arc::new(FileSink::new(output_dir));
    let mut session = QuizSession::new(Arc::new(SystemClock), sink);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut session,
        count,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Drive quizzes until the user declines to play again or input ends.
fn run<R: BufRead, W: Write>(
    session: &mut QuizSession,
    count: usize,
    rng: &mut StdRng,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        session.start_with_rng(count, rng)?;
        writeln!(
            out,
            "Timed quiz: {count} question(s). Type each answer and press Enter."
        )?;

        while session.phase() == Phase::InProgress {
            let shown = session.present()?;
            writeln!(out, "\nQuestion {} of {}", shown.index + 1, shown.total)?;
            write!(out, "{} ", shown.prompt)?;
            out.flush()?;

            let Some(answer) = read_line(input)? else {
                anyhow::bail!(
                    "input closed before the quiz finished ({} of {} answered)",
                    shown.index,
                    shown.total
                );
            };
            session.submit(&answer)?;
        }

        print_results(session, out)?;
        handle_save(session, input, out)?;

        if !ask(input, out, "Play again? [y/N] ")? {
            return Ok(());
        }
        session.reset()?;
        writeln!(out)?;
    }
}

fn print_results<W: Write>(session: &QuizSession, out: &mut W) -> Result<()> {
    let Some(summary) = session.summary() else {
        return Ok(());
    };
    writeln!(out, "\nQuiz complete!")?;
    writeln!(out, "{}", results_table(&summary))?;
    writeln!(out, "{}", summary.score_line())?;
    writeln!(out, "{}", summary.latency_line())?;
    if summary.is_perfect() {
        writeln!(out, "Perfect score!")?;
    }
    Ok(())
}

/// Report where results went, offering retries if the save failed.
///
/// When the user gives up on saving, the results are printed as JSON so
/// nothing collected in this session is lost.
fn handle_save<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        match session.save_status().clone() {
            SaveStatus::Saved(files) => {
                for path in &files.paths {
                    writeln!(out, "Results saved to: {}", path.display())?;
                }
                return Ok(());
            }
            SaveStatus::Failed(message) => {
                writeln!(out, "Could not save results: {message}")?;
                if ask(input, out, "Retry saving? [y/N] ")? {
                    // The outcome lands in save_status, checked on the next pass.
                    let _ = session.retry_save();
                    continue;
                }
                if let Some(result) = session.result() {
                    writeln!(out, "Unsaved results:")?;
                    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
                }
                return Ok(());
            }
            SaveStatus::Pending => return Ok(()),
        }
    }
}

/// Read one line without its line terminator. `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// answer is scored as wrong instead of ending the quiz.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question; anything but "y"/"yes" (or end of input) is no.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
