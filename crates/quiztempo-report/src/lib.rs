//! quiztempo-report — Result persistence.
//!
//! Writes each finished session twice: a structured JSON document and a
//! flat CSV table, both keyed by the session id.

pub mod structured;
pub mod tabular;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use quiztempo_core::model::SessionResult;
use quiztempo_core::traits::{ResultSink, SavedFiles};

/// Sink that writes `results_<session_id>.json` and `.csv` into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the JSON file for a session.
    pub fn json_path(&self, session_id: &str) -> PathBuf {
        self.output_dir.join(format!("results_{session_id}.json"))
    }

    /// Path of the CSV file for a session.
    pub fn csv_path(&self, session_id: &str) -> PathBuf {
        self.output_dir.join(format!("results_{session_id}.csv"))
    }
}

impl ResultSink for FileSink {
    fn name(&self) -> &str {
        "files"
    }

    /// Both files are staged in full before either is moved into place. If
    /// the second rename fails the first file is removed again, so a failed
    /// save never leaves half a result behind.
    fn persist(&self, result: &SessionResult) -> Result<SavedFiles> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let json = structured::generate_json(result)?;
        let csv = tabular::generate_csv(result)?;
        let json_path = self.json_path(&result.session_id);
        let csv_path = self.csv_path(&result.session_id);

        let json_tmp = stage(&self.output_dir, json.as_bytes())?;
        let csv_tmp = stage(&self.output_dir, csv.as_bytes())?;

        json_tmp
            .persist(&json_path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to write {}", json_path.display()))?;

        if let Err(e) = csv_tmp.persist(&csv_path) {
            if let Err(cleanup) = fs::remove_file(&json_path) {
                tracing::warn!(
                    path = %json_path.display(),
                    error = %cleanup,
                    "failed to remove JSON results after CSV write failed"
                );
            }
            return Err(anyhow::Error::from(e.error))
                .with_context(|| format!("failed to write {}", csv_path.display()));
        }

        tracing::debug!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            "wrote results files"
        );
        Ok(SavedFiles {
            paths: vec![json_path, csv_path],
        })
    }
}

/// Write `bytes` to a temporary file inside `dir`, synced to disk.
fn stage(dir: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .context("failed to write temporary results file")?;
    tmp.as_file()
        .sync_all()
        .context("failed to sync temporary results file")?;
    Ok(tmp)
}
