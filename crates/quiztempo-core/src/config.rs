//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quiztempo.toml";

/// Top-level quiztempo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question count used when none is given on the command line.
    #[serde(default = "default_questions")]
    pub default_questions: usize,
    /// Directory results files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_questions() -> usize {
    5
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("quiz-results")
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_questions: default_questions(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or fall back to the local file.
///
/// An explicit path that does not exist is an error; a missing local file
/// just means defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(QuizConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.default_questions, 5);
        assert_eq!(config.output_dir, PathBuf::from("quiz-results"));
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizConfig = toml::from_str("default_questions = 12\n").unwrap();
        assert_eq!(config.default_questions, 12);
        assert_eq!(config.output_dir, PathBuf::from("quiz-results"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "default_questions = 3\noutput_dir = \"out\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_questions, 3);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn missing_explicit_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "default_questions = \"many\"\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
