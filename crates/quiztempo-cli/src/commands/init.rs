//! The `quiztempo init` command.

use std::path::Path;

use anyhow::Result;

use quiztempo_core::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE_NAME, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE_NAME}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to change the default question count");
    println!("  2. Run: quiztempo play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quiztempo configuration

# Questions per quiz when --questions is not given (1-45).
default_questions = 5

# Where results_<session>.json and .csv are written.
output_dir = "quiz-results"
"#;
