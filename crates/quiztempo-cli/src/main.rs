//! quiztempo CLI — the interactive quiz front end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quiztempo", version, about = "Timed multiplication quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz, reading one answer per line from stdin
    Play {
        /// Number of questions (default: from config, 5)
        #[arg(long, short = 'n')]
        questions: Option<usize>,

        /// Output directory for results files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Seed for reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a saved results file
    Show {
        /// Path to a results JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    // Quiet by default so log lines stay out of the interactive transcript.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiztempo=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            questions,
            output,
            seed,
            config,
        } => commands::play::execute(questions, output, seed, config),
        Commands::Show { file } => commands::show::execute(file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
