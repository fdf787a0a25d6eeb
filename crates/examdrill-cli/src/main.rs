//! examdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "examdrill", version, about = "Terminal exam study aid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Study an exam interactively
    Study {
        /// Path to a .json exam file or a directory of exams
        #[arg(long, default_value = "./exams")]
        exams: PathBuf,
    },

    /// Validate exam JSON files
    Validate {
        /// Path to an exam file or directory
        #[arg(long, default_value = "./exams")]
        exams: PathBuf,
    },

    /// List available exams
    List {
        /// Path to an exam file or directory
        #[arg(long, default_value = "./exams")]
        exams: PathBuf,
    },

    /// Create the exams directory and a starter exam
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Study { exams } => commands::study::execute(exams),
        Commands::Validate { exams } => commands::validate::execute(exams),
        Commands::List { exams } => commands::list::execute(exams),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
