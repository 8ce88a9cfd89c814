//! packlint CLI tool.
//!
//! Usage:
//! ```bash
//! packlint check [OPTIONS] [PATH]
//! packlint list-rules
//! packlint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Import linter enforcing Python package encapsulation
#[derive(Parser)]
#[command(name = "packlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run import checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Regular expressions for disallowed imports (comma-separated)
        #[arg(long, value_delimiter = ',')]
        disallowed: Vec<String>,

        /// Top level directory for parsing file paths as module names
        #[arg(long)]
        top_level_dir: Option<PathBuf>,

        /// Switch off parsing file paths as module names
        #[arg(long)]
        no_deduce_path: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
            disallowed,
            top_level_dir,
            no_deduce_path,
        } => {
            let overrides = commands::check::Overrides {
                exclude,
                disallowed,
                top_level_dir,
                no_deduce_path,
            };
            commands::check::run(&path, format, &overrides, cli.config.as_deref())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
