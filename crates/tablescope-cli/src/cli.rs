//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tablescope: profile comma-separated datasets
#[derive(Parser)]
#[command(name = "tablescope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a dataset: column types, statistics and integrity issues
    Profile {
        /// Path to the dataset (comma-separated text)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the full profile as JSON
        #[arg(long)]
        json: bool,

        /// Profiler configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Extract dataset and chart blocks from a response
    Extract {
        /// Path to the response text
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a response to a dataset and report what changed
    Respond {
        /// Path to the current dataset
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Path to the response text
        #[arg(value_name = "RESPONSE")]
        response: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
