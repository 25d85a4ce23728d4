//! Command line argument parsing for the judol CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{MODEL_PATH_ENV, THRESHOLD_ENV};

/// Judol - detect gambling-promotion spam in comments
#[derive(Parser, Debug, Clone)]
#[command(name = "judol")]
#[command(about = "Canonicalize and classify gambling-promotion comments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JudolArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Detector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Classifier artifact (.json, .bin or .bincode)
    #[arg(short, long, value_name = "MODEL_FILE", env = MODEL_PATH_ENV, global = true)]
    pub model: Option<PathBuf>,

    /// Probability at or above which a comment is labelled judol
    #[arg(long, value_name = "PROBABILITY", env = THRESHOLD_ENV, global = true)]
    pub threshold: Option<f64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JudolArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the normalized form of texts
    Normalize(NormalizeArgs),

    /// Classify a comment
    Classify(ClassifyArgs),

    /// Score a JSON array of comments and summarize them
    Report(ReportArgs),

    /// Most frequent terms of a file of texts, one per line
    Keywords(KeywordsArgs),
}

/// Arguments for normalizing text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Texts to normalize
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for classifying a comment
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Comment text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// List the features behind the score
    #[arg(short, long)]
    pub explain: bool,

    /// Number of features to list
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,
}

/// Arguments for a batch report
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// JSON file with an array of comments
    #[arg(short, long, value_name = "COMMENTS_FILE")]
    pub input: PathBuf,

    /// Include every scored comment, not just the summary
    #[arg(long)]
    pub all: bool,
}

/// Arguments for keyword aggregation
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// Text file, one comment per line
    #[arg(short, long, value_name = "TEXT_FILE")]
    pub input: PathBuf,

    /// Number of keywords
    #[arg(short = 'n', long, default_value = "30")]
    pub top: usize,

    /// Ignore terms shorter than this
    #[arg(long, default_value = "1")]
    pub min_len: usize,

    /// Count raw terms instead of normalized ones
    #[arg(long)]
    pub raw: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
