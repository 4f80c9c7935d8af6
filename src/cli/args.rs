//! Command line argument parsing for the sentimen CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sentimen - bag-of-words sentiment classification with a linear SVM
#[derive(Parser, Debug, Clone)]
#[command(name = "sentimen")]
#[command(about = "Train, evaluate and run a linear-SVM sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentimenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentimenArgs {
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
    /// Train a classifier from a labeled CSV corpus
    Train(TrainArgs),

    /// Evaluate trained artifacts against a labeled CSV corpus
    Evaluate(EvaluateArgs),

    /// Predict sentiment for texts
    Predict(PredictArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled corpus CSV (header: Comment,Sentiment)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Where to write the vocabulary artifact (JSON)
    #[arg(long, default_value = "vocab.json")]
    pub vocab_out: PathBuf,

    /// Where to write the model artifact (binary)
    #[arg(long, default_value = "model.bin")]
    pub model_out: PathBuf,

    /// Vocabulary size cap
    #[arg(long, default_value_t = 10_000)]
    pub max_vocab: usize,

    /// Soft-margin regularization parameter C
    #[arg(long, default_value_t = 1.0)]
    pub c: f64,

    /// Solver convergence tolerance
    #[arg(long, default_value_t = 1e-3)]
    pub tolerance: f64,

    /// Solver pass cap per binary sub-model
    #[arg(long, default_value_t = 1000)]
    pub max_passes: usize,

    /// Treat the corpus as raw text needing normalization
    /// (omit when the corpus is already cleaned)
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Labeled corpus CSV to evaluate against
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Vocabulary artifact (JSON)
    #[arg(long, default_value = "vocab.json")]
    pub vocab: PathBuf,

    /// Model artifact (binary)
    #[arg(long, default_value = "model.bin")]
    pub model: PathBuf,

    /// Evaluate a random sample of at most this many rows
    #[arg(long, default_value_t = 5000)]
    pub sample: usize,

    /// Treat the corpus as raw text needing normalization
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Texts to classify (omit to read one text per line from a file)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Read texts, one per line, from this file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Vocabulary artifact (JSON)
    #[arg(long, default_value = "vocab.json")]
    pub vocab: PathBuf,

    /// Model artifact (binary)
    #[arg(long, default_value = "model.bin")]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
