//! Error types for the Sentimen library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SentimenError`] enum. The classifier-specific variants
//! ([`SentimenError::DimensionMismatch`], [`SentimenError::ModelNotTrained`],
//! [`SentimenError::LengthMismatch`], [`SentimenError::EmptyCorpus`],
//! [`SentimenError::CorruptArtifact`]) are programmer/data errors surfaced
//! to the caller; they are never retried internally.
//!
//! # Examples
//!
//! ```
//! use sentimen::error::{SentimenError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentimenError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sentimen operations.
#[derive(Error, Debug)]
pub enum SentimenError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A feature vector's length disagrees with the model or vocabulary,
    /// or vector and label counts disagree.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Prediction was attempted before training.
    #[error("Model not trained: {0}")]
    ModelNotTrained(String),

    /// Evaluator input sequences differ in length.
    #[error("Length mismatch: {left} true labels vs {right} predicted labels")]
    LengthMismatch { left: usize, right: usize },

    /// Training was invoked with zero usable samples.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// Deserialization of a vocabulary/model artifact failed or produced a
    /// structurally invalid value.
    #[error("Corrupt artifact: {0}")]
    CorruptArtifact(String),

    /// CSV parsing errors while loading a corpus.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentimenError.
pub type Result<T> = std::result::Result<T, SentimenError>;

impl SentimenError {
    /// Create a new dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        SentimenError::DimensionMismatch { expected, actual }
    }

    /// Create a new model-not-trained error.
    pub fn model_not_trained<S: Into<String>>(msg: S) -> Self {
        SentimenError::ModelNotTrained(msg.into())
    }

    /// Create a new length mismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        SentimenError::LengthMismatch { left, right }
    }

    /// Create a new empty corpus error.
    pub fn empty_corpus<S: Into<String>>(msg: S) -> Self {
        SentimenError::EmptyCorpus(msg.into())
    }

    /// Create a new corrupt artifact error.
    pub fn corrupt_artifact<S: Into<String>>(msg: S) -> Self {
        SentimenError::CorruptArtifact(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentimenError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentimenError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
