//! Command line interface for the sentimen classifier.
//!
//! Every command is a thin adapter over the library contracts: loading the
//! corpus and artifacts, calling into [`pipeline`](crate::pipeline), and
//! rendering the result.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
