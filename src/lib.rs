//! # Sentimen
//!
//! A bag-of-words sentiment classifier for short free-text comments,
//! built around a linear Support Vector Machine.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic text normalization for mixed Indonesian/English input
//! - Frequency-capped vocabulary and term-count vectorization
//! - Undersampling class balancer
//! - One-vs-one linear SVM trained by dual coordinate descent
//! - Accuracy, confusion matrix and per-class precision/recall/F1
//!
//! ## Pipeline
//!
//! Training: balance -> normalize -> build vocabulary -> vectorize -> train.
//! Inference: normalize -> vectorize -> predict, wrapped by
//! [`pipeline::SentimentPipeline`] for downstream consumers such as a web
//! front end.

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod metrics;
pub mod pipeline;
pub mod svm;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
