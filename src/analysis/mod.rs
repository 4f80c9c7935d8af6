//! Text analysis pipeline for sentiment classification.
//!
//! The [`Normalizer`] turns a raw comment into the ordered token sequence
//! that every downstream component (vocabulary builder, vectorizer,
//! predictor) consumes. All of its configuration tables are immutable
//! values injected at construction; there is no process-wide mutable state.

pub mod normalizer;
pub mod stem;
pub mod tables;

pub use normalizer::{Normalizer, NormalizerConfig};
pub use stem::SuffixStripper;
