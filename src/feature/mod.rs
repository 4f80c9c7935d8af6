//! Feature extraction: vocabulary construction and vectorization.
//!
//! The [`VocabularyMap`] is the sole authority for feature dimensionality:
//! every vector used in one training run or one prediction batch has
//! exactly `vocabulary.len()` entries.

pub mod vectorizer;
pub mod vocabulary;

pub use vectorizer::{vectorize, vectorize_batch, FeatureVector};
pub use vocabulary::{VocabularyBuilder, VocabularyMap};
