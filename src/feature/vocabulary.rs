//! Vocabulary construction and persistence.
//!
//! A vocabulary maps each selected term to a dense feature index in
//! `[0, len)`. It is built once per training run from the full normalized
//! training corpus and read-only afterward; the JSON artifact must be
//! persisted verbatim so later vectorization reproduces identical feature
//! positions.

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimenError};

/// Immutable term-to-index mapping.
///
/// Invariant: the indices are a contiguous permutation of `[0, len)` with
/// no duplicates. Index 0 belongs to the most frequent term of the corpus
/// the map was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyMap {
    index: HashMap<String, usize>,
}

impl VocabularyMap {
    /// Number of terms (== feature dimensionality).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Feature index of a term, if the term is in the vocabulary.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Iterate over (term, index) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.index.iter().map(|(term, &idx)| (term.as_str(), idx))
    }

    /// Serialize to a JSON object keyed by term.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON object, validating the index invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        let vocab: VocabularyMap = serde_json::from_str(json)
            .map_err(|e| SentimenError::corrupt_artifact(format!("vocabulary JSON: {e}")))?;
        vocab.validate()?;
        Ok(vocab)
    }

    /// Check that the indices form a bijection onto `[0, len)`.
    fn validate(&self) -> Result<()> {
        let mut seen = vec![false; self.index.len()];
        for (term, &idx) in &self.index {
            if idx >= seen.len() {
                return Err(SentimenError::corrupt_artifact(format!(
                    "vocabulary index {idx} for term {term:?} out of range 0..{}",
                    seen.len()
                )));
            }
            if seen[idx] {
                return Err(SentimenError::corrupt_artifact(format!(
                    "duplicate vocabulary index {idx}"
                )));
            }
            seen[idx] = true;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, usize)]) -> Self {
        VocabularyMap {
            index: pairs.iter().map(|&(t, i)| (t.to_string(), i)).collect(),
        }
    }
}

/// Builds a [`VocabularyMap`] from a normalized corpus.
///
/// Terms are selected by descending global frequency, capped at
/// `max_size`; ties are broken by first-encountered order, so selection is
/// stable across runs over the same corpus.
///
/// # Examples
///
/// ```
/// use sentimen::feature::VocabularyBuilder;
///
/// let corpus = vec![
///     vec!["great".to_string(), "great".to_string()],
///     vec!["bad".to_string()],
/// ];
/// let vocab = VocabularyBuilder::new(2).build(&corpus);
/// assert_eq!(vocab.get("great"), Some(0));
/// assert_eq!(vocab.get("bad"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    max_size: usize,
}

/// Per-term running statistics used during counting.
struct TermStat {
    count: u64,
    first_seen: usize,
}

impl VocabularyBuilder {
    /// Default cap on vocabulary size.
    pub const DEFAULT_MAX_SIZE: usize = 10_000;

    /// Create a builder capped at `max_size` terms.
    pub fn new(max_size: usize) -> Self {
        VocabularyBuilder { max_size }
    }

    /// Build the vocabulary over every token of every normalized text.
    pub fn build(&self, corpus: &[Vec<String>]) -> VocabularyMap {
        let mut stats: AHashMap<&str, TermStat> = AHashMap::new();
        let mut order = 0usize;

        for tokens in corpus {
            for token in tokens {
                let stat = stats.entry(token.as_str()).or_insert_with(|| {
                    let stat = TermStat {
                        count: 0,
                        first_seen: order,
                    };
                    order += 1;
                    stat
                });
                stat.count += 1;
            }
        }

        let mut ranked: Vec<(&str, TermStat)> = stats.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked.truncate(self.max_size);

        let index = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term.to_string(), idx))
            .collect();

        VocabularyMap { index }
    }
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&[&str]]) -> Vec<Vec<String>> {
        texts
            .iter()
            .map(|tokens| tokens.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_build_orders_by_frequency() {
        let corpus = corpus(&[&["great", "great", "bad"]]);
        let vocab = VocabularyBuilder::new(2).build(&corpus);

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("great"), Some(0));
        assert_eq!(vocab.get("bad"), Some(1));
    }

    #[test]
    fn test_cap_keeps_most_frequent() {
        let corpus = corpus(&[&["x", "y", "y", "z", "z", "z"]]);
        let vocab = VocabularyBuilder::new(2).build(&corpus);

        assert_eq!(vocab.get("z"), Some(0));
        assert_eq!(vocab.get("y"), Some(1));
        assert_eq!(vocab.get("x"), None);
    }

    #[test]
    fn test_ties_broken_by_first_encounter() {
        let corpus = corpus(&[&["beta", "alpha"], &["gamma"]]);
        let vocab = VocabularyBuilder::new(3).build(&corpus);

        // All counts are 1: order of first encounter wins, not alphabetical.
        assert_eq!(vocab.get("beta"), Some(0));
        assert_eq!(vocab.get("alpha"), Some(1));
        assert_eq!(vocab.get("gamma"), Some(2));
    }

    #[test]
    fn test_indices_are_bijection() {
        let corpus = corpus(&[&["a", "b", "c", "b", "a", "a", "d"]]);
        let vocab = VocabularyBuilder::new(10).build(&corpus);

        let mut indices: Vec<usize> = vocab.iter().map(|(_, idx)| idx).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_corpus_yields_empty_vocab() {
        let vocab = VocabularyBuilder::default().build(&[]);
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let corpus = corpus(&[&["great", "great", "bad"]]);
        let vocab = VocabularyBuilder::new(2).build(&corpus);

        let json = vocab.to_json().unwrap();
        let loaded = VocabularyMap::from_json(&json).unwrap();

        assert_eq!(loaded.len(), vocab.len());
        assert_eq!(loaded.get("great"), Some(0));
        assert_eq!(loaded.get("bad"), Some(1));
    }

    #[test]
    fn test_from_json_rejects_duplicate_indices() {
        let err = VocabularyMap::from_json(r#"{"a":0,"b":0}"#).unwrap_err();
        assert!(matches!(err, SentimenError::CorruptArtifact(_)));
    }

    #[test]
    fn test_from_json_rejects_index_gap() {
        let err = VocabularyMap::from_json(r#"{"a":0,"b":2}"#).unwrap_err();
        assert!(matches!(err, SentimenError::CorruptArtifact(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = VocabularyMap::from_json("not json").unwrap_err();
        assert!(matches!(err, SentimenError::CorruptArtifact(_)));
    }
}
