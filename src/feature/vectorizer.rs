//! Term-count vectorization.
//!
//! Pure term frequency: no IDF weighting, no length normalization. Tokens
//! absent from the vocabulary are silently ignored.

use rayon::prelude::*;

use crate::feature::vocabulary::VocabularyMap;

/// Dense integer term-count vector, one per example.
///
/// Length always equals the size of the [`VocabularyMap`] it was produced
/// against.
pub type FeatureVector = Vec<u32>;

/// Vectorize one normalized token sequence against a vocabulary.
///
/// # Examples
///
/// ```
/// use sentimen::feature::{vectorize, VocabularyBuilder};
///
/// let corpus = vec![vec!["great".to_string(), "great".to_string(), "bad".to_string()]];
/// let vocab = VocabularyBuilder::new(2).build(&corpus);
///
/// // "awful" is out-of-vocabulary and ignored.
/// let tokens = vec!["great".to_string(), "awful".to_string()];
/// assert_eq!(vectorize(&tokens, &vocab), vec![1, 0]);
/// ```
pub fn vectorize(tokens: &[String], vocab: &VocabularyMap) -> FeatureVector {
    let mut vector = vec![0u32; vocab.len()];
    for token in tokens {
        if let Some(idx) = vocab.get(token) {
            vector[idx] += 1;
        }
    }
    vector
}

/// Vectorize a batch of token sequences in parallel.
///
/// Vectorization is a pure function of one input, so samples are processed
/// across worker threads with the vocabulary shared read-only.
pub fn vectorize_batch(corpus: &[Vec<String>], vocab: &VocabularyMap) -> Vec<FeatureVector> {
    corpus
        .par_iter()
        .map(|tokens| vectorize(tokens, vocab))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vectorize_counts_terms() {
        let vocab = VocabularyMap::from_pairs(&[("great", 0), ("bad", 1)]);
        let vector = vectorize(&tokens(&["great", "bad", "great"]), &vocab);
        assert_eq!(vector, vec![2, 1]);
    }

    #[test]
    fn test_out_of_vocabulary_ignored() {
        let vocab = VocabularyMap::from_pairs(&[("great", 0), ("bad", 1)]);
        let vector = vectorize(&tokens(&["great", "awful"]), &vocab);
        assert_eq!(vector, vec![1, 0]);
    }

    #[test]
    fn test_vector_length_matches_vocab() {
        let vocab = VocabularyMap::from_pairs(&[("a", 0), ("b", 1), ("c", 2)]);
        assert_eq!(vectorize(&tokens(&[]), &vocab).len(), 3);
        assert_eq!(vectorize(&tokens(&["zzz"]), &vocab), vec![0, 0, 0]);
    }

    #[test]
    fn test_vectorize_batch_matches_single() {
        let vocab = VocabularyMap::from_pairs(&[("a", 0), ("b", 1)]);
        let corpus = vec![tokens(&["a", "a"]), tokens(&["b"]), tokens(&["a", "b", "x"])];

        let batch = vectorize_batch(&corpus, &vocab);

        assert_eq!(batch.len(), 3);
        for (vector, sample) in batch.iter().zip(corpus.iter()) {
            assert_eq!(vector, &vectorize(sample, &vocab));
        }
    }
}
