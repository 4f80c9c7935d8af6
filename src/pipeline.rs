//! End-to-end training orchestration and the inference boundary.
//!
//! Training runs as a batch: balance, normalize, build the vocabulary,
//! vectorize, train. Each stage completes before the next starts; no stage
//! interleaves with I/O. [`SentimentPipeline`] is the read-only inference
//! surface consumed by downstream layers (e.g. a web form): it composes
//! normalizer, vectorizer and predictor, and never calls the predictor for
//! texts that normalize to nothing.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::Normalizer;
use crate::dataset::{balance, RawSample};
use crate::error::{Result, SentimenError};
use crate::feature::{vectorize, vectorize_batch, VocabularyBuilder, VocabularyMap};
use crate::svm::{ClassifierModel, TrainConfig};

/// Options for a full training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOptions {
    /// Cap on vocabulary size.
    pub max_vocab: usize,
    /// SVM hyperparameters.
    pub svm: TrainConfig,
    /// Whether the corpus texts are raw (to be normalized) or already
    /// cleaned, in which case they are re-tokenized by whitespace split.
    pub raw_corpus: bool,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        TrainingOptions {
            max_vocab: VocabularyBuilder::DEFAULT_MAX_SIZE,
            svm: TrainConfig::default(),
            raw_corpus: true,
        }
    }
}

/// The two interchange artifacts a training run produces.
#[derive(Debug, Clone)]
pub struct TrainedArtifacts {
    /// Term-to-index mapping; must be persisted verbatim.
    pub vocabulary: VocabularyMap,
    /// The trained classifier.
    pub model: ClassifierModel,
}

/// Run the full training pipeline over a labeled corpus.
///
/// Balances the corpus by undersampling, normalizes every text (dropping
/// samples that normalize to nothing), builds the vocabulary, vectorizes
/// and trains the one-vs-one SVM.
///
/// # Errors
///
/// [`SentimenError::EmptyCorpus`] when no sample survives balancing and
/// normalization.
pub fn train(
    samples: Vec<RawSample>,
    normalizer: &Normalizer,
    options: &TrainingOptions,
) -> Result<TrainedArtifacts> {
    let balanced = balance(samples);
    if balanced.is_empty() {
        return Err(SentimenError::empty_corpus("no balanced training samples"));
    }
    log::info!("balanced corpus: {} samples", balanced.len());

    // Normalization is pure per sample; run it across the pool.
    let normalized: Vec<(Vec<String>, String)> = balanced
        .into_par_iter()
        .filter_map(|sample| {
            let tokens = tokenize(&sample.text, normalizer, options.raw_corpus);
            if tokens.is_empty() {
                None
            } else {
                Some((tokens, sample.label))
            }
        })
        .collect();
    if normalized.is_empty() {
        return Err(SentimenError::empty_corpus(
            "every sample normalized to an empty token sequence",
        ));
    }
    log::info!("normalized corpus: {} samples", normalized.len());

    let (corpus, labels): (Vec<Vec<String>>, Vec<String>) = normalized.into_iter().unzip();

    let vocabulary = VocabularyBuilder::new(options.max_vocab).build(&corpus);
    log::info!("vocabulary: {} terms", vocabulary.len());

    let vectors = vectorize_batch(&corpus, &vocabulary);
    let model = ClassifierModel::train(&vectors, &labels, &options.svm)?;
    if model.is_approximate() {
        log::warn!("one or more sub-models hit the pass cap before converging");
    }

    Ok(TrainedArtifacts { vocabulary, model })
}

/// Tokenize a corpus text either through the normalizer or, for an
/// already-cleaned corpus, by plain whitespace split.
pub fn tokenize(text: &str, normalizer: &Normalizer, raw: bool) -> Vec<String> {
    if raw {
        normalizer.normalize(text)
    } else {
        text.split_whitespace().map(|t| t.to_string()).collect()
    }
}

/// Result of classifying one raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "lowercase")]
pub enum Prediction {
    /// A predicted sentiment label.
    Label(String),
    /// The text normalized to nothing; the predictor was never consulted.
    Undetermined,
}

/// Read-only inference surface: normalize -> vectorize -> predict.
///
/// The vocabulary and model are shared and never mutated after
/// construction, so any number of pipelines and callers may hold them
/// concurrently without locking.
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    normalizer: Normalizer,
    vocabulary: Arc<VocabularyMap>,
    model: Arc<ClassifierModel>,
}

impl SentimentPipeline {
    /// Build a pipeline from its three collaborators.
    ///
    /// # Errors
    ///
    /// [`SentimenError::DimensionMismatch`] when the vocabulary size does
    /// not equal the model's trained feature length — the two artifacts do
    /// not belong to the same training run.
    pub fn new(
        normalizer: Normalizer,
        vocabulary: Arc<VocabularyMap>,
        model: Arc<ClassifierModel>,
    ) -> Result<Self> {
        if vocabulary.len() != model.n_features() {
            return Err(SentimenError::dimension_mismatch(
                model.n_features(),
                vocabulary.len(),
            ));
        }
        Ok(SentimentPipeline {
            normalizer,
            vocabulary,
            model,
        })
    }

    /// Classify one raw text.
    pub fn predict_one(&self, raw_text: &str) -> Result<Prediction> {
        let tokens = self.normalizer.normalize(raw_text);
        if tokens.is_empty() {
            return Ok(Prediction::Undetermined);
        }
        let vector = vectorize(&tokens, &self.vocabulary);
        Ok(Prediction::Label(self.model.predict_single(&vector)?))
    }

    /// Classify a batch of raw texts in parallel.
    pub fn predict_batch(&self, raw_texts: &[String]) -> Result<Vec<Prediction>> {
        raw_texts
            .par_iter()
            .map(|text| self.predict_one(text))
            .collect()
    }

    /// The shared vocabulary.
    pub fn vocabulary(&self) -> &VocabularyMap {
        &self.vocabulary
    }

    /// The shared model.
    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_corpus() -> Vec<RawSample> {
        let mut samples = Vec::new();
        let positive = [
            "this product is great and useful",
            "great quality, love the product",
            "love it, great and solid product",
            "useful product, great value",
        ];
        let negative = [
            "this product is awful and broken",
            "awful quality, hate the product",
            "hate it, awful and broken product",
            "broken product, awful value",
        ];
        for text in positive {
            samples.push(RawSample::new(text, "positive"));
        }
        for text in negative {
            samples.push(RawSample::new(text, "negative"));
        }
        samples
    }

    fn trained() -> TrainedArtifacts {
        train(
            tiny_corpus(),
            &Normalizer::new(),
            &TrainingOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_train_produces_paired_artifacts() {
        let artifacts = trained();
        assert_eq!(artifacts.vocabulary.len(), artifacts.model.n_features());
        assert_eq!(artifacts.model.labels(), &["negative", "positive"]);
    }

    #[test]
    fn test_train_empty_corpus_fails() {
        let err = train(
            Vec::new(),
            &Normalizer::new(),
            &TrainingOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SentimenError::EmptyCorpus(_)));
    }

    #[test]
    fn test_train_all_samples_normalize_empty_fails() {
        let samples = vec![
            RawSample::new("!!!", "positive"),
            RawSample::new("123", "negative"),
        ];
        let err = train(samples, &Normalizer::new(), &TrainingOptions::default()).unwrap_err();
        assert!(matches!(err, SentimenError::EmptyCorpus(_)));
    }

    #[test]
    fn test_pipeline_predicts_trained_sentiment() {
        let artifacts = trained();
        let pipeline = SentimentPipeline::new(
            Normalizer::new(),
            Arc::new(artifacts.vocabulary),
            Arc::new(artifacts.model),
        )
        .unwrap();

        assert_eq!(
            pipeline.predict_one("a great and useful product, love it").unwrap(),
            Prediction::Label("positive".to_string())
        );
        assert_eq!(
            pipeline.predict_one("awful broken product, hate it").unwrap(),
            Prediction::Label("negative".to_string())
        );
    }

    #[test]
    fn test_pipeline_undetermined_on_empty_normalization() {
        let artifacts = trained();
        let pipeline = SentimentPipeline::new(
            Normalizer::new(),
            Arc::new(artifacts.vocabulary),
            Arc::new(artifacts.model),
        )
        .unwrap();

        assert_eq!(
            pipeline.predict_one("!!! 123 @you").unwrap(),
            Prediction::Undetermined
        );
    }

    #[test]
    fn test_pipeline_batch_matches_single() {
        let artifacts = trained();
        let pipeline = SentimentPipeline::new(
            Normalizer::new(),
            Arc::new(artifacts.vocabulary),
            Arc::new(artifacts.model),
        )
        .unwrap();

        let texts: Vec<String> = vec![
            "great product".to_string(),
            "awful product".to_string(),
            "???".to_string(),
        ];
        let batch = pipeline.predict_batch(&texts).unwrap();
        for (text, prediction) in texts.iter().zip(batch.iter()) {
            assert_eq!(prediction, &pipeline.predict_one(text).unwrap());
        }
    }

    #[test]
    fn test_pipeline_rejects_mismatched_artifacts() {
        let artifacts = trained();
        let foreign_vocab = VocabularyMap::from_json(r#"{"solo":0}"#).unwrap();

        let err = SentimentPipeline::new(
            Normalizer::new(),
            Arc::new(foreign_vocab),
            Arc::new(artifacts.model),
        )
        .unwrap_err();
        assert!(matches!(err, SentimenError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_cleaned_corpus_tokenize_is_whitespace_split() {
        let normalizer = Normalizer::new();
        assert_eq!(
            tokenize("great product the", &normalizer, false),
            vec!["great", "product", "the"]
        );
        // raw mode drops the stopword
        assert_eq!(
            tokenize("great product the", &normalizer, true),
            vec!["great", "product"]
        );
    }
}
