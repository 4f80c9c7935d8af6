//! One-vs-one multi-class linear SVM.
//!
//! [`ClassifierModel`] is the trained, immutable artifact: one
//! [`BinarySvm`] per unordered label pair, a lexically sorted label set
//! and the feature dimensionality it was trained for. Any number of
//! concurrent predictors may share it read-only. [`SvmClassifier`] wraps
//! the `Untrained -> Trained` lifecycle around it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Result, SentimenError};
use crate::feature::FeatureVector;
use crate::svm::solver::{self, Hyperplane};
use crate::svm::TrainConfig;

/// One binary sub-model restricted to samples of two labels.
///
/// `label_lo < label_hi` lexically; a non-negative decision value votes
/// `label_lo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinarySvm {
    /// Lexically smaller label, mapped to `y = +1` during training.
    pub label_lo: String,
    /// Lexically larger label, mapped to `y = -1` during training.
    pub label_hi: String,
    /// The trained decision function.
    pub plane: Hyperplane,
}

impl BinarySvm {
    /// The label this sub-model votes for on `x`.
    fn vote(&self, x: &[u32]) -> &str {
        if self.plane.decision(x) >= 0.0 {
            &self.label_lo
        } else {
            &self.label_hi
        }
    }
}

/// A trained one-vs-one linear SVM classifier.
///
/// Created by [`ClassifierModel::train`] and immutable thereafter;
/// re-training produces a new model instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierModel {
    /// Distinct labels of the training set, lexically sorted.
    labels: Vec<String>,
    /// Feature vector length the model was trained with.
    n_features: usize,
    /// Hyperparameters used for training.
    config: TrainConfig,
    /// One sub-model per unordered label pair, in pair order.
    machines: Vec<BinarySvm>,
}

impl ClassifierModel {
    /// Train a model from vectors and their labels.
    ///
    /// # Errors
    ///
    /// - [`SentimenError::EmptyCorpus`] when `vectors` is empty
    /// - [`SentimenError::DimensionMismatch`] when `vectors` and `labels`
    ///   disagree in count, or the vectors are ragged
    pub fn train(
        vectors: &[FeatureVector],
        labels: &[String],
        config: &TrainConfig,
    ) -> Result<Self> {
        if vectors.is_empty() {
            return Err(SentimenError::empty_corpus(
                "training requires at least one sample",
            ));
        }
        if vectors.len() != labels.len() {
            return Err(SentimenError::dimension_mismatch(
                vectors.len(),
                labels.len(),
            ));
        }

        let n_features = vectors[0].len();
        for vector in vectors {
            if vector.len() != n_features {
                return Err(SentimenError::dimension_mismatch(n_features, vector.len()));
            }
        }

        let label_set: BTreeSet<&String> = labels.iter().collect();
        let sorted_labels: Vec<String> = label_set.into_iter().cloned().collect();

        // Sample indices per label, in label order.
        let members: Vec<Vec<usize>> = sorted_labels
            .iter()
            .map(|label| {
                labels
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| *l == label)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        let mut pairs = Vec::new();
        for lo in 0..sorted_labels.len() {
            for hi in (lo + 1)..sorted_labels.len() {
                pairs.push((lo, hi));
            }
        }

        log::info!(
            "training {} binary sub-models over {} labels, {} features",
            pairs.len(),
            sorted_labels.len(),
            n_features
        );

        // Sub-problems are independent; each writes only its own slot.
        let machines: Vec<BinarySvm> = pairs
            .par_iter()
            .map(|&(lo, hi)| {
                let mut xs: Vec<&[u32]> = Vec::new();
                let mut ys: Vec<f64> = Vec::new();
                for &i in &members[lo] {
                    xs.push(&vectors[i]);
                    ys.push(1.0);
                }
                for &i in &members[hi] {
                    xs.push(&vectors[i]);
                    ys.push(-1.0);
                }

                let plane = solver::solve(&xs, &ys, n_features, config);
                log::debug!(
                    "pair ({}, {}): {} samples{}",
                    sorted_labels[lo],
                    sorted_labels[hi],
                    xs.len(),
                    if plane.approximate { ", approximate" } else { "" }
                );

                BinarySvm {
                    label_lo: sorted_labels[lo].clone(),
                    label_hi: sorted_labels[hi].clone(),
                    plane,
                }
            })
            .collect();

        Ok(ClassifierModel {
            labels: sorted_labels,
            n_features,
            config: config.clone(),
            machines,
        })
    }

    /// Predict a label for each vector, in parallel over the batch.
    ///
    /// # Errors
    ///
    /// [`SentimenError::DimensionMismatch`] when any vector's length does
    /// not equal the trained feature length.
    pub fn predict(&self, vectors: &[FeatureVector]) -> Result<Vec<String>> {
        vectors
            .par_iter()
            .map(|vector| self.predict_single(vector))
            .collect()
    }

    /// Predict the label for one vector.
    ///
    /// Every sub-model casts one vote; the label with the most votes wins
    /// and vote ties go to the lexically smallest tied label.
    pub fn predict_single(&self, vector: &[u32]) -> Result<String> {
        if vector.len() != self.n_features {
            return Err(SentimenError::dimension_mismatch(
                self.n_features,
                vector.len(),
            ));
        }

        let mut votes = vec![0usize; self.labels.len()];
        for machine in &self.machines {
            let label = machine.vote(vector);
            // Labels are sorted, so the winner's slot is found by search.
            let idx = self
                .labels
                .binary_search_by(|l| l.as_str().cmp(label))
                .expect("sub-model label missing from label set");
            votes[idx] += 1;
        }

        // Scanning in label order with a strict comparison makes ties
        // resolve to the lexically smallest label.
        let mut winner = 0;
        for (idx, &count) in votes.iter().enumerate() {
            if count > votes[winner] {
                winner = idx;
            }
        }

        Ok(self.labels[winner].clone())
    }

    /// The label set, lexically sorted.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Feature vector length the model expects.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// The hyperparameters the model was trained with.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// The binary sub-models, in pair order.
    pub fn machines(&self) -> &[BinarySvm] {
        &self.machines
    }

    /// Whether any sub-model hit the pass cap before converging.
    pub fn is_approximate(&self) -> bool {
        self.machines.iter().any(|m| m.plane.approximate)
    }

    /// Serialize the model to an opaque binary artifact.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| SentimenError::corrupt_artifact(format!("model encode: {e}")))
    }

    /// Deserialize a model artifact, validating its structure.
    ///
    /// # Errors
    ///
    /// [`SentimenError::CorruptArtifact`] when decoding fails or the
    /// decoded value violates the model invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let model: ClassifierModel = bincode::deserialize(bytes)
            .map_err(|e| SentimenError::corrupt_artifact(format!("model decode: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(SentimenError::corrupt_artifact("model has no labels"));
        }
        if !self.labels.windows(2).all(|w| w[0] < w[1]) {
            return Err(SentimenError::corrupt_artifact(
                "model labels not sorted and distinct",
            ));
        }

        let n = self.labels.len();
        let expected_machines = n * (n - 1) / 2;
        if self.machines.len() != expected_machines {
            return Err(SentimenError::corrupt_artifact(format!(
                "expected {expected_machines} sub-models for {n} labels, found {}",
                self.machines.len()
            )));
        }

        for machine in &self.machines {
            if machine.label_lo >= machine.label_hi {
                return Err(SentimenError::corrupt_artifact(format!(
                    "sub-model pair ({}, {}) out of order",
                    machine.label_lo, machine.label_hi
                )));
            }
            if !self.labels.contains(&machine.label_lo)
                || !self.labels.contains(&machine.label_hi)
            {
                return Err(SentimenError::corrupt_artifact(
                    "sub-model references an unknown label",
                ));
            }
            if machine.plane.weights.len() != self.n_features {
                return Err(SentimenError::corrupt_artifact(format!(
                    "sub-model weight length {} != feature length {}",
                    machine.plane.weights.len(),
                    self.n_features
                )));
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        labels: Vec<String>,
        n_features: usize,
        machines: Vec<BinarySvm>,
    ) -> Self {
        ClassifierModel {
            labels,
            n_features,
            config: TrainConfig::default(),
            machines,
        }
    }
}

/// Stateful training handle: `Untrained -> Trained`.
///
/// Prediction through an untrained handle fails with
/// [`SentimenError::ModelNotTrained`]. Training replaces the owned model
/// value; previously shared models are unaffected.
#[derive(Debug, Clone, Default)]
pub struct SvmClassifier {
    config: TrainConfig,
    model: Option<ClassifierModel>,
}

impl SvmClassifier {
    /// Create an untrained classifier with default hyperparameters.
    pub fn new() -> Self {
        Self::with_config(TrainConfig::default())
    }

    /// Create an untrained classifier with custom hyperparameters.
    pub fn with_config(config: TrainConfig) -> Self {
        SvmClassifier {
            config,
            model: None,
        }
    }

    /// Whether the classifier has been trained.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Train on vectors and labels, producing a new model instance.
    pub fn train(&mut self, vectors: &[FeatureVector], labels: &[String]) -> Result<()> {
        self.model = Some(ClassifierModel::train(vectors, labels, &self.config)?);
        Ok(())
    }

    /// Access the trained model, if any.
    pub fn model(&self) -> Option<&ClassifierModel> {
        self.model.as_ref()
    }

    /// Consume the handle, returning the trained model.
    pub fn into_model(self) -> Result<ClassifierModel> {
        self.model
            .ok_or_else(|| SentimenError::model_not_trained("train() has not been called"))
    }

    /// Predict labels for a batch of vectors.
    pub fn predict(&self, vectors: &[FeatureVector]) -> Result<Vec<String>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| SentimenError::model_not_trained("train() has not been called"))?;
        model.predict(vectors)
    }
}
