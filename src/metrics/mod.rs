//! Classifier evaluation: accuracy, confusion matrix, per-class metrics.
//!
//! Label axes are always the lexically sorted set of labels observed in
//! either input sequence, so reports are stable across runs regardless of
//! collection order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimenError};

/// Square matrix of (true label, predicted label) counts.
///
/// Rows are true labels, columns are predicted labels, both in lexical
/// order. Absent cells read as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    /// Row-major counts, `labels.len() * labels.len()` entries.
    counts: Vec<u64>,
}

impl ConfusionMatrix {
    /// Build the matrix from aligned (true, predicted) label pairs.
    pub fn from_pairs(truth: &[String], predicted: &[String]) -> Result<Self> {
        if truth.len() != predicted.len() {
            return Err(SentimenError::length_mismatch(truth.len(), predicted.len()));
        }

        let label_set: BTreeSet<&String> = truth.iter().chain(predicted.iter()).collect();
        let labels: Vec<String> = label_set.into_iter().cloned().collect();

        let mut matrix = ConfusionMatrix {
            counts: vec![0; labels.len() * labels.len()],
            labels,
        };
        for (t, p) in truth.iter().zip(predicted.iter()) {
            let row = matrix.position(t);
            let col = matrix.position(p);
            matrix.counts[row * matrix.labels.len() + col] += 1;
        }
        Ok(matrix)
    }

    fn position(&self, label: &str) -> usize {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .expect("label missing from matrix axes")
    }

    /// The matrix axes: observed labels in lexical order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Count for a (true, predicted) cell; unknown labels read as 0.
    pub fn get(&self, truth: &str, predicted: &str) -> u64 {
        let (Ok(row), Ok(col)) = (
            self.labels.binary_search_by(|l| l.as_str().cmp(truth)),
            self.labels.binary_search_by(|l| l.as_str().cmp(predicted)),
        ) else {
            return 0;
        };
        self.counts[row * self.labels.len() + col]
    }

    /// Sum of the diagonal (exact matches).
    pub fn diagonal_sum(&self) -> u64 {
        (0..self.labels.len())
            .map(|i| self.counts[i * self.labels.len() + i])
            .sum()
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Precision, recall and F1 for one class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Diagonal count for the class.
    pub true_positives: u64,
    /// Column sum minus the diagonal.
    pub false_positives: u64,
    /// Row sum minus the diagonal.
    pub false_negatives: u64,
    /// `TP / (TP + FP)`, 0 when the denominator is 0.
    pub precision: f64,
    /// `TP / (TP + FN)`, 0 when the denominator is 0.
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0 when both are 0.
    pub f1: f64,
}

/// Full evaluation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Exact matches over total.
    pub accuracy: f64,
    /// Counts over the observed label set.
    pub confusion: ConfusionMatrix,
    /// Per-class metrics keyed by label, iterated in lexical order.
    pub per_class: BTreeMap<String, ClassMetrics>,
}

/// Evaluate predicted labels against the truth.
///
/// # Errors
///
/// - [`SentimenError::LengthMismatch`] when the sequences differ in length
/// - [`SentimenError::EmptyCorpus`] when both sequences are empty
///
/// # Examples
///
/// ```
/// use sentimen::metrics::evaluate;
///
/// let truth: Vec<String> = ["pos", "pos", "neg"].iter().map(|s| s.to_string()).collect();
/// let predicted: Vec<String> = ["pos", "neg", "neg"].iter().map(|s| s.to_string()).collect();
///
/// let report = evaluate(&truth, &predicted).unwrap();
/// assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn evaluate(truth: &[String], predicted: &[String]) -> Result<Evaluation> {
    if truth.len() != predicted.len() {
        return Err(SentimenError::length_mismatch(truth.len(), predicted.len()));
    }
    if truth.is_empty() {
        return Err(SentimenError::empty_corpus("nothing to evaluate"));
    }

    let confusion = ConfusionMatrix::from_pairs(truth, predicted)?;

    let matches = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();
    let accuracy = matches as f64 / truth.len() as f64;

    let mut per_class = BTreeMap::new();
    for class in confusion.labels() {
        let tp = confusion.get(class, class);

        let mut fp = 0;
        let mut fn_ = 0;
        for other in confusion.labels() {
            if other != class {
                fp += confusion.get(other, class);
                fn_ += confusion.get(class, other);
            }
        }

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        per_class.insert(
            class.clone(),
            ClassMetrics {
                true_positives: tp,
                false_positives: fp,
                false_negatives: fn_,
                precision,
                recall,
                f1,
            },
        );
    }

    Ok(Evaluation {
        accuracy,
        confusion,
        per_class,
    })
}

/// `numerator / denominator` with a deliberate 0 fallback on 0/0.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
