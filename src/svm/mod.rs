//! Linear Support Vector Machine training and prediction.
//!
//! Multi-class classification is decomposed one-vs-one: one soft-margin
//! binary SVM per unordered pair of distinct labels, each solved by dual
//! coordinate descent over the hinge-loss primal
//!
//! ```text
//! min  ½‖w‖² + C · Σᵢ max(0, 1 − yᵢ(w·xᵢ + b))
//! ```
//!
//! Prediction tallies one vote per sub-model; the label with the most
//! votes wins, with ties broken toward the lexically smallest label.

pub mod classifier;
pub mod solver;

pub use classifier::{BinarySvm, ClassifierModel, SvmClassifier};
pub use solver::Hyperplane;

use serde::{Deserialize, Serialize};

/// Hyperparameters for SVM training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Soft-margin regularization parameter C.
    pub c: f64,
    /// Convergence tolerance on the maximum KKT violation per pass.
    pub tolerance: f64,
    /// Cap on full passes over the training pairs of a sub-problem.
    /// Reaching the cap is not fatal; the hyperplane is marked
    /// approximate instead.
    pub max_passes: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            c: 1.0,
            tolerance: 1e-3,
            max_passes: 1000,
        }
    }
}

impl TrainConfig {
    /// Set the regularization parameter C.
    #[must_use]
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the pass cap.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}
