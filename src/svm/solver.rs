//! Dual coordinate descent solver for the binary soft-margin linear SVM.
//!
//! Solves the hinge-loss dual in the style of LIBLINEAR: one alpha per
//! training pair, bounded to `[0, C]`, with the bias absorbed as an
//! augmented constant feature. Convergence is declared when the largest
//! projected-gradient violation in a full pass drops below the configured
//! tolerance, which is a KKT stationarity check.

use serde::{Deserialize, Serialize};

use crate::svm::TrainConfig;

/// A trained binary decision function `w·x + b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyperplane {
    /// Weight vector, one entry per feature.
    pub weights: Vec<f64>,
    /// Bias scalar.
    pub bias: f64,
    /// Regularization parameter the plane was trained with.
    pub c: f64,
    /// Set when the pass cap was reached before the tolerance was met.
    /// Diagnostic only; an approximate plane is still usable.
    pub approximate: bool,
}

impl Hyperplane {
    /// Evaluate the decision function on a term-count vector.
    pub fn decision(&self, x: &[u32]) -> f64 {
        let mut value = self.bias;
        for (w, &count) in self.weights.iter().zip(x.iter()) {
            value += w * f64::from(count);
        }
        value
    }
}

/// Train one binary hyperplane over `(xs[i], ys[i])` pairs.
///
/// `ys` entries must be `+1.0` or `-1.0`; `xs` rows must all have length
/// `dim`. Both are guaranteed by the caller
/// ([`ClassifierModel::train`](crate::svm::ClassifierModel::train)).
pub(crate) fn solve(xs: &[&[u32]], ys: &[f64], dim: usize, config: &TrainConfig) -> Hyperplane {
    let n = xs.len();
    let c = config.c;

    let mut weights = vec![0.0f64; dim];
    let mut bias = 0.0f64;
    let mut alpha = vec![0.0f64; n];

    // Diagonal of the Gram matrix, +1 for the augmented bias feature.
    let q_diag: Vec<f64> = xs
        .iter()
        .map(|x| x.iter().map(|&v| f64::from(v) * f64::from(v)).sum::<f64>() + 1.0)
        .collect();

    let mut converged = false;
    for pass in 0..config.max_passes {
        let mut max_violation = 0.0f64;

        for i in 0..n {
            let x = xs[i];
            let y = ys[i];

            let mut decision = bias;
            for (w, &count) in weights.iter().zip(x.iter()) {
                decision += w * f64::from(count);
            }

            // Gradient of the dual objective in coordinate i.
            let gradient = y * decision - 1.0;
            let a = alpha[i];

            let projected = if a <= 0.0 {
                gradient.min(0.0)
            } else if a >= c {
                gradient.max(0.0)
            } else {
                gradient
            };
            max_violation = max_violation.max(projected.abs());

            if projected.abs() > 1e-12 {
                let updated = (a - gradient / q_diag[i]).clamp(0.0, c);
                let delta = (updated - a) * y;
                if delta != 0.0 {
                    for (w, &count) in weights.iter_mut().zip(x.iter()) {
                        *w += delta * f64::from(count);
                    }
                    bias += delta;
                    alpha[i] = updated;
                }
            }
        }

        if max_violation < config.tolerance {
            log::debug!("solver converged after {} passes", pass + 1);
            converged = true;
            break;
        }
    }

    if !converged {
        log::debug!(
            "solver hit the pass cap ({}) before tolerance {}",
            config.max_passes,
            config.tolerance
        );
    }

    Hyperplane {
        weights,
        bias,
        c,
        approximate: !converged,
    }
}
