//! Per-class log-posterior computation and arg-max class selection.
//! Pure arithmetic over the answers and the immutable parameter set; no I/O,
//! no state between calls.

use crate::error::{ConfigError, ShapeError};
use crate::model::{ClassLabel, ModelParams};
use serde::{Deserialize, Serialize};

/// Floor substituted for a zero or underflowed density so the log stays finite.
pub const DENSITY_FLOOR: f64 = 1e-9;

/// Normal density of `x` under (mu, sigma). A zero-variance item degenerates
/// to 1.0 on an exact mean match and the floor otherwise.
pub fn gaussian_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if sigma == 0.0 {
        return if x == mu { 1.0 } else { DENSITY_FLOOR };
    }
    (1.0 / (sigma * (2.0 * std::f64::consts::PI).sqrt()))
        * (-((x - mu).powi(2)) / (2.0 * sigma * sigma)).exp()
}

/// Unnormalized natural-log posterior for one class. Usable for ranking only,
/// not as a calibrated probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassScore {
    pub label: ClassLabel,
    pub log_posterior: f64,
}

/// Scores for every class (in enumeration order) and the winning class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub scores: Vec<ClassScore>,
    pub predicted: ClassLabel,
}

impl Classification {
    pub fn score(&self, label: ClassLabel) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.log_posterior)
    }
}

/// The classifier. Holds a validated parameter set and nothing else; `classify`
/// calls are independent and safe to run concurrently.
pub struct GaussianNb {
    params: ModelParams,
}

impl GaussianNb {
    /// Validates the parameter set so no classification can observe an
    /// inconsistent one.
    pub fn new(params: ModelParams) -> Result<Self, ConfigError> {
        Ok(Self {
            params: params.validated()?,
        })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Score every class against the answer vector and pick the arg-max.
    ///
    /// The answer length must match the parameter dimension; values themselves
    /// are not range-checked — the density model evaluates whatever it is
    /// handed, and the collection surface owns the Likert bounds. Exact score
    /// ties resolve to the first class in enumeration order.
    pub fn classify(&self, answers: &[u8]) -> Result<Classification, ShapeError> {
        let dim = self.params.dim();
        if answers.len() != dim {
            return Err(ShapeError {
                expected: dim,
                actual: answers.len(),
            });
        }

        let mut scores = Vec::with_capacity(self.params.classes().len());
        for class in self.params.classes() {
            let mut logp = class.prior.ln();
            for (i, &answer) in answers.iter().enumerate() {
                let p = gaussian_pdf(f64::from(answer), class.mean[i], class.stdev[i]);
                // underflow to exactly 0.0 is floored, not propagated as -inf
                logp += if p > 0.0 { p.ln() } else { DENSITY_FLOOR.ln() };
            }
            scores.push(ClassScore {
                label: class.label,
                log_posterior: logp,
            });
        }

        let mut best = 0;
        for (i, s) in scores.iter().enumerate().skip(1) {
            if s.log_posterior > scores[best].log_posterior {
                best = i;
            }
        }
        let predicted = scores[best].label;

        Ok(Classification { scores, predicted })
    }
}
