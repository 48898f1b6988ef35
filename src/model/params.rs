//! Parameter loading and fail-fast validation.

use super::{ClassLabel, ModelParams};
use crate::error::ConfigError;
use std::path::Path;

impl ModelParams {
    /// The parameter table shipped with the screener (trained offline on the
    /// source study data).
    pub fn builtin() -> Self {
        super::builtin::table()
            .validated()
            .expect("builtin parameter table is valid")
    }

    /// Load an operator-supplied parameter file (same JSON shape as the
    /// builtin table). Malformed parameters are fatal here, before the
    /// classifier can observe them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let raw: ModelParams = serde_json::from_str(data)?;
        raw.validated()
    }

    /// Check the set and bring classes into canonical enumeration order.
    /// Rejects missing/duplicate classes, mean/stdev length disagreement,
    /// negative stdev, and priors outside (0, 1].
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        for label in ClassLabel::ALL {
            match self.classes.iter().filter(|c| c.label == label).count() {
                0 => return Err(ConfigError::MissingClass(label)),
                1 => {}
                _ => return Err(ConfigError::DuplicateClass(label)),
            }
        }
        // Tie-break order depends on this ordering, not on file order.
        self.classes
            .sort_by_key(|c| ClassLabel::ALL.iter().position(|l| *l == c.label));

        let dim = self.classes[0].mean.len();
        for c in &self.classes {
            if c.mean.len() != dim {
                return Err(ConfigError::LengthMismatch {
                    class: c.label,
                    field: "mean",
                    expected: dim,
                    actual: c.mean.len(),
                });
            }
            if c.stdev.len() != dim {
                return Err(ConfigError::LengthMismatch {
                    class: c.label,
                    field: "stdev",
                    expected: dim,
                    actual: c.stdev.len(),
                });
            }
            for (i, &s) in c.stdev.iter().enumerate() {
                if s < 0.0 {
                    return Err(ConfigError::NegativeStdev {
                        class: c.label,
                        index: i,
                        value: s,
                    });
                }
            }
            if !c.prior.is_finite() || c.prior <= 0.0 || c.prior > 1.0 {
                return Err(ConfigError::InvalidPrior {
                    class: c.label,
                    value: c.prior,
                });
            }
        }
        Ok(self)
    }

    /// Require the parameter dimension to match the questionnaire.
    pub fn expect_dim(&self, expected: usize) -> Result<(), ConfigError> {
        let actual = self.dim();
        if actual != expected {
            return Err(ConfigError::WrongDimension { expected, actual });
        }
        Ok(())
    }

    /// Feature dimension shared by every class.
    pub fn dim(&self) -> usize {
        self.classes.first().map(|c| c.mean.len()).unwrap_or(0)
    }

    /// Classes in canonical enumeration order.
    pub fn classes(&self) -> &[super::ClassParams] {
        &self.classes
    }
}
