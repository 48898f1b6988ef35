//! Error types for parameter loading and classification input.

use crate::model::ClassLabel;
use thiserror::Error;

/// Errors raised while loading or validating model parameters. All fatal:
/// the classifier never runs against a parameter set that failed validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error reading a parameter file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// mean/stdev length disagrees with the questionnaire item count
    #[error("class '{class}': {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        class: ClassLabel,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Negative standard deviation
    #[error("class '{class}': stdev[{index}] is negative ({value})")]
    NegativeStdev {
        class: ClassLabel,
        index: usize,
        value: f64,
    },

    /// Prior outside (0, 1] or not finite
    #[error("class '{class}': prior {value} is not in (0, 1]")]
    InvalidPrior { class: ClassLabel, value: f64 },

    /// Parameter dimension disagrees with the questionnaire item count
    #[error("parameter dimension {actual} does not match the {expected}-item questionnaire")]
    WrongDimension { expected: usize, actual: usize },

    /// A known class has no parameter entry
    #[error("missing parameters for class '{0}'")]
    MissingClass(ClassLabel),

    /// Same class listed twice
    #[error("duplicate parameters for class '{0}'")]
    DuplicateClass(ClassLabel),
}

/// Answer vector length does not match the questionnaire. Recoverable by the
/// caller (a form-integration bug, not a data problem); never returns a
/// partial result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("answer vector has {actual} values, expected {expected}")]
pub struct ShapeError {
    pub expected: usize,
    pub actual: usize,
}
