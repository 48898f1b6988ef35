//! Model parameters: per-class prior and per-item Gaussian (mean, stdev) pairs.
//! Loaded once at startup, validated fail-fast, read-only afterwards.

mod builtin;
mod params;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three anxiety classes. Declaration order is the fixed class-iteration
/// order; exact log-posterior ties resolve to the first class in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Alto,
    Normal,
    Bajo,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 3] = [ClassLabel::Alto, ClassLabel::Normal, ClassLabel::Bajo];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Alto => "Alto",
            ClassLabel::Normal => "Normal",
            ClassLabel::Bajo => "Bajo",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gaussian statistics for one class: a prior and one (mean, stdev) pair per
/// questionnaire item, positionally aligned with the item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassParams {
    pub label: ClassLabel,
    pub prior: f64,
    pub mean: Vec<f64>,
    pub stdev: Vec<f64>,
}

/// The full parameter set. Construct via [`ModelParams::builtin`] or
/// [`ModelParams::load`]; both yield a validated, canonically ordered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub classes: Vec<ClassParams>,
}
