//! Result rendering: per-class log-posteriors, the winning class, and a short
//! advisory paragraph matching the source instrument's guidance.

use crate::classifier::Classification;
use crate::model::ClassLabel;
use std::io::Write;

/// Guidance text shown under the winning class.
pub fn advisory(label: ClassLabel) -> &'static str {
    match label {
        ClassLabel::Alto => {
            "This profile suggests high academic anxiety. It may interfere \
             significantly with school performance and emotional well-being."
        }
        ClassLabel::Normal => {
            "This profile indicates a moderate anxiety level, with specific areas \
             that could be worked on to improve academic participation."
        }
        ClassLabel::Bajo => {
            "This profile reflects low academic anxiety. There is confidence to \
             participate and present in school contexts."
        }
    }
}

/// Write the classification result: one score line per class (4 decimals, as
/// the source instrument reports them), then the winning label and advisory.
pub fn render(result: &Classification, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Results")?;
    for s in &result.scores {
        writeln!(out, "  {:<8} log-posterior = {:.4}", s.label, s.log_posterior)?;
    }
    writeln!(out)?;
    writeln!(out, "Classification: {}", result.predicted)?;
    writeln!(out, "{}", advisory(result.predicted))?;
    Ok(())
}
