//! DecisionAnalyzer - the single operation exposed to the calling layer.

use serde_json::Value;
use tracing::debug;

use crate::domain::analysis::{RankedResult, SensitivityAnalyzer, WeightedSumCalculator};
use crate::domain::foundation::{Rejection, SENSITIVITY_DELTA};
use crate::transform::ProblemTransformer;

/// Tunables for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Whether `analyze` attaches a sensitivity report.
    pub sensitivity: bool,
    /// Relative weight perturbation used by the sensitivity sweep.
    pub sensitivity_delta: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sensitivity: false,
            sensitivity_delta: SENSITIVITY_DELTA,
        }
    }
}

/// Raw payload in, ranked result or categorized rejection out.
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct DecisionAnalyzer {
    options: AnalysisOptions,
}

impl DecisionAnalyzer {
    /// Creates an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with explicit options.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Analyzes a raw decision problem payload.
    ///
    /// Runs the full pipeline: transformer gate, matrix construction gate,
    /// then the weighted-sum ranking. Every failure comes back as a
    /// structured `Rejection`; no input can fault past this boundary.
    pub fn analyze(&self, payload: &Value) -> Result<RankedResult, Rejection> {
        let matrix = ProblemTransformer::transform(payload).map_err(|rejection| {
            debug!(
                kind = %rejection.kind(),
                errors = rejection.error_count(),
                "rejected decision problem"
            );
            rejection
        })?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "transformed decision problem"
        );

        let mut result = WeightedSumCalculator::rank(&matrix);
        if self.options.sensitivity {
            result.sensitivity = Some(SensitivityAnalyzer::analyze(
                &matrix,
                self.options.sensitivity_delta,
            ));
        }

        debug!(winner = %result.winner_id, "computed ranking");
        Ok(result)
    }

    /// Analyzes and always attaches a sensitivity report.
    pub fn analyze_with_sensitivity(&self, payload: &Value) -> Result<RankedResult, Rejection> {
        let with_sensitivity = Self::with_options(AnalysisOptions {
            sensitivity: true,
            ..self.options
        });
        with_sensitivity.analyze(payload)
    }
}
