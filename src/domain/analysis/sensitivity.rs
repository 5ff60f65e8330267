//! Sensitivity analysis - how robust is the winner to the weights.

use serde::{Deserialize, Serialize};

use crate::domain::matrix::DecisionMatrix;

use super::WeightedSumCalculator;

/// Winner stability for one criterion's weight perturbation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSensitivity {
    pub criterion: String,
    /// Winner after increasing this criterion's weight by delta.
    pub winner_on_increase: String,
    /// Winner after decreasing this criterion's weight by delta.
    pub winner_on_decrease: String,
    /// True if either perturbation changes the winner.
    pub winner_changed: bool,
}

/// Summary of a full sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Relative perturbation applied to each weight (e.g. 0.1 for 10%).
    pub delta: f64,
    pub baseline_winner_id: String,
    pub criteria: Vec<CriterionSensitivity>,
}

impl SensitivityReport {
    /// True if no perturbation changed the winner.
    pub fn is_robust(&self) -> bool {
        self.criteria.iter().all(|c| !c.winner_changed)
    }
}

/// Weight-perturbation analyzer.
///
/// For each criterion, scales that criterion's weight by (1 +/- delta),
/// renormalizes all weights proportionally so they still sum to 1.0, and
/// re-ranks. The matrix itself is never modified.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Runs the sweep for every criterion.
    pub fn analyze(matrix: &DecisionMatrix, delta: f64) -> SensitivityReport {
        let base_weights: Vec<f64> = matrix.criteria().iter().map(|c| c.weight).collect();
        let baseline_winner_id = Self::winner_under(matrix, &base_weights);

        let criteria = matrix
            .criteria()
            .iter()
            .enumerate()
            .map(|(index, criterion)| {
                let winner_on_increase =
                    Self::winner_under(matrix, &Self::perturbed(&base_weights, index, delta));
                let winner_on_decrease =
                    Self::winner_under(matrix, &Self::perturbed(&base_weights, index, -delta));
                let winner_changed = winner_on_increase != baseline_winner_id
                    || winner_on_decrease != baseline_winner_id;
                CriterionSensitivity {
                    criterion: criterion.name.clone(),
                    winner_on_increase,
                    winner_on_decrease,
                    winner_changed,
                }
            })
            .collect();

        SensitivityReport {
            delta,
            baseline_winner_id,
            criteria,
        }
    }

    /// Scales one weight by (1 + delta) and renormalizes the vector to sum 1.
    fn perturbed(weights: &[f64], index: usize, delta: f64) -> Vec<f64> {
        let mut perturbed: Vec<f64> = weights.to_vec();
        if let Some(weight) = perturbed.get_mut(index) {
            *weight *= 1.0 + delta;
        }
        let total: f64 = perturbed.iter().sum();
        if total > 0.0 {
            for weight in &mut perturbed {
                *weight /= total;
            }
        }
        perturbed
    }

    fn winner_under(matrix: &DecisionMatrix, weights: &[f64]) -> String {
        WeightedSumCalculator::rank_with_weights(matrix, weights)
            .first()
            .and_then(|&(index, _)| matrix.alternatives().get(index))
            .map(|alt| alt.id.clone())
            .unwrap_or_default()
    }
}
