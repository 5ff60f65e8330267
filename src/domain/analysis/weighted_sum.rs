//! Weighted-sum ranking over a valid decision matrix.

use crate::domain::foundation::SCORE_TIE_TOLERANCE;
use crate::domain::matrix::DecisionMatrix;

use super::{CriterionContribution, DominanceAnalyzer, RankedAlternative, RankedResult};

/// Weighted-sum model calculator.
///
/// Total over valid matrices: every numeric precondition (finite scores,
/// valid weights, completeness) is guaranteed by `DecisionMatrix::new`, so
/// no function here can fail or produce a non-finite value.
pub struct WeightedSumCalculator;

impl WeightedSumCalculator {
    /// Computes the full ranking for a matrix.
    ///
    /// # Algorithm
    /// Per criterion, each score is min-max normalized against the range
    /// observed across all alternatives, inverted for minimize criteria, then
    /// combined as sum(weight * adjusted). Zero-range criteria contribute a
    /// constant 0.5 to every alternative.
    pub fn rank(matrix: &DecisionMatrix) -> RankedResult {
        let weights: Vec<f64> = matrix.criteria().iter().map(|c| c.weight).collect();
        let adjusted = Self::adjusted_grid(matrix);
        let totals = Self::weighted_totals(&adjusted, &weights);
        let order = Self::order_descending(&totals);

        let rankings: Vec<RankedAlternative> = order
            .iter()
            .map(|&i| {
                let alt = &matrix.alternatives()[i];
                let contributions = matrix
                    .criteria()
                    .iter()
                    .enumerate()
                    .map(|(j, criterion)| CriterionContribution {
                        criterion: criterion.name.clone(),
                        raw_score: matrix.score(&alt.id, &criterion.name).unwrap_or(0.0),
                        normalized: adjusted[i][j],
                        weighted: criterion.weight * adjusted[i][j],
                    })
                    .collect();
                RankedAlternative {
                    alternative_id: alt.id.clone(),
                    label: alt.label.clone(),
                    weighted_score: totals[i],
                    contributions,
                }
            })
            .collect();

        let winner_id = rankings
            .first()
            .map(|r| r.alternative_id.clone())
            .unwrap_or_default();

        RankedResult {
            rankings,
            winner_id,
            neutral_criteria: Self::neutral_criteria(matrix),
            dominated: DominanceAnalyzer::find_dominated(matrix),
            sensitivity: None,
        }
    }

    /// Orders alternatives under an explicit weight vector.
    ///
    /// Returns (alternative index, weighted score) pairs in rank order.
    /// Used by sensitivity analysis, which re-ranks under perturbed weights
    /// without mutating the matrix.
    pub(crate) fn rank_with_weights(
        matrix: &DecisionMatrix,
        weights: &[f64],
    ) -> Vec<(usize, f64)> {
        let adjusted = Self::adjusted_grid(matrix);
        let totals = Self::weighted_totals(&adjusted, weights);
        Self::order_descending(&totals)
            .into_iter()
            .map(|i| (i, totals[i]))
            .collect()
    }

    /// Direction-adjusted normalized scores, indexed [alternative][criterion].
    fn adjusted_grid(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let bounds: Vec<(f64, f64)> = matrix
            .criteria()
            .iter()
            .map(|criterion| Self::criterion_bounds(matrix, &criterion.name))
            .collect();

        matrix
            .alternatives()
            .iter()
            .map(|alt| {
                matrix
                    .criteria()
                    .iter()
                    .zip(&bounds)
                    .map(|(criterion, &(min, max))| {
                        let score = matrix.score(&alt.id, &criterion.name).unwrap_or(0.0);
                        criterion.direction.adjust(Self::normalize(score, min, max))
                    })
                    .collect()
            })
            .collect()
    }

    /// Observed (min, max) of a criterion's scores across all alternatives.
    fn criterion_bounds(matrix: &DecisionMatrix, criterion: &str) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for alt in matrix.alternatives() {
            let score = matrix.score(&alt.id, criterion).unwrap_or(0.0);
            if score < min {
                min = score;
            }
            if score > max {
                max = score;
            }
        }
        (min, max)
    }

    /// Min-max normalization into [0, 1].
    ///
    /// Zero range maps to the neutral 0.5. When the range itself overflows
    /// f64 (finite scores near the extremes of the type), the computation is
    /// done on half-scaled values so the result stays finite.
    fn normalize(score: f64, min: f64, max: f64) -> f64 {
        let range = max - min;
        if range == 0.0 {
            0.5
        } else if range.is_finite() {
            (score - min) / range
        } else {
            (score / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
        }
    }

    fn weighted_totals(adjusted: &[Vec<f64>], weights: &[f64]) -> Vec<f64> {
        adjusted
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(value, weight)| weight * value)
                    .sum()
            })
            .collect()
    }

    /// Rank order of indices: descending score, with scores within
    /// `SCORE_TIE_TOLERANCE` of a tie group's best score ordered by original
    /// input position.
    fn order_descending(totals: &[f64]) -> Vec<usize> {
        let mut by_score: Vec<usize> = (0..totals.len()).collect();
        by_score.sort_by(|&a, &b| totals[b].total_cmp(&totals[a]).then(a.cmp(&b)));

        let mut ordered = Vec::with_capacity(by_score.len());
        let mut group: Vec<usize> = Vec::new();
        let mut anchor = 0.0;
        for i in by_score {
            if group.is_empty() {
                anchor = totals[i];
            } else if anchor - totals[i] > SCORE_TIE_TOLERANCE {
                group.sort_unstable();
                ordered.append(&mut group);
                anchor = totals[i];
            }
            group.push(i);
        }
        group.sort_unstable();
        ordered.append(&mut group);
        ordered
    }

    /// Criteria on which all alternatives scored identically.
    fn neutral_criteria(matrix: &DecisionMatrix) -> Vec<String> {
        matrix
            .criteria()
            .iter()
            .filter(|criterion| {
                let (min, max) = Self::criterion_bounds(matrix, &criterion.name);
                max - min == 0.0
            })
            .map(|criterion| criterion.name.clone())
            .collect()
    }
}
