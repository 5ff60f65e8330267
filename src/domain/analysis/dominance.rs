//! Dominance detection over a decision matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Direction;
use crate::domain::matrix::DecisionMatrix;

/// An alternative that is dominated by another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominatedAlternative {
    pub alternative_id: String,
    pub dominated_by_id: String,
    pub explanation: String,
}

/// Direction-aware dominance analysis.
///
/// Alternative A dominates alternative B when A is at least as good as B on
/// every criterion (after accounting for direction) and strictly better on
/// at least one. A dominated alternative can never be the rational choice,
/// whatever the weights.
pub struct DominanceAnalyzer;

impl DominanceAnalyzer {
    /// Finds all dominated alternatives.
    ///
    /// Each dominated alternative is reported once, with the first dominator
    /// found in input order.
    ///
    /// # Edge Cases
    /// - Single alternative: returns empty Vec (nothing to dominate)
    /// - All tied on every criterion: returns empty Vec
    pub fn find_dominated(matrix: &DecisionMatrix) -> Vec<DominatedAlternative> {
        let mut dominated = Vec::new();

        if matrix.alternative_count() < 2 {
            return dominated;
        }

        for candidate in matrix.alternatives() {
            for dominator in matrix.alternatives() {
                if candidate.id == dominator.id {
                    continue;
                }
                if Self::dominates(matrix, &dominator.id, &candidate.id) {
                    dominated.push(DominatedAlternative {
                        alternative_id: candidate.id.clone(),
                        dominated_by_id: dominator.id.clone(),
                        explanation: Self::explain_dominance(matrix, &dominator.id, &candidate.id),
                    });
                    break; // one dominator per candidate is enough
                }
            }
        }

        dominated
    }

    /// Checks if alternative `a` dominates alternative `b`.
    fn dominates(matrix: &DecisionMatrix, a: &str, b: &str) -> bool {
        let mut strictly_better_on_one = false;

        for criterion in matrix.criteria() {
            let score_a = matrix.score(a, &criterion.name).unwrap_or(0.0);
            let score_b = matrix.score(b, &criterion.name).unwrap_or(0.0);
            let (goodness_a, goodness_b) = match criterion.direction {
                Direction::Maximize => (score_a, score_b),
                Direction::Minimize => (score_b, score_a),
            };

            if goodness_a < goodness_b {
                return false;
            }
            if goodness_a > goodness_b {
                strictly_better_on_one = true;
            }
        }

        strictly_better_on_one
    }

    /// Generates the explanation for why `a` dominates `b`.
    fn explain_dominance(matrix: &DecisionMatrix, a: &str, b: &str) -> String {
        let mut better_on = Vec::new();

        for criterion in matrix.criteria() {
            let score_a = matrix.score(a, &criterion.name).unwrap_or(0.0);
            let score_b = matrix.score(b, &criterion.name).unwrap_or(0.0);
            let strictly_better = match criterion.direction {
                Direction::Maximize => score_a > score_b,
                Direction::Minimize => score_a < score_b,
            };
            if strictly_better {
                better_on.push(criterion.name.as_str());
            }
        }

        format!(
            "{} is at least as good on every criterion and strictly better on: {}",
            a,
            better_on.join(", ")
        )
    }
}
