//! Ranked result - the output of a weighted-sum ranking.

use serde::{Deserialize, Serialize};

use super::{DominatedAlternative, SensitivityReport};

/// One criterion's contribution to an alternative's weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub criterion: String,
    /// The raw input score.
    pub raw_score: f64,
    /// Min-max normalized score, direction-adjusted so higher is better.
    pub normalized: f64,
    /// `weight * normalized`; the weighted score is the sum of these.
    pub weighted: f64,
}

/// One alternative's place in the ranking, with its full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: String,
    pub label: String,
    pub weighted_score: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// The complete ranking of a decision problem.
///
/// `rankings` is sorted descending by weighted score; scores within
/// `SCORE_TIE_TOLERANCE` of each other are ordered by the alternatives'
/// original input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub rankings: Vec<RankedAlternative>,
    /// Id of the first-ranked alternative.
    pub winner_id: String,
    /// Criteria on which every alternative scored identically; they
    /// contribute a constant 0.5 and cannot distinguish alternatives.
    pub neutral_criteria: Vec<String>,
    /// Alternatives that are dominated by some other alternative.
    pub dominated: Vec<DominatedAlternative>,
    pub sensitivity: Option<SensitivityReport>,
}

impl RankedResult {
    /// The winning alternative, if the ranking is non-empty.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.rankings.first()
    }

    /// Zero-based rank position of an alternative.
    pub fn position(&self, alternative_id: &str) -> Option<usize> {
        self.rankings
            .iter()
            .position(|r| r.alternative_id == alternative_id)
    }
}
