//! DecisionMatrix - immutable, invariant-checked decision problem.

use std::collections::HashSet;

use crate::domain::foundation::{Rejection, WEIGHT_SUM_TOLERANCE};

use super::{Alternative, Criterion, ScoreTable};

/// An internally consistent decision problem.
///
/// The only way to obtain a matrix is `DecisionMatrix::new`, which re-checks
/// every invariant regardless of the caller - the transformer already
/// validated the same rules, and this constructor validates them again so
/// that no path around the transformer can produce an inconsistent matrix.
///
/// There is no mutation API; recomputation constructs a new matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    alternatives: Vec<Alternative>,
    criteria: Vec<Criterion>,
    scores: ScoreTable,
}

impl DecisionMatrix {
    /// Constructs a matrix, validating every invariant.
    ///
    /// Checks run in categorized order, short-circuiting between categories
    /// and accumulating all failures within one:
    /// 1. non-empty alternative and criterion lists
    /// 2. unique alternative ids and criterion names
    /// 3. weight domain: finite, non-negative, sum within tolerance of 1.0
    /// 4. score references, score finiteness, completeness (one score per
    ///    alternative/criterion pair, nothing else)
    pub fn new(
        alternatives: Vec<Alternative>,
        criteria: Vec<Criterion>,
        scores: ScoreTable,
    ) -> Result<Self, Rejection> {
        Self::check_non_empty(&alternatives, &criteria)?;
        Self::check_unique_identifiers(&alternatives, &criteria)?;
        Self::check_weights(&criteria)?;
        Self::check_score_references(&alternatives, &criteria, &scores)?;
        Self::check_score_values(&scores)?;
        Self::check_completeness(&alternatives, &criteria, &scores)?;

        Ok(Self {
            alternatives,
            criteria,
            scores,
        })
    }

    /// The alternatives, in original input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// The criteria, in original input order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Score lookup by alternative id and criterion name.
    pub fn score(&self, alternative_id: &str, criterion: &str) -> Option<f64> {
        self.scores.get(alternative_id, criterion)
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    fn check_non_empty(
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<(), Rejection> {
        let mut errors = Vec::new();
        if alternatives.is_empty() {
            errors.push(Rejection::EmptySection {
                field: "alternatives".to_string(),
            });
        }
        if criteria.is_empty() {
            errors.push(Rejection::EmptySection {
                field: "criteria".to_string(),
            });
        }
        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    fn check_unique_identifiers(
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<(), Rejection> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for (i, alt) in alternatives.iter().enumerate() {
            if !seen.insert(alt.id.as_str()) {
                errors.push(Rejection::DuplicateIdentifier {
                    field: format!("alternatives[{}].id", i),
                    identifier: alt.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (i, criterion) in criteria.iter().enumerate() {
            if !seen.insert(criterion.name.as_str()) {
                errors.push(Rejection::DuplicateIdentifier {
                    field: format!("criteria[{}].name", i),
                    identifier: criterion.name.clone(),
                });
            }
        }

        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    fn check_weights(criteria: &[Criterion]) -> Result<(), Rejection> {
        let mut errors = Vec::new();
        for (i, criterion) in criteria.iter().enumerate() {
            if !criterion.weight.is_finite() {
                errors.push(Rejection::NonFinite {
                    field: format!("criteria[{}].weight", i),
                });
            } else if criterion.weight < 0.0 {
                errors.push(Rejection::NegativeWeight {
                    field: format!("criteria[{}].weight", i),
                    value: criterion.weight,
                });
            }
        }
        if let Some(rejection) = Rejection::collect(errors) {
            return Err(rejection);
        }

        let sum: f64 = criteria.iter().map(|c| c.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Rejection::WeightSumOutOfTolerance {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }
        Ok(())
    }

    fn check_score_references(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        scores: &ScoreTable,
    ) -> Result<(), Rejection> {
        let alternative_ids: HashSet<_> = alternatives.iter().map(|a| a.id.as_str()).collect();
        let criterion_names: HashSet<_> = criteria.iter().map(|c| c.name.as_str()).collect();

        let mut errors = Vec::new();
        for ((alternative_id, criterion), _) in scores.iter() {
            if !alternative_ids.contains(alternative_id.as_str()) {
                errors.push(Rejection::UnknownReference {
                    field: "scores".to_string(),
                    referent: "alternative".to_string(),
                    reference: alternative_id.clone(),
                });
            }
            if !criterion_names.contains(criterion.as_str()) {
                errors.push(Rejection::UnknownReference {
                    field: "scores".to_string(),
                    referent: "criterion".to_string(),
                    reference: criterion.clone(),
                });
            }
        }

        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    fn check_score_values(scores: &ScoreTable) -> Result<(), Rejection> {
        let mut errors = Vec::new();
        for ((alternative_id, criterion), value) in scores.iter() {
            if !value.is_finite() {
                errors.push(Rejection::NonFinite {
                    field: format!("scores[{}/{}]", alternative_id, criterion),
                });
            }
        }
        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    fn check_completeness(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        scores: &ScoreTable,
    ) -> Result<(), Rejection> {
        let mut errors = Vec::new();
        for alt in alternatives {
            for criterion in criteria {
                if !scores.contains(&alt.id, &criterion.name) {
                    errors.push(Rejection::MissingScore {
                        alternative_id: alt.id.clone(),
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }
        // Every pair present plus no unknown references means the cell count
        // is exactly |alternatives| x |criteria|.
        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }
}
