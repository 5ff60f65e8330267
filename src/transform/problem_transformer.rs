//! Problem Transformer - structural validation of untrusted payloads.
//!
//! Converts an arbitrary JSON payload into a `DecisionMatrix`, or fails with
//! a categorized `Rejection`. Validation runs in four ordered gates, short-
//! circuiting between gates but accumulating every error found inside one:
//!
//! 1. type well-formedness (shape, primitive types, known direction labels)
//! 2. referential integrity (unique ids, declared references)
//! 3. numeric domain rules (weight sign, weight sum, finiteness)
//! 4. completeness (one score per alternative/criterion pair, no extras)
//!
//! On success the parsed parts are handed to `DecisionMatrix::new`, which
//! independently re-validates every invariant.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::domain::foundation::{Direction, Rejection, WEIGHT_SUM_TOLERANCE};
use crate::domain::matrix::{Alternative, Criterion, DecisionMatrix, ScoreTable};

/// A score entry as declared in the payload, before table construction.
#[derive(Debug, Clone)]
struct RawScore {
    alternative_id: String,
    criterion: String,
    value: f64,
}

/// Stateless payload-to-matrix transformer.
pub struct ProblemTransformer;

impl ProblemTransformer {
    /// Transforms a raw payload into a validated matrix.
    ///
    /// Pure function of the input: no side effects, no partial construction.
    pub fn transform(payload: &Value) -> Result<DecisionMatrix, Rejection> {
        let (alternatives, criteria, scores) = Self::parse_shape(payload)?;
        Self::check_references(&alternatives, &criteria, &scores)?;
        Self::check_numeric_domain(&criteria, &scores)?;
        Self::check_completeness(&alternatives, &criteria, &scores)?;

        let mut builder = ScoreTable::builder();
        for score in scores {
            builder = builder.score(score.alternative_id, score.criterion, score.value);
        }
        let table = builder.build()?;

        DecisionMatrix::new(alternatives, criteria, table)
    }

    // =========================================================================
    // Gate 1: type well-formedness
    // =========================================================================

    fn parse_shape(
        payload: &Value,
    ) -> Result<(Vec<Alternative>, Vec<Criterion>, Vec<RawScore>), Rejection> {
        let root = match payload.as_object() {
            Some(obj) => obj,
            None => {
                return Err(Rejection::InvalidType {
                    field: "root".to_string(),
                    expected: "object".to_string(),
                    actual: Self::type_name(payload),
                })
            }
        };

        let mut errors = Vec::new();

        let alternatives: Vec<Alternative> = Self::section_items(root, "alternatives", &mut errors)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| Self::parse_alternative(item, i, &mut errors))
                    .collect()
            })
            .unwrap_or_default();

        let criteria: Vec<Criterion> = Self::section_items(root, "criteria", &mut errors)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| Self::parse_criterion(item, i, &mut errors))
                    .collect()
            })
            .unwrap_or_default();

        let scores: Vec<RawScore> = Self::section_items(root, "scores", &mut errors)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| Self::parse_score(item, i, &mut errors))
                    .collect()
            })
            .unwrap_or_default();

        if let Some(rejection) = Rejection::collect(errors) {
            return Err(rejection);
        }

        let mut empties = Vec::new();
        if alternatives.is_empty() {
            empties.push(Rejection::EmptySection {
                field: "alternatives".to_string(),
            });
        }
        if criteria.is_empty() {
            empties.push(Rejection::EmptySection {
                field: "criteria".to_string(),
            });
        }
        if let Some(rejection) = Rejection::collect(empties) {
            return Err(rejection);
        }

        Ok((alternatives, criteria, scores))
    }

    fn parse_alternative(
        value: &Value,
        index: usize,
        errors: &mut Vec<Rejection>,
    ) -> Option<Alternative> {
        let path = format!("alternatives[{}]", index);
        let obj = Self::item_object(value, &path, errors)?;
        let id = Self::get_string(obj, "id", &path, errors);
        let label = Self::get_string(obj, "label", &path, errors);
        Some(Alternative::new(id?, label?))
    }

    fn parse_criterion(
        value: &Value,
        index: usize,
        errors: &mut Vec<Rejection>,
    ) -> Option<Criterion> {
        let path = format!("criteria[{}]", index);
        let obj = Self::item_object(value, &path, errors)?;
        let name = Self::get_string(obj, "name", &path, errors);
        let weight = Self::get_number(obj, "weight", &path, errors);
        let direction = Self::get_string(obj, "direction", &path, errors).and_then(|label| {
            match Direction::try_from_str(&label, &format!("{}.direction", path)) {
                Ok(direction) => Some(direction),
                Err(rejection) => {
                    errors.push(rejection);
                    None
                }
            }
        });
        Some(Criterion::new(name?, weight?, direction?))
    }

    fn parse_score(value: &Value, index: usize, errors: &mut Vec<Rejection>) -> Option<RawScore> {
        let path = format!("scores[{}]", index);
        let obj = Self::item_object(value, &path, errors)?;
        let alternative_id = Self::get_string(obj, "alternative", &path, errors);
        let criterion = Self::get_string(obj, "criterion", &path, errors);
        let value = Self::get_number(obj, "value", &path, errors);
        Some(RawScore {
            alternative_id: alternative_id?,
            criterion: criterion?,
            value: value?,
        })
    }

    // =========================================================================
    // Gate 2: referential integrity
    // =========================================================================

    fn check_references(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        scores: &[RawScore],
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

        let alternative_ids: HashSet<_> = alternatives.iter().map(|a| a.id.as_str()).collect();
        let criterion_names: HashSet<_> = criteria.iter().map(|c| c.name.as_str()).collect();
        for (i, score) in scores.iter().enumerate() {
            if !alternative_ids.contains(score.alternative_id.as_str()) {
                errors.push(Rejection::UnknownReference {
                    field: format!("scores[{}].alternative", i),
                    referent: "alternative".to_string(),
                    reference: score.alternative_id.clone(),
                });
            }
            if !criterion_names.contains(score.criterion.as_str()) {
                errors.push(Rejection::UnknownReference {
                    field: format!("scores[{}].criterion", i),
                    referent: "criterion".to_string(),
                    reference: score.criterion.clone(),
                });
            }
        }

        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Gate 3: numeric domain rules
    // =========================================================================

    fn check_numeric_domain(criteria: &[Criterion], scores: &[RawScore]) -> Result<(), Rejection> {
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

        // scores may be any finite real number; only finiteness is checked
        for (i, score) in scores.iter().enumerate() {
            if !score.value.is_finite() {
                errors.push(Rejection::NonFinite {
                    field: format!("scores[{}].value", i),
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

    // =========================================================================
    // Gate 4: completeness
    // =========================================================================

    fn check_completeness(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        scores: &[RawScore],
    ) -> Result<(), Rejection> {
        let mut errors = Vec::new();

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for score in scores {
            if !seen.insert((score.alternative_id.as_str(), score.criterion.as_str())) {
                errors.push(Rejection::DuplicateScore {
                    alternative_id: score.alternative_id.clone(),
                    criterion: score.criterion.clone(),
                });
            }
        }

        for alt in alternatives {
            for criterion in criteria {
                if !seen.contains(&(alt.id.as_str(), criterion.name.as_str())) {
                    errors.push(Rejection::MissingScore {
                        alternative_id: alt.id.clone(),
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }

        match Rejection::collect(errors) {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn section_items<'a>(
        root: &'a Map<String, Value>,
        field: &str,
        errors: &mut Vec<Rejection>,
    ) -> Option<&'a Vec<Value>> {
        match root.get(field) {
            None => {
                errors.push(Rejection::MissingField {
                    field: field.to_string(),
                });
                None
            }
            Some(value) => match value.as_array() {
                Some(items) => Some(items),
                None => {
                    errors.push(Rejection::InvalidType {
                        field: field.to_string(),
                        expected: "array".to_string(),
                        actual: Self::type_name(value),
                    });
                    None
                }
            },
        }
    }

    fn item_object<'a>(
        value: &'a Value,
        path: &str,
        errors: &mut Vec<Rejection>,
    ) -> Option<&'a Map<String, Value>> {
        match value.as_object() {
            Some(obj) => Some(obj),
            None => {
                errors.push(Rejection::InvalidType {
                    field: path.to_string(),
                    expected: "object".to_string(),
                    actual: Self::type_name(value),
                });
                None
            }
        }
    }

    fn get_string(
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<Rejection>,
    ) -> Option<String> {
        match obj.get(field) {
            None => {
                errors.push(Rejection::MissingField {
                    field: format!("{}.{}", parent, field),
                });
                None
            }
            Some(value) => match value.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    errors.push(Rejection::InvalidType {
                        field: format!("{}.{}", parent, field),
                        expected: "string".to_string(),
                        actual: Self::type_name(value),
                    });
                    None
                }
            },
        }
    }

    fn get_number(
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<Rejection>,
    ) -> Option<f64> {
        match obj.get(field) {
            None => {
                errors.push(Rejection::MissingField {
                    field: format!("{}.{}", parent, field),
                });
                None
            }
            Some(value) => match value.as_f64() {
                Some(n) => Some(n),
                None => {
                    errors.push(Rejection::InvalidType {
                        field: format!("{}.{}", parent, field),
                        expected: "number".to_string(),
                        actual: Self::type_name(value),
                    });
                    None
                }
            },
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }
}
