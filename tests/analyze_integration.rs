//! Integration tests for the full analysis pipeline.
//!
//! These tests drive the public `DecisionAnalyzer` surface end to end:
//! 1. Raw payload enters the transformer gate
//! 2. Parsed parts pass the matrix construction gate
//! 3. The calculator produces a deterministic ranked result
//!
//! Every rejection scenario must come back as a categorized `Rejection`,
//! never as a panic or a generic error.

use serde_json::{json, Value};

use decision_core::domain::foundation::{Rejection, RejectionKind};
use decision_core::{AnalysisOptions, DecisionAnalyzer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn cost_quality_payload() -> Value {
    json!({
        "alternatives": [
            { "id": "A", "label": "Vendor A" },
            { "id": "B", "label": "Vendor B" }
        ],
        "criteria": [
            { "name": "cost", "weight": 0.6, "direction": "minimize" },
            { "name": "quality", "weight": 0.4, "direction": "maximize" }
        ],
        "scores": [
            { "alternative": "A", "criterion": "cost", "value": 10 },
            { "alternative": "A", "criterion": "quality", "value": 5 },
            { "alternative": "B", "criterion": "cost", "value": 5 },
            { "alternative": "B", "criterion": "quality", "value": 5 }
        ]
    })
}

// =============================================================================
// Ranking scenarios
// =============================================================================

#[test]
fn cost_quality_scenario_ranks_b_first_with_exact_scores() {
    init_tracing();
    let result = DecisionAnalyzer::new()
        .analyze(&cost_quality_payload())
        .unwrap();

    // cost: A normalizes to 1.0 and inverts to 0.0, B to 0.0 inverting to 1.0
    // quality: identical scores, neutral 0.5 for both
    // A = 0.6*0.0 + 0.4*0.5 = 0.2, B = 0.6*1.0 + 0.4*0.5 = 0.8
    assert_eq!(result.winner_id, "B");
    assert_eq!(result.rankings[0].alternative_id, "B");
    assert_eq!(result.rankings[0].weighted_score, 0.8);
    assert_eq!(result.rankings[1].alternative_id, "A");
    assert_eq!(result.rankings[1].weighted_score, 0.2);
    assert_eq!(result.neutral_criteria, vec!["quality".to_string()]);
}

#[test]
fn breakdown_explains_every_criterion() {
    let result = DecisionAnalyzer::new()
        .analyze(&cost_quality_payload())
        .unwrap();

    for ranked in &result.rankings {
        assert_eq!(ranked.contributions.len(), 2);
        let total: f64 = ranked.contributions.iter().map(|c| c.weighted).sum();
        assert!((total - ranked.weighted_score).abs() < 1e-12);
    }
}

#[test]
fn dominated_alternative_is_reported() {
    // B is cheaper with equal quality, so A is dominated
    let result = DecisionAnalyzer::new()
        .analyze(&cost_quality_payload())
        .unwrap();

    assert_eq!(result.dominated.len(), 1);
    assert_eq!(result.dominated[0].alternative_id, "A");
    assert_eq!(result.dominated[0].dominated_by_id, "B");
}

#[test]
fn sensitivity_report_is_attached_on_request() {
    let result = DecisionAnalyzer::new()
        .analyze_with_sensitivity(&cost_quality_payload())
        .unwrap();

    let report = result.sensitivity.expect("sensitivity requested");
    assert_eq!(report.baseline_winner_id, "B");
    assert_eq!(report.criteria.len(), 2);
    // B dominates A, so no 10% weight shift can change the winner
    assert!(report.is_robust());
}

#[test]
fn custom_sensitivity_delta_is_used() {
    let analyzer = DecisionAnalyzer::with_options(AnalysisOptions {
        sensitivity: true,
        sensitivity_delta: 0.25,
    });
    let result = analyzer.analyze(&cost_quality_payload()).unwrap();
    assert_eq!(result.sensitivity.unwrap().delta, 0.25);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn identical_input_yields_byte_identical_results() {
    let analyzer = DecisionAnalyzer::new();
    let first = analyzer.analyze(&cost_quality_payload()).unwrap();
    let second = analyzer.analyze(&cost_quality_payload()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn tied_alternatives_keep_payload_order() {
    let payload = json!({
        "alternatives": [
            { "id": "zulu", "label": "Z" },
            { "id": "alpha", "label": "A" },
            { "id": "mike", "label": "M" }
        ],
        "criteria": [
            { "name": "score", "weight": 1.0, "direction": "maximize" }
        ],
        "scores": [
            { "alternative": "zulu", "criterion": "score", "value": 3 },
            { "alternative": "alpha", "criterion": "score", "value": 3 },
            { "alternative": "mike", "criterion": "score", "value": 3 }
        ]
    });

    let result = DecisionAnalyzer::new().analyze(&payload).unwrap();
    let order: Vec<&str> = result
        .rankings
        .iter()
        .map(|r| r.alternative_id.as_str())
        .collect();
    assert_eq!(order, vec!["zulu", "alpha", "mike"]);
}

// =============================================================================
// Rejection taxonomy
// =============================================================================

#[test]
fn negative_weight_rejected_as_invalid_weight() {
    let mut payload = cost_quality_payload();
    payload["criteria"][0]["weight"] = json!(-0.6);
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::InvalidWeight);
    assert!(matches!(err, Rejection::NegativeWeight { .. }));
}

#[test]
fn loose_weight_sum_rejected_as_invalid_weight() {
    let mut payload = cost_quality_payload();
    payload["criteria"][0]["weight"] = json!(0.45); // sum 0.85
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::InvalidWeight);
    assert!(matches!(err, Rejection::WeightSumOutOfTolerance { .. }));
}

#[test]
fn three_equal_half_weights_rejected_as_invalid_weight() {
    let payload = json!({
        "alternatives": [
            { "id": "a", "label": "A" },
            { "id": "b", "label": "B" }
        ],
        "criteria": [
            { "name": "c1", "weight": 0.5, "direction": "maximize" },
            { "name": "c2", "weight": 0.5, "direction": "maximize" },
            { "name": "c3", "weight": 0.5, "direction": "maximize" }
        ],
        "scores": [
            { "alternative": "a", "criterion": "c1", "value": 1 },
            { "alternative": "a", "criterion": "c2", "value": 2 },
            { "alternative": "a", "criterion": "c3", "value": 3 },
            { "alternative": "b", "criterion": "c1", "value": 4 },
            { "alternative": "b", "criterion": "c2", "value": 5 },
            { "alternative": "b", "criterion": "c3", "value": 6 }
        ]
    });
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::InvalidWeight);
}

#[test]
fn unknown_alternative_reference_rejected() {
    let mut payload = cost_quality_payload();
    payload["scores"][0]["alternative"] = json!("nonexistent");
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::UnknownReference);
}

#[test]
fn missing_score_entry_rejected_as_incomplete() {
    let mut payload = cost_quality_payload();
    payload["scores"].as_array_mut().unwrap().pop();
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::IncompleteScoreTable);
}

#[test]
fn duplicate_alternative_id_rejected() {
    let mut payload = cost_quality_payload();
    payload["alternatives"][1]["id"] = json!("A");
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::DuplicateIdentifier);
}

#[test]
fn rejections_expose_stable_codes_and_client_messages() {
    let mut payload = cost_quality_payload();
    payload["criteria"][0]["weight"] = json!(-0.6);
    let err = DecisionAnalyzer::new().analyze(&payload).unwrap_err();

    assert_eq!(err.kind().to_string(), "INVALID_WEIGHT");
    assert!(err.to_client_message().contains("non-negative"));
    // the full message keeps the offending value for server-side logs
    assert!(err.to_string().contains("-0.6"));
}

// =============================================================================
// Adversarial input never faults
// =============================================================================

#[test]
fn hostile_shapes_return_structured_rejections() {
    init_tracing();
    let analyzer = DecisionAnalyzer::new();
    let hostile: Vec<Value> = vec![
        json!(null),
        json!(42),
        json!("just a string"),
        json!([]),
        json!({ "alternatives": null, "criteria": 7, "scores": "x" }),
        json!({ "alternatives": [null], "criteria": [[]], "scores": [true] }),
        json!({
            "alternatives": [{ "id": {}, "label": [] }],
            "criteria": [{ "name": "c", "weight": true, "direction": 9 }],
            "scores": [{ "alternative": 1, "criterion": 2, "value": "v" }]
        }),
        json!({ "alternatives": [], "criteria": [], "scores": [] }),
    ];

    for payload in hostile {
        let err = analyzer.analyze(&payload).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::MalformedInput, "{:?}", payload);
    }
}

#[test]
fn extreme_finite_magnitudes_are_accepted_and_stay_finite() {
    let payload = json!({
        "alternatives": [
            { "id": "a", "label": "A" },
            { "id": "b", "label": "B" }
        ],
        "criteria": [
            { "name": "c1", "weight": 0.5, "direction": "maximize" },
            { "name": "c2", "weight": 0.5, "direction": "minimize" }
        ],
        "scores": [
            { "alternative": "a", "criterion": "c1", "value": 1e308 },
            { "alternative": "a", "criterion": "c2", "value": -1e308 },
            { "alternative": "b", "criterion": "c1", "value": -1e308 },
            { "alternative": "b", "criterion": "c2", "value": 1e308 }
        ]
    });

    let result = DecisionAnalyzer::new().analyze(&payload).unwrap();
    for ranked in &result.rankings {
        assert!(ranked.weighted_score.is_finite());
        for contribution in &ranked.contributions {
            assert!(contribution.normalized.is_finite());
            assert!(contribution.weighted.is_finite());
        }
    }
}

// =============================================================================
// Scale
// =============================================================================

#[test]
fn thousand_alternatives_rank_without_fault() {
    init_tracing();
    let alternatives: Vec<Value> = (0..1000)
        .map(|i| json!({ "id": format!("alt-{}", i), "label": format!("Alternative {}", i) }))
        .collect();
    let mut scores = Vec::with_capacity(3000);
    for i in 0..1000 {
        let id = format!("alt-{}", i);
        scores.push(json!({ "alternative": id, "criterion": "throughput", "value": (i * 37 % 997) as f64 }));
        scores.push(json!({ "alternative": id, "criterion": "latency", "value": (i * 61 % 499) as f64 }));
        scores.push(json!({ "alternative": id, "criterion": "cost", "value": (i * 13 % 251) as f64 }));
    }
    let payload = json!({
        "alternatives": alternatives,
        "criteria": [
            { "name": "throughput", "weight": 0.5, "direction": "maximize" },
            { "name": "latency", "weight": 0.3, "direction": "minimize" },
            { "name": "cost", "weight": 0.2, "direction": "minimize" }
        ],
        "scores": scores
    });

    let result = DecisionAnalyzer::new().analyze(&payload).unwrap();
    assert_eq!(result.rankings.len(), 1000);
    assert!(!result.winner_id.is_empty());

    // every alternative appears exactly once
    let mut ids: Vec<&str> = result
        .rankings
        .iter()
        .map(|r| r.alternative_id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 1000);

    // and the order is deterministic across runs
    let again = DecisionAnalyzer::new().analyze(&payload).unwrap();
    assert_eq!(result, again);
}
