//! Rejection types shared by both validation gates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six categories a rejection can fall into.
///
/// The calling layer maps these codes onto its own response classes, so the
/// set and the code strings are stable API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Wrong primitive type or missing required field.
    MalformedInput,
    /// A score entry references an undeclared alternative or criterion.
    UnknownReference,
    /// Repeated alternative id or criterion name.
    DuplicateIdentifier,
    /// Negative weight, or weight sum outside tolerance.
    InvalidWeight,
    /// NaN or infinity in a score or weight.
    NonFiniteValue,
    /// Missing or duplicate score entries.
    IncompleteScoreTable,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectionKind::MalformedInput => "MALFORMED_INPUT",
            RejectionKind::UnknownReference => "UNKNOWN_REFERENCE",
            RejectionKind::DuplicateIdentifier => "DUPLICATE_IDENTIFIER",
            RejectionKind::InvalidWeight => "INVALID_WEIGHT",
            RejectionKind::NonFiniteValue => "NON_FINITE_VALUE",
            RejectionKind::IncompleteScoreTable => "INCOMPLETE_SCORE_TABLE",
        };
        write!(f, "{}", s)
    }
}

/// A structured rejection of an invalid decision problem.
///
/// Every variant carries the field path it refers to, so the caller can point
/// at the offending part of the payload. `Multiple` aggregates all rejections
/// found within one validation gate.
#[derive(Debug, Clone, Error)]
pub enum Rejection {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Field {field} must not be empty")]
    EmptySection { field: String },

    #[error("Score entry {field} references unknown {referent} '{reference}'")]
    UnknownReference {
        field: String,
        referent: String,
        reference: String,
    },

    #[error("Duplicate identifier '{identifier}' at {field}")]
    DuplicateIdentifier { field: String, identifier: String },

    #[error("Negative weight at {field}: {value}")]
    NegativeWeight { field: String, value: f64 },

    #[error("Criterion weights must sum to 1.0 +/- {tolerance}, got {sum}")]
    WeightSumOutOfTolerance { sum: f64, tolerance: f64 },

    #[error("Non-finite value at {field}")]
    NonFinite { field: String },

    #[error("Missing score for alternative '{alternative_id}' on criterion '{criterion}'")]
    MissingScore {
        alternative_id: String,
        criterion: String,
    },

    #[error("Duplicate score entry for alternative '{alternative_id}' on criterion '{criterion}'")]
    DuplicateScore {
        alternative_id: String,
        criterion: String,
    },

    #[error("Rejections: {0:?}")]
    Multiple(Vec<Rejection>),
}

impl Rejection {
    /// Returns the taxonomy kind for this rejection.
    ///
    /// For `Multiple`, returns the kind of the first contained rejection.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::MissingField { .. }
            | Rejection::InvalidType { .. }
            | Rejection::EmptySection { .. } => RejectionKind::MalformedInput,
            Rejection::UnknownReference { .. } => RejectionKind::UnknownReference,
            Rejection::DuplicateIdentifier { .. } => RejectionKind::DuplicateIdentifier,
            Rejection::NegativeWeight { .. } | Rejection::WeightSumOutOfTolerance { .. } => {
                RejectionKind::InvalidWeight
            }
            Rejection::NonFinite { .. } => RejectionKind::NonFiniteValue,
            Rejection::MissingScore { .. } | Rejection::DuplicateScore { .. } => {
                RejectionKind::IncompleteScoreTable
            }
            Rejection::Multiple(errors) => errors
                .first()
                .map(Rejection::kind)
                .unwrap_or(RejectionKind::MalformedInput),
        }
    }

    /// Collapses a list of rejections into one.
    ///
    /// Returns `None` for an empty list, the single rejection for a list of
    /// one, and `Multiple` otherwise.
    pub fn collect(errors: Vec<Rejection>) -> Option<Rejection> {
        match errors.len() {
            0 => None,
            1 => errors.into_iter().next(),
            _ => Some(Rejection::Multiple(errors)),
        }
    }

    /// Returns true if this rejection aggregates several failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Rejection::Multiple(_))
    }

    /// Number of individual rejections carried.
    pub fn error_count(&self) -> usize {
        match self {
            Rejection::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }

    /// Iterates over the individual rejections, flattening `Multiple`.
    pub fn entries(&self) -> Vec<&Rejection> {
        match self {
            Rejection::Multiple(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }

    /// Convert to a client-safe message.
    ///
    /// Strips the observed value where exposing it would echo attacker input
    /// back verbatim; the full detail stays available through `Display`.
    pub fn to_client_message(&self) -> String {
        match self {
            Rejection::MissingField { field } => {
                format!("Missing required field: {}", field)
            }
            Rejection::InvalidType {
                field, expected, ..
            } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            Rejection::EmptySection { field } => {
                format!("Field '{}' must contain at least one entry", field)
            }
            Rejection::UnknownReference {
                field, referent, ..
            } => {
                format!("Field '{}' references an undeclared {}", field, referent)
            }
            Rejection::DuplicateIdentifier { field, .. } => {
                format!("Duplicate identifier at '{}'", field)
            }
            Rejection::NegativeWeight { field, .. } => {
                format!("Field '{}' must be a non-negative weight", field)
            }
            Rejection::WeightSumOutOfTolerance { tolerance, .. } => {
                format!("Criterion weights must sum to 1.0 within {}", tolerance)
            }
            Rejection::NonFinite { field } => {
                format!("Field '{}' must be a finite number", field)
            }
            Rejection::MissingScore {
                alternative_id,
                criterion,
            } => {
                format!(
                    "Score table is missing an entry for '{}' / '{}'",
                    alternative_id, criterion
                )
            }
            Rejection::DuplicateScore {
                alternative_id,
                criterion,
            } => {
                format!(
                    "Score table has a duplicate entry for '{}' / '{}'",
                    alternative_id, criterion
                )
            }
            Rejection::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }
}

impl PartialEq for Rejection {
    fn eq(&self, other: &Self) -> bool {
        // Compare by rendered message for testing purposes
        self.to_string() == other.to_string()
    }
}
