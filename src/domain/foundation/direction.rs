//! Direction value object - which way a criterion points.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Rejection;

/// Optimization direction of a criterion.
///
/// For `Minimize` criteria the normalized score is inverted before weighting,
/// so a higher weighted score always means "better".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Maximize,
    Minimize,
}

impl Direction {
    /// Parses a direction from its wire form, returning error for anything
    /// other than "maximize" or "minimize".
    pub fn try_from_str(value: &str, field: &str) -> Result<Self, Rejection> {
        match value {
            "maximize" => Ok(Direction::Maximize),
            "minimize" => Ok(Direction::Minimize),
            other => Err(Rejection::InvalidType {
                field: field.to_string(),
                expected: "\"maximize\" or \"minimize\"".to_string(),
                actual: format!("\"{}\"", other),
            }),
        }
    }

    /// Applies the direction to a normalized score in [0, 1].
    pub fn adjust(&self, normalized: f64) -> f64 {
        match self {
            Direction::Maximize => normalized,
            Direction::Minimize => 1.0 - normalized,
        }
    }

    /// Returns the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Maximize => "maximize",
            Direction::Minimize => "minimize",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
