//! Criterion - one weighted dimension of comparison.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Direction;

/// A weighted comparison dimension with an optimization direction.
///
/// The weight is a fraction of total importance. Weight domain rules
/// (non-negative, finite, sum within tolerance of 1.0 across all criteria)
/// are enforced by `DecisionMatrix::new`, not here, so tests can probe the
/// matrix gate with invalid weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_holds_fields() {
        let c = Criterion::new("cost", 0.6, Direction::Minimize);
        assert_eq!(c.name, "cost");
        assert_eq!(c.weight, 0.6);
        assert_eq!(c.direction, Direction::Minimize);
    }

    #[test]
    fn criterion_serializes_direction_lowercase() {
        let c = Criterion::new("quality", 0.4, Direction::Maximize);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"direction\":\"maximize\""));
    }
}
