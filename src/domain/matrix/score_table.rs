//! ScoreTable - the (alternative x criterion) score mapping.

use std::collections::HashMap;

use crate::domain::foundation::Rejection;

/// Mapping from (alternative id, criterion name) to a raw score.
///
/// The table itself only guarantees the absence of duplicate cells (enforced
/// by the builder). Completeness against a declared alternative/criterion set
/// is an invariant of `DecisionMatrix`, which owns the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    cells: HashMap<(String, String), f64>,
}

impl ScoreTable {
    /// Creates a builder for constructing a score table.
    pub fn builder() -> ScoreTableBuilder {
        ScoreTableBuilder::new()
    }

    /// Gets the score for an (alternative, criterion) pair.
    pub fn get(&self, alternative_id: &str, criterion: &str) -> Option<f64> {
        self.cells
            .get(&(alternative_id.to_string(), criterion.to_string()))
            .copied()
    }

    /// Returns true if the pair has a score.
    pub fn contains(&self, alternative_id: &str, criterion: &str) -> bool {
        self.cells
            .contains_key(&(alternative_id.to_string(), criterion.to_string()))
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over ((alternative id, criterion), score) cells.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &f64)> {
        self.cells.iter()
    }
}

/// Builder for `ScoreTable` that rejects duplicate cells at `build`.
#[derive(Debug, Default)]
pub struct ScoreTableBuilder {
    entries: Vec<(String, String, f64)>,
}

impl ScoreTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a score for an (alternative, criterion) pair.
    pub fn score(
        mut self,
        alternative_id: impl Into<String>,
        criterion: impl Into<String>,
        value: f64,
    ) -> Self {
        self.entries
            .push((alternative_id.into(), criterion.into(), value));
        self
    }

    /// Builds the table, rejecting duplicate (alternative, criterion) pairs.
    ///
    /// All duplicates are reported, not just the first.
    pub fn build(self) -> Result<ScoreTable, Rejection> {
        let mut cells: HashMap<(String, String), f64> = HashMap::with_capacity(self.entries.len());
        let mut duplicates = Vec::new();

        for (alternative_id, criterion, value) in self.entries {
            let key = (alternative_id, criterion);
            if cells.contains_key(&key) {
                duplicates.push(Rejection::DuplicateScore {
                    alternative_id: key.0.clone(),
                    criterion: key.1.clone(),
                });
            } else {
                cells.insert(key, value);
            }
        }

        match Rejection::collect(duplicates) {
            Some(rejection) => Err(rejection),
            None => Ok(ScoreTable { cells }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RejectionKind;

    #[test]
    fn empty_builder_builds_empty_table() {
        let table = ScoreTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn builder_adds_cells() {
        let table = ScoreTable::builder()
            .score("a", "cost", 10.0)
            .score("a", "quality", 5.0)
            .score("b", "cost", 5.0)
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a", "cost"), Some(10.0));
        assert_eq!(table.get("b", "cost"), Some(5.0));
        assert!(table.contains("a", "quality"));
    }

    #[test]
    fn get_returns_none_for_missing_pair() {
        let table = ScoreTable::builder().score("a", "cost", 1.0).build().unwrap();
        assert_eq!(table.get("b", "cost"), None);
        assert_eq!(table.get("a", "quality"), None);
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        let result = ScoreTable::builder()
            .score("a", "cost", 1.0)
            .score("a", "cost", 2.0)
            .build();

        let err = result.unwrap_err();
        assert_eq!(err.kind(), RejectionKind::IncompleteScoreTable);
        assert!(matches!(err, Rejection::DuplicateScore { .. }));
    }

    #[test]
    fn all_duplicates_are_reported() {
        let result = ScoreTable::builder()
            .score("a", "cost", 1.0)
            .score("a", "cost", 2.0)
            .score("b", "cost", 3.0)
            .score("b", "cost", 4.0)
            .build();

        let err = result.unwrap_err();
        assert!(err.is_multiple());
        assert_eq!(err.error_count(), 2);
    }

    #[test]
    fn ids_containing_separators_do_not_collide() {
        // "a:b" + "c" must stay distinct from "a" + "b:c"
        let table = ScoreTable::builder()
            .score("a:b", "c", 1.0)
            .score("a", "b:c", 2.0)
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a:b", "c"), Some(1.0));
        assert_eq!(table.get("a", "b:c"), Some(2.0));
    }
}
