//! Matrix module - the immutable decision problem model.
//!
//! `DecisionMatrix` construction is the second validation gate, so any value
//! of this type is guaranteed internally consistent no matter which path
//! produced it.

mod alternative;
mod criterion;
mod decision_matrix;
mod score_table;

pub use alternative::Alternative;
pub use criterion::Criterion;
pub use decision_matrix::DecisionMatrix;
pub use score_table::{ScoreTable, ScoreTableBuilder};
