//! Application layer - composes the validation gates and the calculator.

mod analyze;

pub use analyze::{AnalysisOptions, DecisionAnalyzer};
