//! Analysis module - pure ranking services over a valid matrix.
//!
//! All functions here are stateless and total: a `DecisionMatrix` guarantees
//! every numeric precondition, so nothing in this module can fail. Results
//! are plain serializable values.
//!
//! # Components
//!
//! - `WeightedSumCalculator` - normalization, weighting, deterministic order
//! - `DominanceAnalyzer` - direction-aware dominance detection
//! - `SensitivityAnalyzer` - winner stability under weight perturbation

mod dominance;
mod ranked_result;
mod sensitivity;
mod weighted_sum;

pub use dominance::{DominanceAnalyzer, DominatedAlternative};
pub use ranked_result::{CriterionContribution, RankedAlternative, RankedResult};
pub use sensitivity::{CriterionSensitivity, SensitivityAnalyzer, SensitivityReport};
pub use weighted_sum::WeightedSumCalculator;
