//! Decision Core - layered multi-criteria decision analysis.
//!
//! Ingests an untrusted description of a decision problem and produces a
//! deterministic weighted-sum ranking, or a categorized rejection. Two
//! independent validation gates (the payload transformer and the matrix
//! constructor) guarantee that no input, however malformed, reaches numeric
//! logic or escapes as an unstructured fault.

pub mod application;
pub mod domain;
pub mod transform;

pub use application::{AnalysisOptions, DecisionAnalyzer};
pub use domain::analysis::RankedResult;
pub use domain::foundation::{Rejection, RejectionKind};
