//! Transform module - structural validation of untrusted payloads.

mod problem_transformer;

pub use problem_transformer::ProblemTransformer;
