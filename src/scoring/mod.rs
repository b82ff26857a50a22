//! Statistical heuristics and final score aggregation.

mod engine;
mod statistical;

pub use engine::{ScoringEngine, Verdict};
pub use statistical::StatisticalScore;
