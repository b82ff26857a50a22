//! Model scoring over the feature vector: an optional external predictor
//! (ONNX Runtime) with a deterministic closed-form fallback.

mod fallback;
mod handle;
mod onnx;

pub use fallback::FallbackScorer;
pub use handle::{ModelHandle, ModelState};
pub use onnx::OnnxPredictor;

use crate::error::ModelError;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// External AI-likelihood predictor: 10 features in, scalar in [0, 1] out.
/// `ModelHandle::score` calls it on tokio's blocking pool, so it may block.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f32, ModelError>;

    /// Short backend label for status reporting.
    fn backend(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub value: f64,
    pub source: ScoreSource,
}
