//! ONNX Runtime inference for AI-likelihood. Input: [1, 10] f32, Output: score.
//! Load fails (and the handle falls back) if the model file is missing or invalid.

use super::Predictor;
use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::features::{FeatureVector, FEATURE_DIM};
use ndarray::{Array2, CowArray};
use ort::{Environment, GraphOptimizationLevel, Session, SessionBuilder, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

static ORT_ENV: OnceLock<Arc<Environment>> = OnceLock::new();

fn backend_err(e: impl std::fmt::Display) -> ModelError {
    ModelError::Backend(e.to_string())
}

fn prediction_err(e: impl std::fmt::Display) -> ModelError {
    ModelError::PredictionFailed(e.to_string())
}

fn environment() -> Result<Arc<Environment>, ModelError> {
    if let Some(env) = ORT_ENV.get() {
        return Ok(env.clone());
    }
    let env = Environment::builder()
        .with_name("alua-sentinel")
        .build()
        .map_err(backend_err)?
        .into_arc();
    Ok(ORT_ENV.get_or_init(|| env).clone())
}

pub struct OnnxPredictor {
    session: Session,
    path: PathBuf,
}

impl OnnxPredictor {
    /// Build a session from `config.model_path`. Blocking; call off the async executor.
    pub fn load(config: &ModelConfig) -> Result<Self, ModelError> {
        if !config.enabled {
            return Err(ModelError::Unavailable("model disabled by config".into()));
        }
        let path = config.model_path.clone();
        if !path.exists() {
            return Err(ModelError::Unavailable(format!(
                "model not found at {}",
                path.display()
            )));
        }

        let env = environment()?;
        let session = SessionBuilder::new(&env)
            .map_err(backend_err)?
            .with_optimization_level(GraphOptimizationLevel::Level1)
            .map_err(backend_err)?
            .with_intra_threads(config.intra_threads.max(1))
            .map_err(backend_err)?
            .with_model_from_file(&path)
            .map_err(backend_err)?;

        tracing::debug!(
            path = %path.display(),
            inputs = session.inputs.len(),
            outputs = session.outputs.len(),
            "onnx session built"
        );
        Ok(Self { session, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f32, ModelError> {
        if features.len() != FEATURE_DIM {
            return Err(ModelError::InvalidFeatureVector {
                expected: FEATURE_DIM,
                actual: features.len(),
            });
        }
        let arr = Array2::from_shape_vec((1, FEATURE_DIM), features.values.clone())
            .map_err(prediction_err)?;
        let input = CowArray::from(arr.into_dyn());
        let value = Value::from_array(self.session.allocator(), &input).map_err(prediction_err)?;
        let outputs = self.session.run(vec![value]).map_err(prediction_err)?;

        let out = outputs
            .first()
            .ok_or_else(|| ModelError::PredictionFailed("model produced no outputs".into()))?;
        let tensor = out.try_extract::<f32>().map_err(prediction_err)?;
        let score = tensor.view().iter().next().copied();
        score.ok_or_else(|| ModelError::PredictionFailed("empty output tensor".into()))
    }

    fn backend(&self) -> &str {
        "onnxruntime"
    }
}
