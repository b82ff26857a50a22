//! Owns the predictor lifecycle: uninitialized → initializing → ready | failed.
//! Initialization runs at most once per handle; a failure pins the handle to the
//! fallback scorer for its lifetime.

use super::{FallbackScorer, ModelScore, OnnxPredictor, Predictor, ScoreSource};
use crate::config::{ModelConfig, ScoringConfig};
use crate::error::ModelError;
use crate::features::{FeatureVector, FEATURE_DIM};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

enum Loader {
    Onnx(ModelConfig),
    Injected(Arc<dyn Predictor>),
    Disabled,
}

pub struct ModelHandle {
    loader: Loader,
    predictor: OnceCell<Option<Arc<dyn Predictor>>>,
    initializing: AtomicBool,
    fallback: FallbackScorer,
}

impl ModelHandle {
    fn with_loader(loader: Loader, scoring: &ScoringConfig) -> Self {
        Self {
            loader,
            predictor: OnceCell::new(),
            initializing: AtomicBool::new(false),
            fallback: FallbackScorer::new(scoring),
        }
    }

    /// ONNX-backed handle; the session is built on first use.
    pub fn from_config(model: &ModelConfig, scoring: &ScoringConfig) -> Self {
        if model.enabled {
            Self::with_loader(Loader::Onnx(model.clone()), scoring)
        } else {
            Self::disabled(scoring)
        }
    }

    /// Handle around an already-constructed predictor.
    pub fn with_predictor(predictor: Arc<dyn Predictor>, scoring: &ScoringConfig) -> Self {
        Self::with_loader(Loader::Injected(predictor), scoring)
    }

    /// Handle that always uses the fallback scorer.
    pub fn disabled(scoring: &ScoringConfig) -> Self {
        Self::with_loader(Loader::Disabled, scoring)
    }

    /// Bring the predictor up. Idempotent; concurrent callers share one attempt.
    /// Returns whether a predictor is ready.
    pub async fn initialize(&self) -> bool {
        self.predictor
            .get_or_init(|| self.load_tracked())
            .await
            .is_some()
    }

    async fn load_tracked(&self) -> Option<Arc<dyn Predictor>> {
        let _flag = InitFlag::raise(&self.initializing);
        self.load().await
    }

    async fn load(&self) -> Option<Arc<dyn Predictor>> {
        match &self.loader {
            Loader::Disabled => {
                info!("model disabled; using fallback scorer");
                None
            }
            Loader::Injected(p) => {
                info!(backend = p.backend(), "predictor ready");
                Some(Arc::clone(p))
            }
            Loader::Onnx(config) => {
                let config = config.clone();
                match tokio::task::spawn_blocking(move || OnnxPredictor::load(&config)).await {
                    Ok(Ok(p)) => {
                        info!(path = %p.path().display(), "onnx model ready");
                        Some(Arc::new(p) as Arc<dyn Predictor>)
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "model unavailable; using fallback scorer");
                        None
                    }
                    Err(e) => {
                        warn!(error = %e, "model loader aborted; using fallback scorer");
                        None
                    }
                }
            }
        }
    }

    pub fn state(&self) -> ModelState {
        match self.predictor.get() {
            Some(Some(_)) => ModelState::Ready,
            Some(None) => ModelState::Failed,
            None if self.initializing.load(Ordering::Acquire) => ModelState::Initializing,
            None => ModelState::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ModelState::Ready
    }

    /// Backend label: the predictor's when ready, otherwise "fallback".
    pub fn backend(&self) -> &str {
        match self.predictor.get() {
            Some(Some(p)) => p.backend(),
            _ => "fallback",
        }
    }

    fn ready_predictor(&self) -> Result<&Arc<dyn Predictor>, ModelError> {
        self.predictor
            .get()
            .and_then(|p| p.as_ref())
            .ok_or_else(|| ModelError::Unavailable("predictor not ready".into()))
    }

    /// Predictor output only; no fallback. Runs on the calling thread.
    /// Errors describe why the fallback would be used.
    pub fn predict(&self, features: &FeatureVector) -> Result<f32, ModelError> {
        checked_predict(self.ready_predictor()?.as_ref(), features)
    }

    async fn predict_blocking(&self, features: &FeatureVector) -> Result<f32, ModelError> {
        let predictor = Arc::clone(self.ready_predictor()?);
        let features = features.clone();
        tokio::task::spawn_blocking(move || checked_predict(predictor.as_ref(), &features))
            .await
            .map_err(|e| ModelError::PredictionFailed(format!("prediction task aborted: {e}")))?
    }

    /// Deterministic fallback score.
    pub fn fallback_score(&self, features: &FeatureVector) -> f64 {
        self.fallback.score(features)
    }

    /// AI-likelihood in [0, 1]. Waits for initialization; inference runs on the
    /// blocking pool and any model fault falls back for this call only.
    pub async fn score(&self, features: &FeatureVector) -> ModelScore {
        self.initialize().await;
        match self.predict_blocking(features).await {
            Ok(v) => ModelScore {
                value: v as f64,
                source: ScoreSource::Model,
            },
            Err(e) => {
                match &e {
                    ModelError::Unavailable(_) => {}
                    ModelError::InvalidFeatureVector { .. } => {
                        debug!(error = %e, "feature vector rejected; using fallback scorer")
                    }
                    _ => warn!(error = %e, "prediction failed; using fallback scorer"),
                }
                ModelScore {
                    value: self.fallback.score(features),
                    source: ScoreSource::Fallback,
                }
            }
        }
    }
}

fn checked_predict(predictor: &dyn Predictor, features: &FeatureVector) -> Result<f32, ModelError> {
    if features.len() != FEATURE_DIM {
        return Err(ModelError::InvalidFeatureVector {
            expected: FEATURE_DIM,
            actual: features.len(),
        });
    }
    let value = predictor.predict(features).map_err(|e| match e {
        ModelError::PredictionFailed(_) => e,
        other => ModelError::PredictionFailed(other.to_string()),
    })?;
    if !value.is_finite() {
        return Err(ModelError::PredictionFailed(format!("non-finite output {value}")));
    }
    Ok(value.clamp(0.0, 1.0))
}

/// Holds `initializing` high until dropped, including when the init future is cancelled.
struct InitFlag<'a>(&'a AtomicBool);

impl<'a> InitFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for InitFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancelled_init_clears_initializing() {
        let handle = ModelHandle::disabled(&ScoringConfig::default());
        let pending_load = async {
            let _flag = InitFlag::raise(&handle.initializing);
            std::future::pending::<()>().await;
        };
        tokio::select! {
            biased;
            _ = pending_load => unreachable!(),
            _ = async {} => {}
        }
        assert_eq!(handle.state(), ModelState::Uninitialized);

        assert!(!handle.initialize().await);
        assert_eq!(handle.state(), ModelState::Failed);
    }

    #[test]
    fn flag_reports_initializing_while_held() {
        let handle = ModelHandle::disabled(&ScoringConfig::default());
        {
            let _flag = InitFlag::raise(&handle.initializing);
            assert_eq!(handle.state(), ModelState::Initializing);
        }
        assert_eq!(handle.state(), ModelState::Uninitialized);
    }
}
