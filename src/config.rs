//! Sentinel configuration. Passed explicitly at construction; nothing here is global.

use crate::error::{Result, SentinelError};
use crate::features::FEATURE_DIM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Version string stamped on every result
    pub version: String,
    /// Input validation and result shaping
    pub detection: DetectionConfig,
    /// Blend weights and fallback model constants
    pub scoring: ScoringConfig,
    /// External predictor
    pub model: ModelConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum trimmed length in characters; shorter input is rejected
    pub min_text_chars: usize,
    /// Below this many words the external model is skipped for the fallback scorer
    pub min_words: usize,
    /// Reasons kept on a result, in generation order
    pub max_reasons: usize,
    /// Characters of the input echoed in a failed batch record
    pub batch_preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Share of the statistical probabilities added to the running scores
    pub statistical_blend: f64,
    /// Share of the model score added to the running scores
    pub model_blend: f64,
    /// Fallback scorer: per-feature weights
    pub fallback_weights: [f32; FEATURE_DIM],
    /// Fallback scorer: logistic midpoint
    pub fallback_midpoint: f64,
    /// Fallback scorer: logistic steepness
    pub fallback_steepness: f64,
    pub fallback_floor: f64,
    pub fallback_ceiling: f64,
    /// Lowest integrity reported for AI-classified text
    pub integrity_floor: f64,
    /// Highest integrity reported for human-classified text
    pub integrity_ceiling: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// When false the handle never loads a predictor and always falls back
    pub enabled: bool,
    /// Path to the ONNX classifier (input [1, 10] f32, output [1, 1] f32)
    pub model_path: PathBuf,
    /// Intra-op threads for the ONNX session
    pub intra_threads: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            detection: DetectionConfig::default(),
            scoring: ScoringConfig::default(),
            model: ModelConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 15,
            min_words: 3,
            max_reasons: 10,
            batch_preview_chars: 50,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            statistical_blend: 0.3,
            model_blend: 0.4,
            fallback_weights: [0.16, 0.13, 0.11, 0.09, 0.15, 0.08, 0.07, 0.12, 0.05, 0.08],
            fallback_midpoint: 0.55,
            fallback_steepness: 8.0,
            fallback_floor: 0.02,
            fallback_ceiling: 0.98,
            integrity_floor: 0.1,
            integrity_ceiling: 0.99,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_path: PathBuf::from("models/text-classifier.onnx"),
            intra_threads: 1,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl SentinelConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that fails to parse is reported and replaced by defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(SentinelError::from)
            .and_then(|data| Self::from_json_str(&data))
        {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config unreadable; using defaults");
                Self::default()
            }
        }
    }

    /// Strict parse plus range checks.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: SentinelConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        for (name, v) in [
            ("statistical_blend", s.statistical_blend),
            ("model_blend", s.model_blend),
            ("fallback_floor", s.fallback_floor),
            ("fallback_ceiling", s.fallback_ceiling),
            ("integrity_floor", s.integrity_floor),
            ("integrity_ceiling", s.integrity_ceiling),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(SentinelError::Config(format!("{name} must be in [0, 1], got {v}")));
            }
        }
        if s.fallback_floor > s.fallback_ceiling {
            return Err(SentinelError::Config("fallback_floor exceeds fallback_ceiling".into()));
        }
        if s.fallback_weights.iter().any(|w| *w < 0.0) {
            return Err(SentinelError::Config("fallback_weights must be non-negative".into()));
        }
        if self.detection.min_text_chars == 0 {
            return Err(SentinelError::Config("min_text_chars must be at least 1".into()));
        }
        Ok(())
    }
}
