//! Facade: text, image, and batch analysis plus status reporting.

use crate::config::SentinelConfig;
use crate::error::Result;
use crate::features::FeatureExtractor;
use crate::image::ImageDetector;
use crate::model::{ModelHandle, ModelScore, ModelState, ScoreSource};
use crate::patterns::{PatternMatcher, ScoreAccumulator};
use crate::report::{
    self, AnalysisMetadata, AnalysisResult, BatchFailure, BatchItem, ImageAnalysisResult,
};
use crate::scoring::{ScoringEngine, StatisticalScore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use uuid::Uuid;

const ENGINE_MODEL: &str = "Advanced AI Detection Suite";
const ENGINE_FALLBACK: &str = "Enhanced Statistical Analysis";
const ENGINE_IMAGE: &str = "Image Analysis (placeholder)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub initialized: bool,
    pub model_state: ModelState,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub version: String,
    pub status: SystemStatus,
    pub timestamp: String,
    pub platform: String,
    pub arch: String,
    pub backend: String,
}

fn detect_platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "android") {
        "android"
    } else {
        "unknown"
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

fn digest(text: &str) -> String {
    let mut h = Sha256::new();
    h.update(text.as_bytes());
    format!("{:x}", h.finalize())
}

pub struct Sentinel {
    config: SentinelConfig,
    extractor: FeatureExtractor,
    matcher: PatternMatcher,
    engine: ScoringEngine,
    model: ModelHandle,
    images: ImageDetector,
}

impl Sentinel {
    /// Sentinel with the ONNX model described by `config.model`.
    pub fn new(config: SentinelConfig) -> Self {
        let model = ModelHandle::from_config(&config.model, &config.scoring);
        Self::with_model(config, model)
    }

    /// Sentinel around a caller-supplied model handle.
    pub fn with_model(config: SentinelConfig, model: ModelHandle) -> Self {
        info!(version = %config.version, "sentinel created");
        Self {
            extractor: FeatureExtractor::new(config.detection.clone()),
            matcher: PatternMatcher::new(),
            engine: ScoringEngine::new(config.scoring.clone()),
            model,
            images: ImageDetector::new(),
            config,
        }
    }

    /// Replace the image detector (e.g. a seeded one).
    pub fn with_image_detector(mut self, images: ImageDetector) -> Self {
        self.images = images;
        self
    }

    /// Warm up the model. Safe to skip; analysis initializes on first use.
    pub async fn initialize(&self) -> bool {
        let ready = self.model.initialize().await;
        info!(ready, backend = self.model.backend(), "sentinel initialized");
        ready
    }

    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        let (features, stats) = self.extractor.extract_with_stats(text)?;

        let mut acc = ScoreAccumulator::new();
        let pattern_hits = self.matcher.apply(text, &mut acc);

        let statistical = StatisticalScore::from_text(text);
        statistical.blend(&mut acc, self.config.scoring.statistical_blend);

        let model_score = if self.extractor.has_model_signal(&stats) {
            self.model.score(&features).await
        } else {
            debug!(words = stats.word_count, "too few words for model; using fallback scorer");
            ModelScore {
                value: self.model.fallback_score(&features),
                source: ScoreSource::Fallback,
            }
        };
        self.engine.add_model_score(&mut acc, &model_score);

        let verdict = self.engine.verdict(&acc);
        let total_reasons = acc.reasons.len();
        let mut reasons = acc.reasons;
        reasons.truncate(self.config.detection.max_reasons);

        let engine = if self.model.is_ready() {
            ENGINE_MODEL
        } else {
            ENGINE_FALLBACK
        };

        let result = AnalysisResult {
            id: Uuid::new_v4().to_string(),
            integrity_score: verdict.integrity_score,
            is_ai_generated: verdict.is_ai_generated,
            confidence: verdict.confidence,
            reasons,
            model_score: model_score.value,
            metadata: AnalysisMetadata {
                text_length: stats.char_count,
                word_count: stats.word_count,
                sentence_count: stats.sentence_count,
                word_variety: statistical.word_variety,
                sentence_complexity: statistical.sentence_complexity,
                punctuation_diversity: statistical.punctuation_diversity,
                ai_probability: statistical.ai_probability,
                human_probability: statistical.human_probability,
                ai_score: verdict.normalized_ai,
                human_score: verdict.normalized_human,
                pattern_hits,
                total_reasons,
                model_source: model_score.source,
                features: features.values,
                content_digest: digest(text),
            },
            timestamp: now_iso(),
            version: self.config.version.clone(),
            engine: engine.to_string(),
        };

        debug!(
            id = %result.id,
            ai = result.is_ai_generated,
            confidence = result.confidence,
            integrity = result.integrity_score,
            model_source = ?model_score.source,
            "text analyzed"
        );
        Ok(result)
    }

    pub fn analyze_image(&self, data: &[u8]) -> Result<ImageAnalysisResult> {
        let verdict = self.images.analyze(data)?;
        Ok(ImageAnalysisResult {
            id: Uuid::new_v4().to_string(),
            integrity_score: verdict.integrity_score,
            is_ai_generated: verdict.is_ai_generated,
            confidence: verdict.confidence,
            metrics: verdict.metrics,
            byte_length: data.len(),
            timestamp: now_iso(),
            version: self.config.version.clone(),
            engine: ENGINE_IMAGE.to_string(),
        })
    }

    /// Sequential; one output per input, failures recorded in place.
    pub async fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<BatchItem> {
        let mut out = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            let text = text.as_ref();
            match self.analyze_text(text).await {
                Ok(r) => out.push(BatchItem::Analyzed(r)),
                Err(e) => {
                    warn!(index, error = %e, "batch item failed");
                    out.push(BatchItem::Failed(BatchFailure {
                        index,
                        error: e.to_string(),
                        preview: report::preview(text, self.config.detection.batch_preview_chars),
                        timestamp: now_iso(),
                    }));
                }
            }
        }
        let failed = out.iter().filter(|i| !i.is_ok()).count();
        info!(total = out.len(), failed, "batch analyzed");
        out
    }

    pub fn generate_certificate(&self, result: &AnalysisResult) -> String {
        report::generate_certificate(result)
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    pub fn status(&self) -> SystemStatus {
        let ready = self.model.is_ready();
        let mut features = vec![
            "Advanced Pattern Recognition".to_string(),
            "Statistical Text Analysis".to_string(),
        ];
        features.push(if ready {
            "Neural Model AI Detection".to_string()
        } else {
            "Enhanced Fallback Mode".to_string()
        });
        features.push("Real-time Processing".to_string());
        features.push("Multi-layer Verification".to_string());
        SystemStatus {
            initialized: ready,
            model_state: self.model.state(),
            features,
        }
    }

    pub fn system_info(&self) -> SystemInfo {
        SystemInfo {
            version: self.config.version.clone(),
            status: self.status(),
            timestamp: now_iso(),
            platform: detect_platform().to_string(),
            arch: std::env::consts::ARCH.to_string(),
            backend: self.model.backend().to_string(),
        }
    }

    pub fn config(&self) -> &SentinelConfig {
        &self.config
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }
}
