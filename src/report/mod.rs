//! Public result shapes and the text certificate.

mod certificate;

pub use certificate::generate_certificate;

use crate::image::ImageMetrics;
use crate::model::ScoreSource;
use serde::{Deserialize, Serialize};

/// Result of analyzing one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub integrity_score: f64,
    pub is_ai_generated: bool,
    pub confidence: f64,
    /// First reasons in generation order (capped)
    pub reasons: Vec<String>,
    pub model_score: f64,
    pub metadata: AnalysisMetadata,
    pub timestamp: String,
    pub version: String,
    pub engine: String,
}

/// Derived statistics behind a text result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub word_variety: f64,
    pub sentence_complexity: f64,
    pub punctuation_diversity: f64,
    pub ai_probability: f64,
    pub human_probability: f64,
    /// Normalized share of the AI side
    pub ai_score: f64,
    /// Normalized share of the human side
    pub human_score: f64,
    pub pattern_hits: usize,
    /// Reasons generated before capping
    pub total_reasons: usize,
    pub model_source: ScoreSource,
    pub features: Vec<f32>,
    /// SHA-256 of the analyzed text, hex
    pub content_digest: String,
}

/// Result of the image stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    pub id: String,
    pub integrity_score: f64,
    pub is_ai_generated: bool,
    pub confidence: f64,
    pub metrics: ImageMetrics,
    pub byte_length: usize,
    pub timestamp: String,
    pub version: String,
    pub engine: String,
}

/// Error record standing in for a failed batch input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub index: usize,
    pub error: String,
    pub preview: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Analyzed(AnalysisResult),
    Failed(BatchFailure),
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchItem::Analyzed(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            BatchItem::Analyzed(r) => Some(r),
            BatchItem::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&BatchFailure> {
        match self {
            BatchItem::Analyzed(_) => None,
            BatchItem::Failed(f) => Some(f),
        }
    }
}

/// First `max_chars` characters followed by "...".
pub fn preview(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}
