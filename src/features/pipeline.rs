//! Feature extraction pipeline: text → validation → linguistic stats → vector.

use super::{FeatureVector, LinguisticStats};
use crate::config::DetectionConfig;
use crate::error::{Result, SentinelError};
use crate::text;
use chrono::Utc;

pub struct FeatureExtractor {
    config: DetectionConfig,
}

impl FeatureExtractor {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Reject empty or too-short input; any word count is accepted.
    pub fn validate(&self, input: &str) -> Result<()> {
        let clean = input.trim();
        if clean.is_empty() {
            return Err(SentinelError::InvalidInput("text is empty".into()));
        }
        let len = text::char_len(clean);
        if len < self.config.min_text_chars {
            return Err(SentinelError::InputTooShort {
                len,
                min: self.config.min_text_chars,
            });
        }
        Ok(())
    }

    /// Validate and extract; returns the stats alongside the vector for reporting.
    pub fn extract_with_stats(&self, input: &str) -> Result<(FeatureVector, LinguisticStats)> {
        self.validate(input)?;
        let stats = LinguisticStats::from_text(input);
        let fv = FeatureVector::new(stats.to_vector().to_vec(), Utc::now().timestamp_millis());
        Ok((fv, stats))
    }

    pub fn extract(&self, input: &str) -> Result<FeatureVector> {
        self.extract_with_stats(input).map(|(fv, _)| fv)
    }

    /// Whether the vector carries enough words to be worth a model call.
    pub fn has_model_signal(&self, stats: &LinguisticStats) -> bool {
        stats.word_count >= self.config.min_words
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}
