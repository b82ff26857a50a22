//! Combines pattern, statistical, and model contributions into a verdict.

use crate::config::ScoringConfig;
use crate::model::{ModelScore, ScoreSource};
use crate::patterns::{Polarity, ScoreAccumulator};
use serde::{Deserialize, Serialize};

/// Final classification for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_ai_generated: bool,
    pub confidence: f64,
    pub integrity_score: f64,
    pub normalized_ai: f64,
    pub normalized_human: f64,
}

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Fold the model score into the accumulator, with a reason.
    pub fn add_model_score(&self, acc: &mut ScoreAccumulator, score: &ModelScore) {
        let m = score.value.clamp(0.0, 1.0);
        acc.add(Polarity::Ai, m * self.config.model_blend);
        acc.add(Polarity::Human, (1.0 - m) * self.config.model_blend);
        let label = match score.source {
            ScoreSource::Model => "Model analysis score",
            ScoreSource::Fallback => "Statistical model score",
        };
        acc.reason(format!("{}: {:.1}%", label, m * 100.0));
    }

    pub fn verdict(&self, acc: &ScoreAccumulator) -> Verdict {
        let ai = acc.ai_score.max(0.0);
        let human = acc.human_score.max(0.0);
        let total = ai + human;
        let (normalized_ai, normalized_human) = if total > 0.0 {
            (ai / total, human / total)
        } else {
            (0.5, 0.5)
        };

        let is_ai_generated = normalized_ai > normalized_human;
        let confidence = (normalized_ai - normalized_human).abs();
        Verdict {
            is_ai_generated,
            confidence,
            integrity_score: self.integrity(is_ai_generated, confidence),
            normalized_ai,
            normalized_human,
        }
    }

    /// Pushed toward 0 when AI is detected and toward 1 otherwise.
    pub fn integrity(&self, is_ai_generated: bool, confidence: f64) -> f64 {
        if is_ai_generated {
            (0.5 - confidence / 2.0).max(self.config.integrity_floor)
        } else {
            (0.5 + confidence / 2.0).min(self.config.integrity_ceiling)
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
