//! Weighted feature sum squashed through a logistic curve.

use crate::config::ScoringConfig;
use crate::features::{FeatureVector, FEATURE_DIM};

#[derive(Debug, Clone)]
pub struct FallbackScorer {
    weights: [f32; FEATURE_DIM],
    midpoint: f64,
    steepness: f64,
    floor: f64,
    ceiling: f64,
}

impl FallbackScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            weights: config.fallback_weights,
            midpoint: config.fallback_midpoint,
            steepness: config.fallback_steepness,
            floor: config.fallback_floor,
            ceiling: config.fallback_ceiling,
        }
    }

    /// Dot product of features and weights; positions past either length count as zero.
    pub fn raw(&self, features: &FeatureVector) -> f64 {
        features
            .as_slice()
            .iter()
            .zip(self.weights.iter())
            .map(|(f, w)| {
                let f = if f.is_finite() { *f as f64 } else { 0.0 };
                f * *w as f64
            })
            .sum()
    }

    /// `1 / (1 + e^(-(raw - midpoint) * steepness))`, clamped to [floor, ceiling].
    pub fn score(&self, features: &FeatureVector) -> f64 {
        let raw = self.raw(features);
        let squashed = 1.0 / (1.0 + (-(raw - self.midpoint) * self.steepness).exp());
        squashed.clamp(self.floor, self.ceiling)
    }
}

impl Default for FallbackScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}
