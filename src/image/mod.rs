//! Placeholder image classifier. Produces a pseudo-random verdict with fixed
//! metrics; there is no image forensics behind it.

use crate::error::{Result, SentinelError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

const AI_DRAW_THRESHOLD: f64 = 0.7;
const AI_INTEGRITY: f64 = 0.3;
const HUMAN_INTEGRITY: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageMetrics {
    pub noise_analysis: f64,
    pub pattern_consistency: f64,
    pub metadata_integrity: f64,
}

impl Default for ImageMetrics {
    fn default() -> Self {
        Self {
            noise_analysis: 0.92,
            pattern_consistency: 0.88,
            metadata_integrity: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageVerdict {
    pub is_ai_generated: bool,
    pub confidence: f64,
    pub integrity_score: f64,
    pub metrics: ImageMetrics,
}

pub struct ImageDetector {
    rng: Mutex<StdRng>,
}

impl ImageDetector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible draws for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn analyze(&self, data: &[u8]) -> Result<ImageVerdict> {
        if data.is_empty() {
            return Err(SentinelError::InvalidInput("image data is empty".into()));
        }
        let (draw, spread) = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            (rng.gen::<f64>(), rng.gen::<f64>())
        };
        let is_ai_generated = draw > AI_DRAW_THRESHOLD;
        Ok(ImageVerdict {
            is_ai_generated,
            confidence: 0.85 + spread * 0.1,
            integrity_score: if is_ai_generated {
                AI_INTEGRITY
            } else {
                HUMAN_INTEGRITY
            },
            metrics: ImageMetrics::default(),
        })
    }
}

impl Default for ImageDetector {
    fn default() -> Self {
        Self::new()
    }
}
