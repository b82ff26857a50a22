//! Linguistic feature extraction: text → stats → normalized 10-dim vector.

mod linguistic;
mod pipeline;

pub use linguistic::LinguisticStats;
pub use pipeline::FeatureExtractor;

use serde::{Deserialize, Serialize};

/// Number of features the model consumes.
pub const FEATURE_DIM: usize = 10;

/// Feature names by position.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "text_length",
    "sentence_complexity",
    "punctuation_diversity",
    "capitalization_consistency",
    "vocabulary_richness",
    "special_char_density",
    "digit_density",
    "long_word_ratio",
    "emoji_density",
    "lexical_repetition",
];

/// Fixed-size feature vector for model input. Values in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: Vec<f32>,
    pub ts: i64,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>, ts: i64) -> Self {
        Self { values, ts }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value by feature name, if the vector is full-length.
    pub fn get(&self, name: &str) -> Option<f32> {
        let idx = FEATURE_NAMES.iter().position(|n| *n == name)?;
        self.values.get(idx).copied()
    }

    /// Lexical repetition (position 10).
    pub fn lexical_repetition(&self) -> Option<f32> {
        self.values.get(9).copied()
    }
}
