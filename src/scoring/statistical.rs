//! Word/sentence/punctuation heuristics turned into two clamped probabilities.

use crate::patterns::{Polarity, ScoreAccumulator};
use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MARKS: &[char] = &['!', '?', ',', ';', ':', '\'', '"', '-'];

const AI_PROBABILITY_CAP: f64 = 0.9;
const HUMAN_PROBABILITY_CAP: f64 = 0.95;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticalScore {
    pub word_variety: f64,
    pub sentence_complexity: f64,
    pub punctuation_diversity: f64,
    pub ai_probability: f64,
    pub human_probability: f64,
}

impl StatisticalScore {
    pub fn from_text(input: &str) -> Self {
        let words = text::words(input);
        let word_count = words.len().max(1) as f64;
        let sentence_count = text::sentences(input).len().max(1) as f64;

        let distinct = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>()
            .len() as f64;
        let word_variety = distinct / word_count;
        let sentence_complexity = words.len() as f64 / sentence_count;
        let punctuation_diversity = punctuation_diversity(input);

        Self {
            word_variety,
            sentence_complexity,
            punctuation_diversity,
            ai_probability: (word_variety * 0.7 + sentence_complexity * 0.2)
                .clamp(0.0, AI_PROBABILITY_CAP),
            human_probability: (punctuation_diversity * 0.6 + (1.0 - word_variety) * 0.4)
                .clamp(0.0, HUMAN_PROBABILITY_CAP),
        }
    }

    /// Blend both probabilities into the running scores.
    pub fn blend(&self, acc: &mut ScoreAccumulator, weight: f64) {
        acc.add(Polarity::Ai, self.ai_probability * weight);
        acc.add(Polarity::Human, self.human_probability * weight);
    }
}

fn punctuation_diversity(input: &str) -> f64 {
    let marks: Vec<char> = input.chars().filter(|c| MARKS.contains(c)).collect();
    if marks.is_empty() {
        return 0.0;
    }
    marks.iter().collect::<HashSet<_>>().len() as f64 / marks.len() as f64
}
