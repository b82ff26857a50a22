//! Raw linguistic statistics over a single text.

use super::FEATURE_DIM;
use crate::text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

static SPECIAL_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{1F300}-\x{1F9FF}]").unwrap());

const PUNCTUATION: &[char] = &[
    '!', '?', ',', ';', ':', '\'', '"', '-', '(', ')', '{', '}', '[', ']', '—', '…',
];

/// Values used when a denominator is too small to be meaningful.
const DEFAULT_SENTENCE_COMPLEXITY: f32 = 0.45;
const DEFAULT_PUNCTUATION_DIVERSITY: f32 = 0.25;
const DEFAULT_CAPITALIZATION: f32 = 0.35;
const DEFAULT_REPETITION: f32 = 0.15;

const LENGTH_BASIS: f32 = 1200.0;
const WORDS_PER_SENTENCE_BASIS: f32 = 7.0;
const PUNCTUATION_DIVERSITY_GAIN: f32 = 1.8;
const LONG_WORD_CHARS: usize = 6;
const REPETITION_BASIS: f32 = 5.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinguisticStats {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub unique_words: usize,
    /// Marks from the extended punctuation set
    pub punctuation_count: usize,
    pub unique_punctuation: usize,
    /// Words longer than one char: Leading capital, rest lowercase
    pub capitalized_words: usize,
    pub special_chars: usize,
    pub digits: usize,
    pub long_words: usize,
    pub emoji: usize,
    /// Highest occurrence count of any lowercase word
    pub max_word_repeat: usize,
}

impl LinguisticStats {
    pub fn from_text(input: &str) -> Self {
        let clean = input.trim();
        let words = text::words(clean);
        let mut s = LinguisticStats {
            char_count: text::char_len(clean),
            word_count: words.len(),
            sentence_count: text::sentences(clean).len(),
            ..Default::default()
        };

        let mut counts: HashMap<String, usize> = HashMap::new();
        for w in &words {
            *counts.entry(w.to_lowercase()).or_insert(0) += 1;
            if is_capitalized(w) {
                s.capitalized_words += 1;
            }
            if w.chars().count() > LONG_WORD_CHARS {
                s.long_words += 1;
            }
        }
        s.unique_words = counts.len();
        s.max_word_repeat = counts.values().copied().max().unwrap_or(0);

        let marks: Vec<char> = clean.chars().filter(|c| PUNCTUATION.contains(c)).collect();
        s.punctuation_count = marks.len();
        s.unique_punctuation = marks.iter().collect::<HashSet<_>>().len();

        s.special_chars = SPECIAL_CHAR_RE.find_iter(clean).count();
        s.digits = clean.chars().filter(|c| c.is_ascii_digit()).count();
        s.emoji = EMOJI_RE.find_iter(clean).count();
        s
    }

    /// Encode to the fixed-dim vector: clamped to [0, 1], rounded to 4 decimals.
    pub fn to_vector(&self) -> [f32; FEATURE_DIM] {
        let words = self.word_count.max(1) as f32;
        let chars = self.char_count.max(1) as f32;

        let raw: [f32; FEATURE_DIM] = [
            self.char_count as f32 / LENGTH_BASIS,
            if self.sentence_count > 0 {
                self.word_count as f32 / self.sentence_count as f32 / WORDS_PER_SENTENCE_BASIS
            } else {
                DEFAULT_SENTENCE_COMPLEXITY
            },
            if self.punctuation_count < 2 {
                DEFAULT_PUNCTUATION_DIVERSITY
            } else {
                self.unique_punctuation as f32 / self.punctuation_count as f32
                    * PUNCTUATION_DIVERSITY_GAIN
            },
            if self.word_count < 4 {
                DEFAULT_CAPITALIZATION
            } else {
                self.capitalized_words as f32 / words
            },
            self.unique_words as f32 / words,
            self.special_chars as f32 / chars,
            self.digits as f32 / chars,
            self.long_words as f32 / words,
            self.emoji as f32 / words,
            if self.word_count < 8 {
                DEFAULT_REPETITION
            } else {
                self.max_word_repeat as f32 / REPETITION_BASIS
            },
        ];
        raw.map(normalize)
    }
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    !rest.is_empty() && !first.is_lowercase() && rest.to_lowercase() == rest
}

fn normalize(v: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    (v.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization_needs_leading_capital_and_lower_rest() {
        assert!(is_capitalized("Hello"));
        assert!(is_capitalized("Sorry,"));
        assert!(!is_capitalized("AI"));
        assert!(!is_capitalized("I"));
        assert!(!is_capitalized("hello"));
    }

    #[test]
    fn normalize_rounds_to_four_places() {
        assert_eq!(normalize(0.123456), 0.1235);
        assert_eq!(normalize(1.7), 1.0);
        assert_eq!(normalize(-0.2), 0.0);
        assert_eq!(normalize(f32::NAN), 0.0);
    }

    #[test]
    fn short_texts_use_default_ratios() {
        let v = LinguisticStats::from_text("one two three").to_vector();
        assert_eq!(v[2], DEFAULT_PUNCTUATION_DIVERSITY);
        assert_eq!(v[3], DEFAULT_CAPITALIZATION);
        assert_eq!(v[9], DEFAULT_REPETITION);
    }
}
