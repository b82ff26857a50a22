//! Tokenization shared by the feature extractor and the statistical scorer.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Whitespace-separated words of the trimmed text.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Sentence pieces split on runs of terminal punctuation; blank pieces dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(text.trim())
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
