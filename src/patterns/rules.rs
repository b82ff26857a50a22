//! The authorship rule table. Order is evaluation order and reason order.

use super::Polarity;

/// Uncompiled rule: source pattern plus its weights.
pub(crate) struct RuleSpec {
    pub name: &'static str,
    pub source: &'static str,
    pub polarity: Polarity,
    pub base_weight: f64,
    pub per_match_weight: f64,
}

const fn ai(name: &'static str, source: &'static str, base: f64, per_match: f64) -> RuleSpec {
    RuleSpec {
        name,
        source,
        polarity: Polarity::Ai,
        base_weight: base,
        per_match_weight: per_match,
    }
}

const fn human(name: &'static str, source: &'static str, base: f64, per_match: f64) -> RuleSpec {
    RuleSpec {
        name,
        source,
        polarity: Polarity::Human,
        base_weight: base,
        per_match_weight: per_match,
    }
}

pub(crate) const RULES: &[RuleSpec] = &[
    // Self-identification and refusal boilerplate
    ai("ai_language_model", r"as an ai language model", 0.20, 0.10),
    ai("large_language_model", r"as a large language model", 0.20, 0.10),
    ai("i_am_an_ai", r"i am an ai", 0.20, 0.10),
    ai("refusal", r"i cannot|i'm unable", 0.20, 0.10),
    ai("training_data", r"trained on.*data", 0.20, 0.10),
    ai("generation", r"generate.*(response|text)", 0.20, 0.10),
    // Broader indicators
    ai("ai_identity", r"as (an|a) (ai|artificial intelligence)", 0.15, 0.0),
    ai("language_model", r"language model", 0.15, 0.0),
    ai("pattern_recognition", r"pattern.*recognition", 0.15, 0.0),
    ai("algorithmic", r"algorithm.*based", 0.15, 0.0),
    // Human slips and first-person voice
    human("slip", r"typo|mistake|oops|sorry", 0.15, 0.08),
    human("informal", r"slang|colloquial|informal", 0.15, 0.08),
    human(
        "personal_story",
        r"personal experience|i remember|my story|personal.*story|anecdote",
        0.15,
        0.08,
    ),
    human("first_person_stance", r"i think|i believe|i feel", 0.15, 0.08),
    human(
        "opinion",
        r"in my opinion|from my perspective|from my experience",
        0.12,
        0.0,
    ),
];
