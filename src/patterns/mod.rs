//! Regex authorship rules and the per-call score accumulator.

mod rules;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Ai,
    Human,
}

impl Polarity {
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Ai => "AI",
            Polarity::Human => "Human",
        }
    }
}

/// A compiled rule. Case-insensitive.
#[derive(Debug)]
pub struct PatternRule {
    pub name: &'static str,
    pub regex: Regex,
    pub polarity: Polarity,
    pub base_weight: f64,
    pub per_match_weight: f64,
}

impl PatternRule {
    /// Increment contributed by `n` matches.
    pub fn weight_for(&self, n: usize) -> f64 {
        if n == 0 {
            0.0
        } else {
            self.base_weight + n as f64 * self.per_match_weight
        }
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

static RULE_TABLE: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    rules::RULES
        .iter()
        .map(|spec| PatternRule {
            name: spec.name,
            regex: RegexBuilder::new(spec.source)
                .case_insensitive(true)
                .build()
                .unwrap(),
            polarity: spec.polarity,
            base_weight: spec.base_weight,
            per_match_weight: spec.per_match_weight,
        })
        .collect()
});

/// Running AI/human scores and reasons for one analysis call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    pub ai_score: f64,
    pub human_score: f64,
    pub reasons: Vec<String>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to one side. Negative or non-finite increments are ignored.
    pub fn add(&mut self, polarity: Polarity, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        match polarity {
            Polarity::Ai => self.ai_score += amount,
            Polarity::Human => self.human_score += amount,
        }
    }

    pub fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }
}

/// One rule that fired.
#[derive(Debug, Clone, Serialize)]
pub struct PatternHit {
    pub rule: &'static str,
    pub source: String,
    pub polarity: Polarity,
    pub matches: usize,
    pub weight: f64,
}

impl PatternHit {
    pub fn reason(&self) -> String {
        format!("{} pattern: {} ({}x)", self.polarity.label(), self.source, self.matches)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn rules(&self) -> &'static [PatternRule] {
        RULE_TABLE.as_slice()
    }

    /// Rules that match, in table order.
    pub fn matches(&self, text: &str) -> Vec<PatternHit> {
        self.rules()
            .iter()
            .filter_map(|rule| {
                let n = rule.regex.find_iter(text).count();
                (n > 0).then(|| PatternHit {
                    rule: rule.name,
                    source: rule.source().to_string(),
                    polarity: rule.polarity,
                    matches: n,
                    weight: rule.weight_for(n),
                })
            })
            .collect()
    }

    /// Accumulate every hit's weight and reason. Returns the hit count.
    pub fn apply(&self, text: &str, acc: &mut ScoreAccumulator) -> usize {
        let hits = self.matches(text);
        for hit in &hits {
            acc.add(hit.polarity, hit.weight);
            acc.reason(hit.reason());
        }
        hits.len()
    }
}
