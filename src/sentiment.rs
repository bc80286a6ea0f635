//! Sentiment classification: bucket a polarity score into a 3-way label and
//! package it with a bounded text preview.
//!
//! The actual polarity/subjectivity numbers come from a pluggable
//! [`TextSentimentScorer`]; the default [`LexiconScorer`] is a small
//! lexicon-based implementation. Any scorer producing polarity in [-1, 1]
//! and subjectivity in [0, 1] can be dropped in.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::preview;

/// Polarity strictly above this is classified Positive
pub const POSITIVE_THRESHOLD: f64 = 0.15;

/// Polarity strictly below this is classified Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

/// Characters kept in the text preview before the "..." marker
pub const TEXT_PREVIEW_CHARS: usize = 200;

/// Source of raw polarity/subjectivity scores.
///
/// Implementations must return polarity in [-1, 1] and subjectivity in
/// [0, 1], and be pure: identical text yields identical scores.
pub trait TextSentimentScorer {
    fn score(&self, text: &str) -> (f64, f64);
}

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Result of classifying one piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    /// Polarity in [-1, 1], rounded to 3 decimals
    pub polarity: f64,
    /// Subjectivity in [0, 1], rounded to 3 decimals
    pub subjectivity: f64,
    /// Label derived from the raw (pre-rounding) polarity
    pub sentiment: Sentiment,
    /// First 200 characters of the input, "..." appended when truncated
    pub text_preview: String,
}

/// Classify the sentiment of `text` using the given scorer.
///
/// Returns `None` for empty text. The label is derived from the raw
/// polarity, so a value like 0.1500001 is Positive even though it rounds
/// to 0.150 for display. Both boundaries are inclusive on the Neutral
/// side: exactly 0.15 and -0.15 classify as Neutral.
pub fn classify(text: &str, scorer: &dyn TextSentimentScorer) -> Option<SentimentResult> {
    if text.is_empty() {
        return None;
    }

    let (polarity, subjectivity) = scorer.score(text);

    let sentiment = if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    Some(SentimentResult {
        polarity: round3(polarity),
        subjectivity: round3(subjectivity),
        sentiment,
        text_preview: preview(text, TEXT_PREVIEW_CHARS),
    })
}

/// Round to 3 decimal places, half away from zero (`f64::round` semantics).
/// Pinned so results are reproducible across runs and platforms.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// How confidently the text sits in the Neutral band: 1 - |polarity|
pub fn neutral_confidence(polarity: f64) -> f64 {
    round3(1.0 - polarity.abs())
}

/// Qualitative band for a subjectivity score
pub fn subjectivity_band(subjectivity: f64) -> &'static str {
    if subjectivity > 0.7 {
        "Very Subjective"
    } else if subjectivity < 0.3 {
        "Objective"
    } else {
        "Mixed"
    }
}

/// Negation words flip and dampen the polarity of the following entry
const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot", "without"];

/// Boost/dampen multipliers for the following lexicon entry
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.3),
    ("totally", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.5),
    ("barely", 0.5),
    ("hardly", 0.5),
];

/// Lexicon-based sentiment scorer.
///
/// Each known word carries a (polarity, subjectivity) pair; a text's score
/// is the mean over the words found in it, with simple negation and
/// intensifier handling. Texts with no known words score (0.0, 0.0).
pub struct LexiconScorer {
    entries: HashMap<&'static str, (f64, f64)>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            entries: Self::build_lexicon(),
        }
    }

    fn build_lexicon() -> HashMap<&'static str, (f64, f64)> {
        [
            // Strongly positive
            ("excellent", (1.0, 1.0)),
            ("outstanding", (1.0, 0.9)),
            ("amazing", (0.9, 0.9)),
            ("wonderful", (0.9, 0.9)),
            ("fantastic", (0.9, 0.9)),
            ("superb", (0.9, 0.9)),
            ("perfect", (0.9, 0.9)),
            ("awesome", (0.9, 0.9)),
            ("best", (0.9, 0.6)),
            ("love", (0.6, 0.7)),
            ("loved", (0.6, 0.7)),
            ("delighted", (0.8, 0.9)),
            ("brilliant", (0.8, 0.9)),

            // Mildly positive
            ("good", (0.7, 0.6)),
            ("great", (0.8, 0.75)),
            ("nice", (0.6, 0.9)),
            ("happy", (0.8, 1.0)),
            ("pleased", (0.6, 0.8)),
            ("enjoy", (0.5, 0.5)),
            ("enjoyed", (0.5, 0.5)),
            ("helpful", (0.5, 0.4)),
            ("friendly", (0.5, 0.6)),
            ("reliable", (0.5, 0.4)),
            ("impressive", (0.7, 0.8)),
            ("beautiful", (0.8, 0.9)),
            ("easy", (0.4, 0.6)),
            ("fast", (0.3, 0.4)),
            ("improved", (0.4, 0.4)),
            ("improvement", (0.4, 0.4)),
            ("recommend", (0.5, 0.5)),
            ("recommended", (0.5, 0.5)),
            ("success", (0.6, 0.4)),
            ("successful", (0.6, 0.4)),
            ("strong", (0.4, 0.4)),
            ("solid", (0.4, 0.4)),
            ("positive", (0.4, 0.5)),
            ("win", (0.5, 0.4)),

            // Strongly negative
            ("terrible", (-1.0, 1.0)),
            ("awful", (-1.0, 1.0)),
            ("horrible", (-1.0, 1.0)),
            ("worst", (-1.0, 0.9)),
            ("hate", (-0.8, 0.9)),
            ("hated", (-0.8, 0.9)),
            ("disgusting", (-0.9, 1.0)),
            ("scam", (-0.8, 0.7)),
            ("useless", (-0.7, 0.7)),
            ("unacceptable", (-0.8, 0.8)),

            // Mildly negative
            ("bad", (-0.7, 0.65)),
            ("poor", (-0.6, 0.6)),
            ("disappointing", (-0.6, 0.7)),
            ("disappointed", (-0.6, 0.7)),
            ("slow", (-0.3, 0.4)),
            ("broken", (-0.4, 0.4)),
            ("buggy", (-0.5, 0.5)),
            ("waste", (-0.5, 0.5)),
            ("problem", (-0.3, 0.3)),
            ("problems", (-0.3, 0.3)),
            ("fail", (-0.5, 0.4)),
            ("failed", (-0.5, 0.4)),
            ("failure", (-0.5, 0.4)),
            ("error", (-0.3, 0.3)),
            ("errors", (-0.3, 0.3)),
            ("wrong", (-0.5, 0.5)),
            ("difficult", (-0.5, 0.6)),
            ("annoying", (-0.6, 0.8)),
            ("frustrating", (-0.6, 0.8)),
            ("expensive", (-0.3, 0.5)),
            ("weak", (-0.4, 0.4)),
            ("negative", (-0.4, 0.5)),
            ("crash", (-0.4, 0.3)),
            ("crashed", (-0.4, 0.3)),
            ("unreliable", (-0.5, 0.4)),
            ("ugly", (-0.7, 0.9)),
            ("sad", (-0.5, 1.0)),
            ("angry", (-0.5, 0.9)),
        ]
        .into_iter()
        .collect()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> (f64, f64) {
        let lowered = text.to_lowercase();

        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        let mut negated = false;
        let mut multiplier = 1.0;

        for word in lowered.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            if NEGATIONS.contains(&word) {
                negated = true;
                continue;
            }
            if let Some(&(_, boost)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
                multiplier *= boost;
                continue;
            }
            if let Some(&(polarity, subjectivity)) = self.entries.get(word) {
                // Negation flips and dampens rather than fully inverting
                let polarity = if negated { polarity * -0.5 } else { polarity };
                polarities.push((polarity * multiplier).clamp(-1.0, 1.0));
                subjectivities.push(subjectivity.clamp(0.0, 1.0));
                negated = false;
                multiplier = 1.0;
            }
        }

        if polarities.is_empty() {
            return (0.0, 0.0);
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;
        (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer returning fixed values, for pinning threshold behavior
    struct FixedScorer(f64, f64);

    impl TextSentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> (f64, f64) {
            (self.0, self.1)
        }
    }

    #[test]
    fn test_empty_text_returns_none() {
        assert_eq!(classify("", &FixedScorer(0.9, 0.5)), None);
    }

    #[test]
    fn test_polarity_boundaries() {
        let label = |p: f64| classify("x", &FixedScorer(p, 0.0)).unwrap().sentiment;
        assert_eq!(label(0.15), Sentiment::Neutral);
        assert_eq!(label(0.1500001), Sentiment::Positive);
        assert_eq!(label(-0.15), Sentiment::Neutral);
        assert_eq!(label(-0.1500001), Sentiment::Negative);
        assert_eq!(label(0.0), Sentiment::Neutral);
        assert_eq!(label(1.0), Sentiment::Positive);
        assert_eq!(label(-1.0), Sentiment::Negative);
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let result = classify("x", &FixedScorer(0.123449, 0.666666)).unwrap();
        assert_eq!(result.polarity, 0.123);
        assert_eq!(result.subjectivity, 0.667);
    }

    #[test]
    fn test_label_uses_raw_polarity_not_rounded() {
        // 0.1500001 rounds to 0.15 for display but still classifies Positive
        let result = classify("x", &FixedScorer(0.1500001, 0.0)).unwrap();
        assert_eq!(result.polarity, 0.15);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_preview_truncation_at_200() {
        let long: String = "a".repeat(250);
        let result = classify(&long, &FixedScorer(0.0, 0.0)).unwrap();
        assert_eq!(result.text_preview.chars().count(), 203);
        assert!(result.text_preview.ends_with("..."));

        let short: String = "b".repeat(150);
        let result = classify(&short, &FixedScorer(0.0, 0.0)).unwrap();
        assert_eq!(result.text_preview, short);
    }

    #[test]
    fn test_idempotent() {
        let scorer = LexiconScorer::new();
        let text = "This is a great page with some terrible parts.";
        assert_eq!(classify(text, &scorer), classify(text, &scorer));
    }

    #[test]
    fn test_neutral_confidence() {
        assert_eq!(neutral_confidence(0.0), 1.0);
        assert_eq!(neutral_confidence(0.25), 0.75);
        assert_eq!(neutral_confidence(-0.25), 0.75);
    }

    #[test]
    fn test_subjectivity_band() {
        assert_eq!(subjectivity_band(0.9), "Very Subjective");
        assert_eq!(subjectivity_band(0.1), "Objective");
        assert_eq!(subjectivity_band(0.5), "Mixed");
    }

    #[test]
    fn test_lexicon_positive_text() {
        let scorer = LexiconScorer::new();
        let (polarity, subjectivity) = scorer.score("This product is absolutely wonderful, I love it.");
        assert!(polarity > POSITIVE_THRESHOLD);
        assert!(subjectivity > 0.5);
    }

    #[test]
    fn test_lexicon_negative_text() {
        let scorer = LexiconScorer::new();
        let (polarity, _) = scorer.score("The service was terrible and the app is broken.");
        assert!(polarity < NEGATIVE_THRESHOLD);
    }

    #[test]
    fn test_lexicon_factual_text_is_neutral() {
        let scorer = LexiconScorer::new();
        let (polarity, subjectivity) = scorer.score("The report lists three numbers and a date.");
        assert_eq!(polarity, 0.0);
        assert_eq!(subjectivity, 0.0);
    }

    #[test]
    fn test_lexicon_negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let (plain, _) = scorer.score("The food was good.");
        let (negated, _) = scorer.score("The food was not good.");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn test_lexicon_intensifier_boosts() {
        let scorer = LexiconScorer::new();
        let (plain, _) = scorer.score("good");
        let (boosted, _) = scorer.score("very good");
        assert!(boosted > plain);
    }

    #[test]
    fn test_lexicon_scores_stay_in_range() {
        let scorer = LexiconScorer::new();
        let (polarity, subjectivity) =
            scorer.score("extremely incredibly excellent amazing wonderful perfect");
        assert!((-1.0..=1.0).contains(&polarity));
        assert!((0.0..=1.0).contains(&subjectivity));
    }
}
