//! Mood predicates over an utterance.
//!
//! Each predicate ORs a compound polarity score from an injected
//! [`SentimentScorer`] with a fixed keyword list. Scorer failures are
//! returned to the caller untouched.

use crate::error::{ChatError, Result};

/// Compound polarity in `[-1, 1]` for a span of text.
pub trait SentimentScorer {
    fn compound(&self, text: &str) -> Result<f64>;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Result<f64>,
{
    fn compound(&self, text: &str) -> Result<f64> {
        self(text)
    }
}

const HAPPY_THRESHOLD: f64 = 0.5;
const UPSET_THRESHOLD: f64 = -0.3;
const ANGRY_THRESHOLD: f64 = -0.5;

const HAPPY_WORDS: &[&str] = &[
    "happy", "joyful", "excited", "pleased", "cheerful", "delighted", "elated",
];
const UPSET_WORDS: &[&str] = &[
    "irritated", "frustrated", "agitated", "upset", "displeased", "infuriated",
];
const ANGRY_WORDS: &[&str] = &[
    "angry", "mad", "furious", "annoyed", "fuck", "pissed", "shit",
];

pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: SentimentScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn is_happy(&self, text: &str) -> Result<bool> {
        let score = self.scorer.compound(text)?;
        Ok(score > HAPPY_THRESHOLD || contains_any(text, HAPPY_WORDS))
    }

    pub fn is_upset(&self, text: &str) -> Result<bool> {
        let score = self.scorer.compound(text)?;
        Ok(score < UPSET_THRESHOLD || contains_any(text, UPSET_WORDS))
    }

    pub fn is_angry(&self, text: &str) -> Result<bool> {
        let score = self.scorer.compound(text)?;
        Ok(score < ANGRY_THRESHOLD || contains_any(text, ANGRY_WORDS))
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    let text = text.to_lowercase();
    words.iter().any(|word| text.contains(word))
}

/// NLTK's VADER compound score, via the `vader_sentiment` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> Result<f64> {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        match scores.get("compound") {
            Some(compound) if compound.is_finite() => Ok(*compound),
            Some(compound) => Err(ChatError::scorer(format!(
                "non-finite compound {compound} for {text:?}"
            ))),
            None => Err(ChatError::scorer(format!("no compound score for {text:?}"))),
        }
    }
}
