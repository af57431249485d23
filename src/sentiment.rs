//! Text-level classifier: lexicon lookup → feature vector → fuzzy inference.

use metrics::{counter, histogram};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::decision::Classification;
use crate::engine::FuzzyEngine;
use crate::error::InferenceError;
use crate::features::{extract_features, FeatureVector};
use crate::lexicon::Lexicon;

/// Immutable after construction; safe to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: Lexicon,
    engine: FuzzyEngine,
}

impl Default for SentimentClassifier {
    /// Portuguese seed lexicon + wide profile.
    fn default() -> Self {
        Self::new(Lexicon::portuguese(), FuzzyEngine::default())
    }
}

impl SentimentClassifier {
    pub fn new(lexicon: Lexicon, engine: FuzzyEngine) -> Self {
        Self { lexicon, engine }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn engine(&self) -> &FuzzyEngine {
        &self.engine
    }

    pub fn features(&self, text: &str) -> FeatureVector {
        extract_features(text, &self.lexicon)
    }

    pub fn classify(&self, text: &str) -> Result<Classification, InferenceError> {
        let features = self.features(text);
        let result = match self.engine.infer(&features) {
            Ok(r) => r,
            Err(e) => {
                counter!("sentiment_inference_errors_total").increment(1);
                return Err(e);
            }
        };

        let fired = result.activations.iter().filter(|a| a.fired()).count();
        counter!("sentiment_classifications_total", "label" => result.label.as_str()).increment(1);
        histogram!("sentiment_score").record(result.score);

        // Never log raw text. Only hashed id + numbers.
        debug!(
            target: "fuzzy_sentiment",
            id = %text_id(text),
            score = result.score,
            label = %result.label,
            fired,
            "classified"
        );

        Ok(Classification {
            label: result.label,
            score: result.score,
            features,
            rule_activations: result.activations,
        })
    }
}

/// Short anonymized id: first 6 bytes of SHA-256 as hex.
fn text_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
