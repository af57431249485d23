// src/lib.rs
//! Rule-based fuzzy-logic sentiment classifier.
//!
//! ```
//! use fuzzy_sentiment::{classify, Label};
//!
//! let out = classify("ótimo e maravilhoso").unwrap();
//! assert_eq!(out.label, Label::Positive);
//! assert_eq!(out.features.fp, 1.0);
//! ```

pub mod api;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod membership;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::{Defuzzifier, EngineConfig, Profile};
pub use crate::decision::{Classification, Label, Thresholds};
pub use crate::engine::{FuzzyEngine, InferenceResult, NEUTRAL_SCORE};
pub use crate::error::InferenceError;
pub use crate::features::{extract_features, FeatureVector};
pub use crate::lexicon::Lexicon;
pub use crate::membership::{Term, Variable};
pub use crate::rules::{Rule, RuleActivation, RuleBase};
pub use crate::sentiment::SentimentClassifier;

use once_cell::sync::Lazy;

static DEFAULT_CLASSIFIER: Lazy<SentimentClassifier> = Lazy::new(SentimentClassifier::default);

/// Classify with the built-in Portuguese lexicon and the wide profile.
pub fn classify(text: &str) -> Result<Classification, InferenceError> {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Build a classifier from `$FUZZY_SENTIMENT_CONFIG` / `config/engine.*` and
/// `$FUZZY_SENTIMENT_LEXICON`, falling back to the built-ins.
pub fn classifier_from_env() -> anyhow::Result<SentimentClassifier> {
    let cfg = config::load_engine_config_default()?;
    let lexicon = config::load_lexicon_default()?;
    let engine = FuzzyEngine::new(cfg)?;
    Ok(SentimentClassifier::new(lexicon, engine))
}
