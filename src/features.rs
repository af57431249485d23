//! # Feature Extraction
//! Text → `FeatureVector (FP, FN, I, N)`.
//!
//! Tokenization: Unicode lower-case, drop every char that is neither a word char
//! nor whitespace, split on whitespace. Counts are normalized by the number of
//! keyword matches (not by token count); no matches → all-zero vector.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::lexicon::{Category, Lexicon};
use crate::membership::Variable;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word regex"));

/// Normalized keyword frequencies. Each component is expected in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub fp: f64,
    #[serde(rename = "fn")]
    pub fn_: f64,
    pub i: f64,
    pub n: f64,
}

impl FeatureVector {
    /// The "no keywords found" vector.
    pub const ZERO: FeatureVector = FeatureVector::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(fp: f64, fn_: f64, i: f64, n: f64) -> Self {
        Self { fp, fn_, i, n }
    }

    #[inline]
    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Fp => self.fp,
            Variable::Fn => self.fn_,
            Variable::I => self.i,
            Variable::N => self.n,
        }
    }

    /// Fails on the first component that is NaN or outside [0,1].
    pub fn validate(&self) -> Result<(), InferenceError> {
        for variable in Variable::ALL {
            let value = self.get(variable);
            if !(0.0..=1.0).contains(&value) {
                return Err(InferenceError::FeatureOutOfRange { variable, value });
            }
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        Variable::ALL.iter().all(|v| self.get(*v) == 0.0)
    }
}

/// Raw keyword hit counts per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
    pub intensifiers: usize,
    pub negations: usize,
}

impl KeywordCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.intensifiers + self.negations
    }

    pub fn to_features(&self) -> FeatureVector {
        let total = self.total();
        if total == 0 {
            return FeatureVector::ZERO;
        }
        let t = total as f64;
        FeatureVector::new(
            self.positive as f64 / t,
            self.negative as f64 / t,
            self.intensifiers as f64 / t,
            self.negations as f64 / t,
        )
    }
}

/// Lower-case, strip punctuation, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn count_keywords(text: &str, lexicon: &Lexicon) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for token in tokenize(text) {
        match lexicon.category(&token) {
            Some(Category::Positive) => counts.positive += 1,
            Some(Category::Negative) => counts.negative += 1,
            Some(Category::Intensifier) => counts.intensifiers += 1,
            Some(Category::Negation) => counts.negations += 1,
            None => {}
        }
    }
    counts
}

pub fn extract_features(text: &str, lexicon: &Lexicon) -> FeatureVector {
    count_keywords(text, lexicon).to_features()
}
