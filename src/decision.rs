//! decision.rs: Label, score thresholds and the public classification shape.
//!
//! Thresholds are half-open: `score < negative_below` → NEGATIVE,
//! `score < positive_from` → NEUTRAL, otherwise POSITIVE. Both boundaries
//! themselves classify as NEUTRAL / POSITIVE respectively.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InferenceError;
use crate::features::FeatureVector;
use crate::rules::RuleActivation;

/// Sentiment polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "POSITIVE",
            Label::Neutral => "NEUTRAL",
            Label::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_negative_below() -> f64 {
    0.35
}
fn default_positive_from() -> f64 {
    0.65
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_negative_below")]
    pub negative_below: f64,
    #[serde(default = "default_positive_from")]
    pub positive_from: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            negative_below: default_negative_below(),
            positive_from: default_positive_from(),
        }
    }
}

impl Thresholds {
    pub fn label(&self, score: f64) -> Label {
        if score < self.negative_below {
            Label::Negative
        } else if score < self.positive_from {
            Label::Neutral
        } else {
            Label::Positive
        }
    }

    pub fn validate(&self) -> Result<(), InferenceError> {
        let ok = (0.0..=1.0).contains(&self.negative_below)
            && (0.0..=1.0).contains(&self.positive_from)
            && self.negative_below <= self.positive_from;
        if ok {
            Ok(())
        } else {
            Err(InferenceError::InvalidThresholds {
                negative_below: self.negative_below,
                positive_from: self.positive_from,
            })
        }
    }
}

/// Result of classifying one text, including the explainability trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    /// Continuous sentiment score in [0,1].
    pub score: f64,
    pub features: FeatureVector,
    /// One entry per rule, in rule-base order.
    pub rule_activations: Vec<RuleActivation>,
}

impl Classification {
    /// Rules with non-zero activation, in rule-base order.
    pub fn fired(&self) -> impl Iterator<Item = &RuleActivation> {
        self.rule_activations.iter().filter(|a| a.fired())
    }
}
