//! # Fuzzy Inference Engine
//! Pure, testable mapping `FeatureVector` → `(score, label, rule trace)`.
//! No I/O and no interior mutability: one engine can be shared across threads.
//!
//! Pipeline: validate input → fuzzify (3 degrees per variable) → activate every
//! rule (min of its conditions) → defuzzify → threshold into a label.
//!
//! Defuzzification:
//! - weighted average: `Σ(aᵢ·tᵢ) / Σ(aᵢ)`
//! - centroid: each rule clips the output set that best matches its target;
//!   clipped sets are max-aggregated over [0,1] (step 0.01) and the centroid taken.
//!
//! When nothing fires the score is exactly `NEUTRAL_SCORE`.

use serde::{Deserialize, Serialize};

use crate::config::{Defuzzifier, EngineConfig};
use crate::decision::Label;
use crate::error::InferenceError;
use crate::features::FeatureVector;
use crate::membership::{Fuzzified, Term, Variable, VariableTerms};
use crate::rules::{Rule, RuleActivation};

/// Score used when no rule fires.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Sampling resolution of the output universe for centroid defuzzification.
const CENTROID_STEPS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub score: f64,
    pub label: Label,
    pub activations: Vec<RuleActivation>,
}

#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    config: EngineConfig,
}

impl Default for FuzzyEngine {
    /// Wide profile with the extended rule base (validated by tests).
    fn default() -> Self {
        Self {
            config: EngineConfig::wide(),
        }
    }
}

impl FuzzyEngine {
    /// Validates the whole configuration once; inference never re-checks it.
    pub fn new(config: EngineConfig) -> Result<Self, InferenceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fuzzify(&self, features: &FeatureVector) -> Fuzzified {
        let m = &self.config.membership;
        Fuzzified::new(
            m.fp.evaluate(features.get(Variable::Fp)),
            m.fn_.evaluate(features.get(Variable::Fn)),
            m.i.evaluate(features.get(Variable::I)),
            m.n.evaluate(features.get(Variable::N)),
        )
    }

    /// Fails fast on components outside [0,1]; never clamps.
    pub fn infer(&self, features: &FeatureVector) -> Result<InferenceResult, InferenceError> {
        features.validate()?;

        let fuzzified = self.fuzzify(features);
        let activations = self.config.rules.activate(&fuzzified);

        let score = match self.config.defuzzifier {
            Defuzzifier::WeightedAverage => weighted_average(&activations),
            Defuzzifier::Centroid => centroid(&activations, &self.config.output),
        };
        let label = self.config.thresholds.label(score);

        Ok(InferenceResult {
            score,
            label,
            activations,
        })
    }
}

/// `Σ(activation·target) / Σ(activation)`, or `NEUTRAL_SCORE` when nothing fired.
pub fn weighted_average(activations: &[RuleActivation]) -> f64 {
    let total: f64 = activations.iter().map(|a| a.activation).sum();
    if total == 0.0 {
        return NEUTRAL_SCORE;
    }
    let weighted: f64 = activations.iter().map(|a| a.activation * a.target).sum();
    weighted / total
}

/// Centroid of the aggregated output region, or `NEUTRAL_SCORE` when it is empty.
pub fn centroid(activations: &[RuleActivation], output: &VariableTerms) -> f64 {
    let clipped: Vec<(f64, Term)> = activations
        .iter()
        .filter(|a| a.fired())
        .map(|a| (a.activation, consequent_term(a.target, output)))
        .collect();

    let mut moment = 0.0;
    let mut area = 0.0;
    for step in 0..=CENTROID_STEPS {
        let x = f64::from(step) / f64::from(CENTROID_STEPS);
        let mu = clipped
            .iter()
            .map(|(level, term)| level.min(output.degree(*term, x)))
            .fold(0.0, f64::max);
        moment += x * mu;
        area += mu;
    }

    if area == 0.0 {
        NEUTRAL_SCORE
    } else {
        moment / area
    }
}

/// Output set with the greatest membership at `target`; ties go to neutral.
pub fn consequent_term(target: f64, output: &VariableTerms) -> Term {
    let mut best = Term::Medium;
    let mut best_degree = output.degree(Term::Medium, target);
    for term in [Term::Low, Term::High] {
        let d = output.degree(term, target);
        if d > best_degree {
            best = term;
            best_degree = d;
        }
    }
    best
}

/// Rules whose target labels differently from the output set centroid clips for it.
///
/// Near a set boundary (a target of 0.3 under the wide output sets) the weighted
/// average and the centroid disagree on the label of a fully firing rule.
pub fn centroid_label_mismatches(config: &EngineConfig) -> Vec<&Rule> {
    config
        .rules
        .iter()
        .filter(|r| {
            let set_label = match consequent_term(r.target, &config.output) {
                Term::Low => Label::Negative,
                Term::Medium => Label::Neutral,
                Term::High => Label::Positive,
            };
            config.thresholds.label(r.target) != set_label
        })
        .collect()
}
