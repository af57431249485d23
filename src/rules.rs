//! # Rule Base
//! Fuzzy rules of the form `IF v1 IS t1 AND v2 IS t2 ... THEN score ≈ target`.
//!
//! Activation is the minimum of the condition degrees (fuzzy AND). Every rule is
//! evaluated and every rule contributes to defuzzification; order only fixes the
//! order of the activation trace.
//!
//! JSON/TOML shape:
//! ```toml
//! [[rules]]
//! id = "fp_high_n_low"
//! conditions = [["fp", "high"], ["n", "low"]]
//! target = 0.8
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::membership::{Fuzzified, Term, Variable};

/// Consequent anchor for clearly positive rules.
pub const POSITIVE_TARGET: f64 = 0.8;
/// Consequent anchor for intensified positive rules.
pub const STRONG_POSITIVE_TARGET: f64 = 0.9;
pub const NEUTRAL_TARGET: f64 = 0.5;
pub const NEGATIVE_TARGET: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub conditions: Vec<(Variable, Term)>,
    pub target: f64,
}

impl Rule {
    pub fn new(id: impl Into<String>, conditions: &[(Variable, Term)], target: f64) -> Self {
        Self {
            id: id.into(),
            conditions: conditions.to_vec(),
            target,
        }
    }

    /// Degree to which this rule fires. A single condition fires at exactly its degree.
    pub fn activation(&self, input: &Fuzzified) -> f64 {
        self.conditions
            .iter()
            .map(|(v, t)| input.degree(*v, *t))
            .fold(1.0, f64::min)
    }

    pub fn activate(&self, input: &Fuzzified) -> RuleActivation {
        RuleActivation {
            rule_id: self.id.clone(),
            activation: self.activation(input),
            target: self.target,
        }
    }

    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.conditions.is_empty() {
            return Err(InferenceError::InvalidRule {
                id: self.id.clone(),
                reason: "rule has no conditions".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.target) {
            return Err(InferenceError::InvalidRule {
                id: self.id.clone(),
                reason: format!("target {} outside [0, 1]", self.target),
            });
        }
        Ok(())
    }
}

/// One entry of the activation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleActivation {
    pub rule_id: String,
    pub activation: f64,
    pub target: f64,
}

impl RuleActivation {
    #[inline]
    pub fn fired(&self) -> bool {
        self.activation > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleBase(Vec<Rule>);

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    /// Polarity and negation-inversion rules plus the neutral/ambiguous rule.
    pub fn minimal() -> Self {
        use Term::*;
        use Variable::*;
        Self(vec![
            Rule::new("fp_high_n_low", &[(Fp, High), (N, Low)], POSITIVE_TARGET),
            Rule::new("fp_high_n_high", &[(Fp, High), (N, High)], NEGATIVE_TARGET),
            Rule::new("fn_high_n_low", &[(Fn, High), (N, Low)], NEGATIVE_TARGET),
            Rule::new("fn_high_n_high", &[(Fn, High), (N, High)], POSITIVE_TARGET),
            Rule::new("fp_medium_fn_medium", &[(Fp, Medium), (Fn, Medium)], NEUTRAL_TARGET),
        ])
    }

    /// `minimal()` plus intensifier-aware rules.
    pub fn extended() -> Self {
        use Term::*;
        use Variable::*;
        let mut rules = Self::minimal().0;
        rules.extend([
            Rule::new(
                "fp_high_i_high_n_low",
                &[(Fp, High), (I, High), (N, Low)],
                STRONG_POSITIVE_TARGET,
            ),
            Rule::new(
                "fp_high_n_high_i_low",
                &[(Fp, High), (N, High), (I, Low)],
                NEGATIVE_TARGET,
            ),
            Rule::new(
                "fp_high_fn_low_i_low_n_low",
                &[(Fp, High), (Fn, Low), (I, Low), (N, Low)],
                POSITIVE_TARGET,
            ),
        ]);
        Self(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Activation trace, one entry per rule, in rule order.
    pub fn activate(&self, input: &Fuzzified) -> Vec<RuleActivation> {
        self.0.iter().map(|r| r.activate(input)).collect()
    }

    /// Validates every rule; ids must be unique since the trace is keyed by them.
    pub fn validate(&self) -> Result<(), InferenceError> {
        let mut seen = BTreeSet::new();
        for rule in &self.0 {
            rule.validate()?;
            if !seen.insert(rule.id.as_str()) {
                return Err(InferenceError::InvalidRule {
                    id: rule.id.clone(),
                    reason: "duplicate rule id".into(),
                });
            }
        }
        Ok(())
    }
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::extended()
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
