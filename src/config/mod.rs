//! Engine configuration: membership boundaries, rule table, thresholds and
//! defuzzification strategy.
//!
//! Two profiles ship built in:
//! - `wide` (default): shoulders/triangle tuned for densely matched text
//!   (low 0.15–0.3, medium 0.2/0.4/0.6, high 0.4–0.7)
//! - `narrow`: tuned for sparse keyword matches
//!   (low 0.05–0.2, medium 0.1/0.25/0.4, high 0.3–0.5)
//!
//! A config file may name a base `profile` and override any section of it;
//! profiles are never blended.

pub mod load;

use serde::{Deserialize, Serialize};

use crate::decision::Thresholds;
use crate::error::InferenceError;
use crate::membership::{HighShoulder, LowShoulder, Triangle, Variable, VariableTerms};
use crate::rules::{Rule, RuleBase};

pub use load::{
    load_engine_config_default, load_engine_config_from, load_lexicon_default, load_lexicon_from,
    DEFAULT_ENGINE_CONFIG_JSON, DEFAULT_ENGINE_CONFIG_TOML, ENV_ENGINE_CONFIG_PATH,
    ENV_LEXICON_PATH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Wide,
    Narrow,
}

impl Profile {
    pub fn terms(self) -> VariableTerms {
        match self {
            Profile::Wide => VariableTerms::new(
                LowShoulder::new(0.15, 0.3),
                Triangle::new(0.2, 0.4, 0.6),
                HighShoulder::new(0.4, 0.7),
            ),
            Profile::Narrow => VariableTerms::new(
                LowShoulder::new(0.05, 0.2),
                Triangle::new(0.1, 0.25, 0.4),
                HighShoulder::new(0.3, 0.5),
            ),
        }
    }

    pub fn config(self) -> EngineConfig {
        let terms = self.terms();
        EngineConfig {
            profile: Some(self),
            membership: MembershipConfig::uniform(terms),
            rules: RuleBase::extended(),
            thresholds: Thresholds::default(),
            defuzzifier: Defuzzifier::default(),
            output: output_sets(),
        }
    }
}

/// Output sets used by centroid defuzzification: low = negative,
/// medium = neutral, high = positive.
pub fn output_sets() -> VariableTerms {
    Profile::Wide.terms()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defuzzifier {
    /// `Σ(activation·target) / Σ(activation)`.
    #[default]
    WeightedAverage,
    /// Centroid of the max-aggregated, activation-clipped output sets.
    Centroid,
}

/// Membership functions per input variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipConfig {
    pub fp: VariableTerms,
    #[serde(rename = "fn")]
    pub fn_: VariableTerms,
    pub i: VariableTerms,
    pub n: VariableTerms,
}

impl MembershipConfig {
    pub fn uniform(terms: VariableTerms) -> Self {
        Self {
            fp: terms,
            fn_: terms,
            i: terms,
            n: terms,
        }
    }

    pub fn get(&self, variable: Variable) -> &VariableTerms {
        match variable {
            Variable::Fp => &self.fp,
            Variable::Fn => &self.fn_,
            Variable::I => &self.i,
            Variable::N => &self.n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Profile the config was built from; informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    pub membership: MembershipConfig,
    pub rules: RuleBase,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub defuzzifier: Defuzzifier,
    #[serde(default = "output_sets")]
    pub output: VariableTerms,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::wide()
    }
}

impl EngineConfig {
    pub fn wide() -> Self {
        Profile::Wide.config()
    }

    pub fn narrow() -> Self {
        Profile::Narrow.config()
    }

    pub fn with_rules(mut self, rules: RuleBase) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_defuzzifier(mut self, defuzzifier: Defuzzifier) -> Self {
        self.defuzzifier = defuzzifier;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn validate(&self) -> Result<(), InferenceError> {
        for variable in Variable::ALL {
            self.membership
                .get(variable)
                .validate(&variable.to_string().to_ascii_lowercase())?;
        }
        self.output.validate("output")?;
        self.rules.validate()?;
        self.thresholds.validate()
    }
}

/// File shape: every section optional, layered over `profile` (default wide).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfigFile {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub membership: Option<MembershipOverrides>,
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
    #[serde(default)]
    pub defuzzifier: Option<Defuzzifier>,
    #[serde(default)]
    pub output: Option<VariableTerms>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipOverrides {
    #[serde(default)]
    pub fp: Option<VariableTerms>,
    #[serde(default, rename = "fn")]
    pub fn_: Option<VariableTerms>,
    #[serde(default)]
    pub i: Option<VariableTerms>,
    #[serde(default)]
    pub n: Option<VariableTerms>,
}

impl EngineConfigFile {
    pub fn resolve(self) -> EngineConfig {
        let mut cfg = self.profile.unwrap_or_default().config();
        if let Some(m) = self.membership {
            if let Some(t) = m.fp {
                cfg.membership.fp = t;
            }
            if let Some(t) = m.fn_ {
                cfg.membership.fn_ = t;
            }
            if let Some(t) = m.i {
                cfg.membership.i = t;
            }
            if let Some(t) = m.n {
                cfg.membership.n = t;
            }
        }
        if let Some(rules) = self.rules {
            cfg.rules = RuleBase::new(rules);
        }
        if let Some(t) = self.thresholds {
            cfg.thresholds = t;
        }
        if let Some(d) = self.defuzzifier {
            cfg.defuzzifier = d;
        }
        if let Some(o) = self.output {
            cfg.output = o;
        }
        cfg
    }
}
