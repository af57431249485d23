//! # Membership Functions
//! Linguistic variables (FP, FN, I, N) and their three terms `low`, `medium`, `high`.
//!
//! Shapes over the domain [0,1]:
//! - `low(b, c)`:       1 up to `b`, linear fall to 0 at `c`
//! - `medium(a, p, c)`: 0 outside [a, c], linear rise to 1 at `p`, linear fall to 0 at `c`
//! - `high(a, b)`:      0 up to `a`, linear rise to 1 at `b`
//!
//! Config shape is positional, e.g. `low = [0.15, 0.3]`, `medium = [0.2, 0.4, 0.6]`.
//! Evaluation is pure; the three terms of a variable never depend on each other.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InferenceError;

/// Input variable of the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Positive-word frequency.
    Fp,
    /// Negative-word frequency.
    Fn,
    /// Intensifier frequency.
    I,
    /// Negation frequency.
    N,
}

impl Variable {
    pub const ALL: [Variable; 4] = [Variable::Fp, Variable::Fn, Variable::I, Variable::N];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Variable::Fp => 0,
            Variable::Fn => 1,
            Variable::I => 2,
            Variable::N => 3,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variable::Fp => "FP",
            Variable::Fn => "FN",
            Variable::I => "I",
            Variable::N => "N",
        })
    }
}

/// Linguistic term of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Low,
    Medium,
    High,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Term::Low => "low",
            Term::Medium => "medium",
            Term::High => "high",
        })
    }
}

/// Left shoulder: full membership at the bottom of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LowShoulder {
    pub b: f64,
    pub c: f64,
}

impl LowShoulder {
    pub const fn new(b: f64, c: f64) -> Self {
        Self { b, c }
    }

    #[inline]
    pub fn degree(&self, x: f64) -> f64 {
        if x <= self.b {
            1.0
        } else if x >= self.c {
            0.0
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

impl From<[f64; 2]> for LowShoulder {
    fn from([b, c]: [f64; 2]) -> Self {
        Self { b, c }
    }
}

impl From<LowShoulder> for [f64; 2] {
    fn from(s: LowShoulder) -> Self {
        [s.b, s.c]
    }
}

/// Triangle peaking at `p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Triangle {
    pub a: f64,
    pub p: f64,
    pub c: f64,
}

impl Triangle {
    pub const fn new(a: f64, p: f64, c: f64) -> Self {
        Self { a, p, c }
    }

    /// A zero-width side (`p == a` or `p == c`) is constant 1 across it.
    #[inline]
    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            0.0
        } else if x <= self.p {
            if self.p == self.a {
                1.0
            } else {
                (x - self.a) / (self.p - self.a)
            }
        } else if self.c == self.p {
            1.0
        } else {
            (self.c - x) / (self.c - self.p)
        }
    }
}

impl From<[f64; 3]> for Triangle {
    fn from([a, p, c]: [f64; 3]) -> Self {
        Self { a, p, c }
    }
}

impl From<Triangle> for [f64; 3] {
    fn from(t: Triangle) -> Self {
        [t.a, t.p, t.c]
    }
}

/// Right shoulder: full membership at the top of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct HighShoulder {
    pub a: f64,
    pub b: f64,
}

impl HighShoulder {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn degree(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }
}

impl From<[f64; 2]> for HighShoulder {
    fn from([a, b]: [f64; 2]) -> Self {
        Self { a, b }
    }
}

impl From<HighShoulder> for [f64; 2] {
    fn from(s: HighShoulder) -> Self {
        [s.a, s.b]
    }
}

/// One membership function, as referenced by a `(variable, term)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    Low(LowShoulder),
    Medium(Triangle),
    High(HighShoulder),
}

impl MembershipFunction {
    #[inline]
    pub fn degree(&self, x: f64) -> f64 {
        match self {
            MembershipFunction::Low(s) => s.degree(x),
            MembershipFunction::Medium(t) => t.degree(x),
            MembershipFunction::High(s) => s.degree(x),
        }
    }
}

/// The three terms owned by one linguistic variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableTerms {
    pub low: LowShoulder,
    pub medium: Triangle,
    pub high: HighShoulder,
}

impl VariableTerms {
    pub const fn new(low: LowShoulder, medium: Triangle, high: HighShoulder) -> Self {
        Self { low, medium, high }
    }

    pub fn function(&self, term: Term) -> MembershipFunction {
        match term {
            Term::Low => MembershipFunction::Low(self.low),
            Term::Medium => MembershipFunction::Medium(self.medium),
            Term::High => MembershipFunction::High(self.high),
        }
    }

    #[inline]
    pub fn degree(&self, term: Term, x: f64) -> f64 {
        self.function(term).degree(x)
    }

    pub fn evaluate(&self, x: f64) -> Memberships {
        Memberships {
            low: self.low.degree(x),
            medium: self.medium.degree(x),
            high: self.high.degree(x),
        }
    }

    /// Checks ordering and range of all boundaries. `owner` names the variable in errors.
    pub fn validate(&self, owner: &str) -> Result<(), InferenceError> {
        let err = |term: Term, reason: String| InferenceError::InvalidMembership {
            variable: owner.to_string(),
            term,
            reason,
        };

        let LowShoulder { b, c } = self.low;
        check_unit(&[b, c]).map_err(|r| err(Term::Low, r))?;
        if b >= c {
            return Err(err(Term::Low, format!("expected b < c, got b={b}, c={c}")));
        }

        let Triangle { a, p, c } = self.medium;
        check_unit(&[a, p, c]).map_err(|r| err(Term::Medium, r))?;
        if !(a <= p && p <= c) || a >= c {
            return Err(err(
                Term::Medium,
                format!("expected a <= p <= c with a < c, got a={a}, p={p}, c={c}"),
            ));
        }

        let HighShoulder { a, b } = self.high;
        check_unit(&[a, b]).map_err(|r| err(Term::High, r))?;
        if a >= b {
            return Err(err(Term::High, format!("expected a < b, got a={a}, b={b}")));
        }

        Ok(())
    }
}

fn check_unit(params: &[f64]) -> Result<(), String> {
    match params.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        Some(v) => Err(format!("boundary {v} outside [0, 1]")),
        None => Ok(()),
    }
}

/// Degrees of one input value in each of the three terms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Memberships {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Memberships {
    #[inline]
    pub fn get(&self, term: Term) -> f64 {
        match term {
            Term::Low => self.low,
            Term::Medium => self.medium,
            Term::High => self.high,
        }
    }
}

/// Precomputed memberships for all four variables of one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fuzzified([Memberships; 4]);

impl Fuzzified {
    pub fn new(fp: Memberships, fn_: Memberships, i: Memberships, n: Memberships) -> Self {
        Self([fp, fn_, i, n])
    }

    #[inline]
    pub fn degree(&self, variable: Variable, term: Term) -> f64 {
        self.0[variable.index()].get(term)
    }
}
