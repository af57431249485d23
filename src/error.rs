//! Error type for the inference core.
//!
//! Everything here is a caller or configuration contract violation; the engine
//! has no transient failure modes, so nothing is retried.

use thiserror::Error;

use crate::membership::{Term, Variable};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// A feature component is NaN or lies outside [0,1]. Never clamped.
    #[error("feature {variable} out of range: {value} (expected a value in [0, 1])")]
    FeatureOutOfRange { variable: Variable, value: f64 },

    #[error("invalid membership function {variable}.{term}: {reason}")]
    InvalidMembership {
        variable: String,
        term: Term,
        reason: String,
    },

    #[error("invalid rule `{id}`: {reason}")]
    InvalidRule { id: String, reason: String },

    #[error(
        "invalid thresholds: negative_below={negative_below}, positive_from={positive_from} \
         (expected 0 <= negative_below <= positive_from <= 1)"
    )]
    InvalidThresholds {
        negative_below: f64,
        positive_from: f64,
    },
}
