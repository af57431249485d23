//! HTTP surface over the classifier and the raw inference engine.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::EngineConfig;
use crate::decision::Classification;
use crate::engine::InferenceResult;
use crate::error::InferenceError;
use crate::features::FeatureVector;
use crate::sentiment::SentimentClassifier;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<SentimentClassifier>,
}

impl AppState {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SentimentClassifier::default())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/classify", post(classify))
        .route("/infer", post(infer))
        .route("/config", get(config))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct ClassifyReq {
    text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Inference contract violations map to 422.
pub struct ApiError(InferenceError);

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "inference rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

async fn classify(
    State(state): State<AppState>,
    Json(body): Json<ClassifyReq>,
) -> Result<Json<Classification>, ApiError> {
    Ok(Json(state.classifier.classify(&body.text)?))
}

async fn infer(
    State(state): State<AppState>,
    Json(features): Json<FeatureVector>,
) -> Result<Json<InferenceResult>, ApiError> {
    Ok(Json(state.classifier.engine().infer(&features)?))
}

async fn config(State(state): State<AppState>) -> Json<EngineConfig> {
    Json(state.classifier.engine().config().clone())
}
