use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::ServiceError;
use crate::model::SummarizationModel;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model: Arc<dyn SummarizationModel>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    summary: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/summarize", post(summarize))
        // Documents can be arbitrarily long, so the default body cap is
        // lifted rather than raised.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ServiceError> {
    // Reject malformed bodies before the model is touched.
    let Json(request) = payload.map_err(|e| ServiceError::Validation(e.body_text()))?;

    let params = state.config.generation_params();
    let started = Instant::now();

    // No locking, queueing, or timeout around the model call; concurrent
    // requests compete for the model server.
    let summary = state.model.summarize(&request.text, &params).await?;

    tracing::debug!(
        "Summarized {} input chars into {} chars in {}ms",
        request.text.len(),
        summary.len(),
        started.elapsed().as_millis()
    );

    Ok(Json(SummarizeResponse { summary }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "summarization_gateway"
    }))
}
