use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("model server connection error: {0}")]
    ModelConnection(String),

    #[error("invalid response from model server: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, kind) = match self {
            ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            ServiceError::ModelConnection(_) => (StatusCode::BAD_GATEWAY, "model_error"),
            ServiceError::InvalidResponse(_) => (StatusCode::BAD_GATEWAY, "model_error"),
            ServiceError::Http(_) => (StatusCode::BAD_GATEWAY, "model_error"),
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": kind,
            }
        }));

        (status, body).into_response()
    }
}
