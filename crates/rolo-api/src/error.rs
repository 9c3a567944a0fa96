//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error responses use the same `{code, message, data}` envelope as success
//! responses, with `data` always `null`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("invalid payload: {0}")]
  Validation(#[from] rolo_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(e) => {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
      }
      ApiError::Store(e) => {
        // The detail goes to the log, not the client.
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "internal storage error".to_string(),
        )
      }
    };
    let body = json!({
      "code":    status.as_u16(),
      "message": message,
      "data":    null,
    });
    (status, Json(body)).into_response()
  }
}
