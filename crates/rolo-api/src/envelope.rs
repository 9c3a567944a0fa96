//! The uniform `{code, message, data}` response wrapper.
//!
//! Every endpoint, success or failure, answers with this shape. `code`
//! mirrors the HTTP status.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub code:    u16,
  pub message: String,
  pub data:    T,
}

impl<T: Serialize> Envelope<T> {
  /// A 200 envelope with the given outcome description.
  pub fn ok(message: impl Into<String>, data: T) -> Self {
    Self {
      code:    StatusCode::OK.as_u16(),
      message: message.into(),
      data,
    }
  }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.code)
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(self)).into_response()
  }
}
