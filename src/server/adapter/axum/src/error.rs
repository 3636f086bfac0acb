/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vellum_engine::LayoutError;

/// Failures surfaced by the HTTP layer. Render failures are never retried;
/// the request ends with a 500 naming the region.
#[derive(Debug)]
pub enum LayoutResponseError {
  Render(LayoutError),
  Validation(String),
  Internal(String),
}

impl LayoutResponseError {
  fn status(&self) -> StatusCode {
    match self {
      Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
      Self::Validation(_) => StatusCode::BAD_REQUEST,
    }
  }
}

impl IntoResponse for LayoutResponseError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = match self {
      Self::Render(err) => {
        tracing::error!(region = %err.region(), error = %err, "page render failed");
        serde_json::json!({
          "ok": false,
          "error": {
            "code": err.code(),
            "region": err.region().as_str(),
            "message": err.to_string(),
          }
        })
      }
      Self::Validation(message) => serde_json::json!({
        "ok": false,
        "error": {
          "code": "VALIDATION_ERROR",
          "message": message,
        }
      }),
      Self::Internal(message) => {
        tracing::error!(error = %message, "internal error");
        serde_json::json!({
          "ok": false,
          "error": {
            "code": "INTERNAL_ERROR",
            "message": message,
          }
        })
      }
    };
    (status, axum::Json(body)).into_response()
  }
}

impl From<LayoutError> for LayoutResponseError {
  fn from(err: LayoutError) -> Self {
    Self::Render(err)
  }
}
