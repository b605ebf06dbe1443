
use super::schema::ErrorResponse;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures reported to HTTP clients. The `Display` text is exactly
/// what the client sees in the `error` field, so core errors are
/// collapsed into [`ApiError::Internal`] rather than echoed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ApiError {
  #[error("invalid request body")]
  InvalidRequestBody,
  #[error("expression is not valid")]
  InvalidExpression,
  #[error("method not allowed")]
  MethodNotAllowed,
  #[error("internal server error")]
  Internal,
}

impl ApiError {
  pub fn status_code(self) -> StatusCode {
    match self {
      ApiError::InvalidRequestBody | ApiError::InvalidExpression => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorResponse { error: self.to_string() };
    (self.status_code(), Json(body)).into_response()
  }
}
