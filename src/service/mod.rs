
//! HTTP front end for the calculator.

pub mod error;
pub mod schema;
pub mod validation;

pub use error::ApiError;
pub use schema::{CalculateRequest, CalculateResponse, ErrorResponse};

use crate::calculator::calculate;

use axum::{Json, Router};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;

pub const CALCULATE_PATH: &str = "/api/v1/calculate";

/// Builds the service's routes. The router holds no state, so one
/// instance can serve any number of concurrent requests.
pub fn router() -> Router {
  Router::new()
    .route(CALCULATE_PATH, post(handle_calculate).fallback(method_not_allowed))
}

/// The body is decoded from raw bytes so that a missing or unusual
/// `Content-Type` header is not itself a reason to reject it. A body
/// that can't be read at all (for instance, one over the default size
/// limit) is treated the same as one that isn't valid JSON.
async fn handle_calculate(
  body: Result<Bytes, BytesRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
  let body = body.map_err(|err| {
    log::debug!("Failed to read request body: {}", err);
    ApiError::InvalidRequestBody
  })?;
  let request: CalculateRequest = serde_json::from_slice(&body).map_err(|err| {
    log::debug!("Rejected request body: {}", err);
    ApiError::InvalidRequestBody
  })?;

  let expression = validation::prefilter(&request.expression).map_err(|err| {
    log::debug!("Rejected expression {:?}", request.expression);
    err
  })?;

  match calculate(&expression) {
    Ok(result) => {
      log::info!("Expression successfully evaluated: {} = {}", expression, result);
      Ok(Json(CalculateResponse { result }))
    }
    Err(err) => {
      log::error!("Expression evaluation failed: {}: {}", expression, err);
      Err(ApiError::Internal)
    }
  }
}

async fn method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}
