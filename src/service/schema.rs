
//! JSON bodies accepted and produced by the calculation endpoint.

use serde::{Serialize, Deserialize};

/// Body of `POST /api/v1/calculate`. Any field other than
/// `expression` makes the whole body invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculateRequest {
  pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
  pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
}
