
use super::error::ApiError;

use regex::Regex;
use once_cell::sync::Lazy;

/// Cleans up a client-supplied expression before it reaches the
/// calculator. All whitespace is removed; what remains must be
/// non-empty and contain only digits, `.`, `+ - * /` and parentheses.
pub fn prefilter(expression: &str) -> Result<String, ApiError> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.+\-*/()]+$").unwrap());
  let stripped: String = expression.chars().filter(|ch| !ch.is_whitespace()).collect();
  if RE.is_match(&stripped) {
    Ok(stripped)
  } else {
    Err(ApiError::InvalidExpression)
  }
}
