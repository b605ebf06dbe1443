
use crate::error::CalcError;
use crate::parsing::{tokenize, evaluate};

/// Evaluates an arithmetic expression over decimal numbers, `+ - * /`
/// and parentheses.
///
/// The input is taken as-is: whitespace is not stripped and is
/// rejected as an invalid symbol. Each call is independent of every
/// other.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
  let tokens = tokenize(expression)?;
  evaluate(tokens)
}
