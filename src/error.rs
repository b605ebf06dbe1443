
use crate::parsing::source::SourceOffset;
use crate::stack::StackError;

use thiserror::Error;

use std::num::ParseFloatError;

/// Everything that can go wrong while tokenizing or evaluating an
/// expression. None of these are transient; retrying the same input
/// always produces the same error.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum CalcError {
  #[error("invalid symbol '{ch}' at {pos}")]
  InvalidSymbol {
    ch: char,
    pos: SourceOffset,
  },
  #[error("invalid expression")]
  InvalidExpression,
  #[error("unbalanced parentheses")]
  UnbalancedParentheses,
  #[error("division by zero")]
  DivisionByZero,
  #[error("unknown operator '{0}'")]
  UnknownOperator(String),
  #[error("malformed number '{literal}'")]
  MalformedNumber {
    literal: String,
    #[source]
    source: ParseFloatError,
  },
  #[error("number '{literal}' at {pos} is out of range")]
  OutOfRange {
    literal: String,
    pos: SourceOffset,
  },
  #[error("arithmetic overflow")]
  Overflow,
}

/// Running out of values mid-reduction means the operators and
/// operands in the expression don't line up.
impl From<StackError> for CalcError {
  fn from(_: StackError) -> Self {
    CalcError::InvalidExpression
  }
}
