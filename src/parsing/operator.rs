
use crate::error::CalcError;

use phf::phf_map;

/// The binary operators understood by the evaluator, keyed by the
/// symbol that appears in an expression.
static OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
  "+" => Operator::Add,
  "-" => Operator::Subtract,
  "*" => Operator::Multiply,
  "/" => Operator::Divide,
};

/// A left-associative binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

/// The binding strength of an operator. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  pub const ADDITIVE: Precedence = Precedence(1);
  pub const MULTIPLICATIVE: Precedence = Precedence(2);
}

impl Operator {
  /// Looks up an operator by its symbol. Symbols absent from the
  /// operator table produce [`CalcError::UnknownOperator`].
  pub fn from_symbol(symbol: &str) -> Result<Operator, CalcError> {
    OPERATOR_TABLE.get(symbol)
      .copied()
      .ok_or_else(|| CalcError::UnknownOperator(symbol.to_owned()))
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Subtract => Precedence::ADDITIVE,
      Operator::Multiply | Operator::Divide => Precedence::MULTIPLICATIVE,
    }
  }

  /// Computes `left op right`. Division fails if `right` is exactly
  /// zero (positive or negative); there is no tolerance. A result too
  /// large for a finite `f64` is [`CalcError::Overflow`].
  pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
    let result = match self {
      Operator::Add => left + right,
      Operator::Subtract => left - right,
      Operator::Multiply => left * right,
      Operator::Divide => {
        if right == 0.0 {
          return Err(CalcError::DivisionByZero);
        }
        left / right
      }
    };
    if result.is_finite() {
      Ok(result)
    } else {
      Err(CalcError::Overflow)
    }
  }
}
