
//! Shunting yard evaluation of a token sequence, using one stack of
//! pending values and one stack of pending operators.

use super::operator::Operator;
use super::token::{Token, TokenKind};
use crate::error::CalcError;
use crate::stack::Stack;

/// An entry on the operator stack: either an operator waiting for its
/// right-hand side, or the marker left by an open parenthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpStackValue {
  Operator(Operator),
  LeftParen,
}

/// Computes the value of a token sequence, honoring operator
/// precedence, left associativity, and parenthetical grouping.
///
/// Malformed sequences (two operators in a row, a dangling operator,
/// an empty pair of parentheses, no tokens at all) fail with
/// [`CalcError::InvalidExpression`] when a reduction runs out of
/// operands or when anything other than exactly one value is left at
/// the end.
pub fn evaluate<I>(tokens: I) -> Result<f64, CalcError>
where I: IntoIterator<Item = Token> {
  let mut values: Stack<f64> = Stack::new();
  let mut operators: Stack<OpStackValue> = Stack::new();

  for token in tokens {
    match token.kind() {
      TokenKind::Number => {
        values.push(parse_number(&token)?);
      }
      TokenKind::LeftParen => {
        operators.push(OpStackValue::LeftParen);
      }
      TokenKind::RightParen => {
        // Reduce back to the matching open paren, then discard it.
        loop {
          match operators.peek().copied() {
            None => return Err(CalcError::UnbalancedParentheses),
            Some(OpStackValue::LeftParen) => {
              operators.pop()?;
              break;
            }
            Some(OpStackValue::Operator(_)) => {
              pop_apply(&mut values, &mut operators)?;
            }
          }
        }
      }
      TokenKind::Operator => {
        let op = Operator::from_symbol(token.value())?;
        // Equal precedence reduces too, which makes every operator
        // left-associative.
        while let Some(&OpStackValue::Operator(stack_op)) = operators.peek() {
          if stack_op.precedence() >= op.precedence() {
            pop_apply(&mut values, &mut operators)?;
          } else {
            break;
          }
        }
        operators.push(OpStackValue::Operator(op));
      }
    }
  }

  // Pop and resolve remaining operators. An open paren still on the
  // stack here was never closed.
  while let Some(stack_value) = operators.peek().copied() {
    match stack_value {
      OpStackValue::LeftParen => return Err(CalcError::UnbalancedParentheses),
      OpStackValue::Operator(_) => pop_apply(&mut values, &mut operators)?,
    }
  }

  Ok(values.into_single()?)
}

fn parse_number(token: &Token) -> Result<f64, CalcError> {
  let literal = token.value();
  let value = literal.parse::<f64>().map_err(|source| CalcError::MalformedNumber {
    literal: literal.to_owned(),
    source,
  })?;
  if !value.is_finite() {
    return Err(CalcError::OutOfRange {
      literal: literal.to_owned(),
      pos: token.span().start,
    });
  }
  Ok(value)
}

/// Pops the top operator and the top two values, and pushes the
/// result of applying the operator. The value pushed first is the
/// left-hand operand.
fn pop_apply(
  values: &mut Stack<f64>,
  operators: &mut Stack<OpStackValue>,
) -> Result<(), CalcError> {
  values.check_stack_size(2)?;
  let op = match operators.pop()? {
    OpStackValue::Operator(op) => op,
    OpStackValue::LeftParen => return Err(CalcError::UnbalancedParentheses),
  };
  let (left, right) = values.pop_pair()?;
  values.push(op.apply(left, right)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::{SourceOffset, Span};

  use approx::assert_relative_eq;
  use pretty_assertions::assert_eq;

  fn span() -> Span {
    Span::new(SourceOffset(0), SourceOffset(0))
  }

  fn num(literal: &str) -> Token {
    Token::new(TokenKind::Number, literal, span())
  }

  fn op(symbol: &str) -> Token {
    Token::new(TokenKind::Operator, symbol, span())
  }

  fn lparen() -> Token {
    Token::new(TokenKind::LeftParen, "(", span())
  }

  fn rparen() -> Token {
    Token::new(TokenKind::RightParen, ")", span())
  }

  #[test]
  fn test_single_number_is_unchanged() {
    assert_eq!(evaluate(vec![num("42")]), Ok(42.0));
    assert_eq!(evaluate(vec![num("0.1")]), Ok(0.1));
    assert_eq!(evaluate(vec![num("123456.789")]), Ok(123456.789));
  }

  #[test]
  fn test_left_assoc_subtraction() {
    let tokens = vec![num("10"), op("-"), num("4"), op("-"), num("3")];
    assert_eq!(evaluate(tokens), Ok(3.0));
  }

  #[test]
  fn test_left_assoc_division() {
    let tokens = vec![num("8"), op("/"), num("2"), op("/"), num("2")];
    assert_eq!(evaluate(tokens), Ok(2.0));
  }

  #[test]
  fn test_higher_precedence_on_right() {
    let tokens = vec![num("2"), op("+"), num("3"), op("*"), num("4")];
    assert_eq!(evaluate(tokens), Ok(14.0));
  }

  #[test]
  fn test_higher_precedence_on_left() {
    let tokens = vec![num("2"), op("*"), num("3"), op("+"), num("4")];
    assert_eq!(evaluate(tokens), Ok(10.0));
  }

  #[test]
  fn test_parentheses_override_precedence() {
    let tokens = vec![lparen(), num("2"), op("+"), num("3"), rparen(), op("*"), num("4")];
    assert_eq!(evaluate(tokens), Ok(20.0));
  }

  #[test]
  fn test_nested_parentheses() {
    // 2*((1+2)-(6/3))
    let tokens = vec![
      num("2"), op("*"), lparen(),
      lparen(), num("1"), op("+"), num("2"), rparen(),
      op("-"),
      lparen(), num("6"), op("/"), num("3"), rparen(),
      rparen(),
    ];
    assert_eq!(evaluate(tokens), Ok(2.0));
  }

  #[test]
  fn test_fractional_result() {
    let tokens = vec![num("0.1"), op("+"), num("0.2")];
    assert_relative_eq!(evaluate(tokens).unwrap(), 0.3);
  }

  #[test]
  fn test_empty_sequence() {
    assert_eq!(evaluate(Vec::<Token>::new()), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_doubled_operator() {
    let tokens = vec![num("2"), op("+"), op("+"), num("2")];
    assert_eq!(evaluate(tokens), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_operator_followed_by_higher_precedence_operator() {
    let tokens = vec![num("2"), op("+"), op("*"), num("2")];
    assert_eq!(evaluate(tokens), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_leading_operator() {
    let tokens = vec![op("-"), num("5"), op("+"), num("3")];
    assert_eq!(evaluate(tokens), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_trailing_operator() {
    let tokens = vec![num("5"), op("*")];
    assert_eq!(evaluate(tokens), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_adjacent_numbers() {
    let tokens = vec![num("1"), num("2")];
    assert_eq!(evaluate(tokens), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_empty_parentheses() {
    assert_eq!(evaluate(vec![lparen(), rparen()]), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_unmatched_right_paren() {
    let tokens = vec![num("1"), op("+"), num("2"), rparen()];
    assert_eq!(evaluate(tokens), Err(CalcError::UnbalancedParentheses));
  }

  #[test]
  fn test_unmatched_left_paren() {
    let tokens = vec![lparen(), num("1"), op("+"), num("2")];
    assert_eq!(evaluate(tokens), Err(CalcError::UnbalancedParentheses));
  }

  #[test]
  fn test_division_by_zero() {
    let tokens = vec![num("1"), op("/"), num("0")];
    assert_eq!(evaluate(tokens), Err(CalcError::DivisionByZero));
    let tokens = vec![num("1"), op("/"), lparen(), num("2"), op("-"), num("2"), rparen()];
    assert_eq!(evaluate(tokens), Err(CalcError::DivisionByZero));
  }

  #[test]
  fn test_zero_dividend_is_fine() {
    let tokens = vec![num("0"), op("/"), num("5")];
    assert_eq!(evaluate(tokens), Ok(0.0));
  }

  #[test]
  fn test_unknown_operator() {
    let tokens = vec![num("7"), op("%"), num("2")];
    assert_eq!(evaluate(tokens), Err(CalcError::UnknownOperator(String::from("%"))));
  }

  #[test]
  fn test_malformed_number() {
    let err = evaluate(vec![num("1.2.3")]).unwrap_err();
    assert!(matches!(err, CalcError::MalformedNumber { ref literal, .. } if literal == "1.2.3"));
    let err = evaluate(vec![num("."), op("+"), num("1")]).unwrap_err();
    assert!(matches!(err, CalcError::MalformedNumber { .. }));
  }

  #[test]
  fn test_literal_out_of_range() {
    let huge = "9".repeat(400);
    let tokens = vec![
      num("1"),
      op("+"),
      Token::new(TokenKind::Number, huge.as_str(), Span::new(SourceOffset(2), SourceOffset(402))),
    ];
    assert_eq!(
      evaluate(tokens),
      Err(CalcError::OutOfRange { literal: huge.clone(), pos: SourceOffset(2) }),
    );
  }

  #[test]
  fn test_result_overflow() {
    let big = format!("1{}", "0".repeat(300));
    let tokens = vec![num(&big), op("*"), num(&big)];
    assert_eq!(evaluate(tokens), Err(CalcError::Overflow));
    let tokens = vec![num(&big), op("/"), num("0.0000000001")];
    assert_eq!(evaluate(tokens), Err(CalcError::Overflow));
  }
}
