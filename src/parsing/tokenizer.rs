
use super::source::{SourceOffset, Span};
use super::token::{Token, TokenKind};
use crate::error::CalcError;

use regex::Regex;
use once_cell::sync::Lazy;

/// Cursor over an expression string. Tracks how much of the input
/// has been consumed so far.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. Never advances beyond the end of the input.
  /// `amount` must land on a character boundary.
  pub fn advance(&mut self, amount: usize) -> TokenizerMatch<'a> {
    let amount = amount.min(self.input.len());
    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position.0 += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start,
      end: self.position,
    }
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    debug_assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.end()))
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

/// Splits an expression into number, operator, and parenthesis
/// tokens, in source order.
///
/// Parentheses are checked for balance here: a `)` without a matching
/// `(` fails immediately, and any `(` still open at the end of input
/// fails once the scan completes. Operator placement is NOT checked;
/// `2++2` tokenizes fine and is rejected by the evaluator.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
  let mut state = TokenizerState::new(expression);
  let mut tokens = Vec::new();
  let mut open_parens: usize = 0;

  while let Some(ch) = state.peek() {
    if let Some(number) = read_number_literal(&mut state) {
      tokens.push(number?);
    } else if let Some(op) = read_operator(&mut state) {
      tokens.push(op);
    } else if let Some(m) = state.read_literal("(") {
      tokens.push(Token::new(TokenKind::LeftParen, m.as_str(), m.span()));
      open_parens += 1;
    } else if let Some(m) = state.read_literal(")") {
      tokens.push(Token::new(TokenKind::RightParen, m.as_str(), m.span()));
      open_parens = open_parens.checked_sub(1).ok_or(CalcError::UnbalancedParentheses)?;
    } else {
      return Err(CalcError::InvalidSymbol { ch, pos: state.current_pos() });
    }
  }

  if open_parens != 0 {
    return Err(CalcError::UnbalancedParentheses);
  }
  Ok(tokens)
}

/// Reads a maximal run of digits and decimal points. A run that is
/// not a valid decimal literal (for instance, `1.2.3` or a lone `.`)
/// or that is too large to represent as a finite `f64` is an error.
fn read_number_literal(state: &mut TokenizerState<'_>) -> Option<Result<Token, CalcError>> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());
  let m = state.read_regex(&RE)?;
  let literal = m.as_str();
  let is_usable = literal.matches('.').count() <= 1 &&
    literal.parse::<f64>().is_ok_and(f64::is_finite);
  if !is_usable {
    return Some(Err(CalcError::InvalidExpression));
  }
  Some(Ok(Token::new(TokenKind::Number, literal, m.span())))
}

fn read_operator(state: &mut TokenizerState<'_>) -> Option<Token> {
  match state.peek()? {
    '+' | '-' | '*' | '/' => {
      let m = state.advance(1);
      Some(Token::new(TokenKind::Operator, m.as_str(), m.span()))
    }
    _ => None,
  }
}
