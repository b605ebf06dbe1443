
use super::source::Span;

/// A classified unit of an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  kind: TokenKind,
  value: String,
  span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  /// A decimal literal, such as `2` or `2.5`.
  Number,
  /// One of the binary operators `+ - * /`.
  Operator,
  LeftParen,
  RightParen,
}

impl Token {
  pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
    Self { kind, value: value.into(), span }
  }

  pub fn kind(&self) -> TokenKind {
    self.kind
  }

  /// The exact substring of the input that produced this token.
  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn span(&self) -> Span {
    self.span
  }
}

