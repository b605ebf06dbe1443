
//! Tokenizing and evaluating arithmetic expressions.

pub mod evaluator;
pub mod operator;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use evaluator::evaluate;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
