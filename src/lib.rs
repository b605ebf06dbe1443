
pub mod calculator;
pub mod config;
pub mod error;
pub mod parsing;
pub mod service;
pub mod stack;

pub use calculator::calculate;
pub use error::CalcError;
