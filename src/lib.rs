use thiserror::Error;

use crate::{parser::ParserError, runtime::interpreter::ArithmeticError};

pub mod ast;
pub mod parser;
pub mod repl;
pub mod runtime;
pub mod utils;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{0}")]
    Parser(ParserError),
    #[error("{0}")]
    Arithmetic(ArithmeticError),
}

impl From<ParserError> for CalcError {
    fn from(value: ParserError) -> Self {
        Self::Parser(value)
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(value: ArithmeticError) -> Self {
        Self::Arithmetic(value)
    }
}
