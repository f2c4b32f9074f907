use thiserror::Error;

use crate::ast::BinaryOperator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("Division by zero")]
    DivisionByZero,
}

/// Evaluates `left <operator> right`, where `operator` is a raw symbol.
///
/// Symbols outside `+ - * /` are rejected here as well as in the parser,
/// since callers are free to hand over any text.
pub fn evaluate(left: f64, operator: &str, right: f64) -> Result<f64, ArithmeticError> {
    let Some(operator) = BinaryOperator::from_symbol(operator) else {
        return Err(ArithmeticError::UnsupportedOperator(operator.to_string()));
    };

    operator.handle(left, right)
}
