use thiserror::Error;

use crate::ast::{Action, BinaryOperator};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Input must be: <number> <operator> <number>")]
    InvalidFormat,
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Classifies one input line.
///
/// Keywords are matched case-insensitively on the trimmed line. Anything else
/// has to be exactly `<number> <operator> <number>`, separated by any run of
/// whitespace. The operator is validated before either number, and numbers
/// are parsed left to right so the first bad token is the one reported.
pub fn parse(line: &str) -> Result<Action, ParserError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(ParserError::EmptyInput);
    }

    match text.to_lowercase().as_str() {
        "exit" | "quit" => return Ok(Action::Exit),
        "clear" => return Ok(Action::Clear),
        _ => {}
    }

    let mut parts = text.split_whitespace();
    let (Some(left), Some(operator), Some(right), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParserError::InvalidFormat);
    };

    let Some(operator) = BinaryOperator::from_symbol(operator) else {
        return Err(ParserError::UnsupportedOperator(operator.to_string()));
    };

    Ok(Action::Arithmetic {
        left: parse_number(left)?,
        operator,
        right: parse_number(right)?,
    })
}

fn parse_number(token: &str) -> Result<f64, ParserError> {
    token
        .parse::<f64>()
        .map_err(|_| ParserError::InvalidNumber(token.to_string()))
}
