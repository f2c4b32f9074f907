pub mod binary;

pub use binary::BinaryOperator;

/// A single classified input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Arithmetic {
        left: f64,
        operator: BinaryOperator,
        right: f64,
    },
    Clear,
    Exit,
}
