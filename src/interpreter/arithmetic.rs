//! Arithmetic on register values
//!
//! Operators are kept as raw names in register queues and only validated
//! here, when a step is actually applied.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Recognised arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
        }
    }

    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
        }
    }

    /// Apply the operator with overflow checking
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ArithmeticError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
        };
        result.ok_or(ArithmeticError::Overflow {
            operation: format!("{} {} {}", left, self.symbol(), right),
        })
    }
}

impl FromStr for Operator {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operator::Add),
            "subtract" => Ok(Operator::Subtract),
            "multiply" => Ok(Operator::Multiply),
            other => Err(ArithmeticError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The caller reports this and keeps the left operand
    #[error("'{0}' is not a valid operator")]
    InvalidOperator(String),

    #[error("integer overflow in {operation}")]
    Overflow { operation: String },
}

/// Compute `left <operator> right`.
///
/// An unknown operator yields [`ArithmeticError::InvalidOperator`]; callers
/// treat that as a no-op step and continue with `left` unchanged.
pub fn calculate(left: i64, operator: &str, right: i64) -> Result<i64, ArithmeticError> {
    operator.parse::<Operator>()?.apply(left, right)
}
