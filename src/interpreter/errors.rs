//! Runtime error types for the register interpreter
//!
//! This module defines [`RuntimeError`], which represents every diagnostic the
//! interpreter can report while processing input lines.
//!
//! No runtime error is fatal: the offending line (or arithmetic step) is
//! reported on the diagnostic channel and processing continues with the next line.

use crate::parser::parse::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported while dispatching and evaluating lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Operator name is not one of `add`, `subtract`, `multiply`.
    /// The step is skipped and the register keeps its value.
    #[error("'{operator}' is not a valid operator (register '{register}')")]
    InvalidOperator { operator: String, register: String },

    /// `print` named a register that was never referenced
    #[error("register '{0}' does not exist, cannot print its value")]
    UndefinedRegister(String),

    /// Line does not match any command shape
    #[error(transparent)]
    InvalidLine(#[from] ParseError),

    /// Operand token is neither an existing register nor an integer literal
    #[error("cannot resolve operand '{operand}' of register '{register}': not a register or an integer")]
    UnresolvableOperand { operand: String, register: String },

    /// A register was reached again while its own queue was being drained
    #[error("cyclic dependency between registers: {}", .chain.join(" -> "))]
    CyclicDependency { chain: Vec<String> },

    /// Nested register resolution went deeper than the configured limit
    #[error("register '{register}' exceeds the maximum resolution depth of {limit}")]
    ResolutionDepthExceeded { register: String, limit: usize },

    /// Arithmetic result does not fit in a 64-bit signed integer
    #[error("integer overflow in '{operation}' (register '{register}')")]
    IntegerOverflow { operation: String, register: String },

    /// Input file could not be opened or read
    #[error("no file with name '{}' found", .path.display())]
    FileNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_chain() {
        let err = RuntimeError::CyclicDependency {
            chain: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(
            err.to_string(),
            "cyclic dependency between registers: a -> b -> a"
        );
    }

    #[test]
    fn test_undefined_register_message() {
        let err = RuntimeError::UndefinedRegister("c".into());
        assert!(err.to_string().contains("does not exist"));
    }
}
