//! Line classification
//!
//! This module provides [`parse_command`], which maps a tokenized line onto a
//! [`Command`] purely by its shape:
//!
//! ```text
//! []                         → Blank
//! [quit]                     → Quit
//! [print, name]              → Print
//! [name, operator, operand]  → Define
//! anything else              → ParseError
//! ```
//!
//! Nothing here looks at the register store; operand classification is left
//! to the interpreter at drain time.

use crate::interpreter::constants::{PRINT_KEYWORD, QUIT_KEYWORD};
use crate::parser::ast::Command;
use thiserror::Error;

/// Line with a shape that matches no command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid line: {}", .tokens.join(" "))]
pub struct ParseError {
    pub tokens: Vec<String>,
}

/// Classify one tokenized line
pub fn parse_command<S: AsRef<str>>(tokens: &[S]) -> Result<Command, ParseError> {
    let words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    match words.as_slice() {
        [] => Ok(Command::Blank),
        [keyword] if *keyword == QUIT_KEYWORD => Ok(Command::Quit),
        [keyword, register] if *keyword == PRINT_KEYWORD => Ok(Command::Print {
            register: register.to_string(),
        }),
        [register, operator, operand] => Ok(Command::Define {
            register: register.to_string(),
            operator: operator.to_string(),
            operand: operand.to_string(),
        }),
        _ => Err(ParseError {
            tokens: words.iter().map(|w| w.to_string()).collect(),
        }),
    }
}
