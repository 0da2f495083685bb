//! Input line parser
//!
//! This module turns raw input lines into [`ast::Command`]s:
//! - [`lexer`]: Tokenization (raw line → lowercase words)
//! - [`parse`]: Classification (words → command, by shape)
//! - [`ast`]: Command definitions
//!
//! # Grammar
//!
//! ```text
//! <register> <operator> <operand>
//! print <register>
//! quit
//! ```
//!
//! Operators and operands are not interpreted here; both are validated lazily
//! when the owning register is evaluated.

pub mod ast;
pub mod lexer;
pub mod parse;
