//! # Introduction
//!
//! regcalc interprets a line-oriented register language. Each line either
//! queues an arithmetic step on a named register or prints a register's
//! value. Steps are evaluated lazily: nothing is computed until a register is
//! printed, at which point its queue (and the queues of any registers it
//! references) is drained.
//!
//! ## Execution pipeline
//!
//! ```text
//! Line → Lexer → Command → Interpreter → RegisterStore → Terminal
//! ```
//!
//! 1. [`parser`] — lowercases and splits each line, then classifies it by shape.
//! 2. [`interpreter`] — dispatches commands and drains registers on `print`.
//! 3. [`memory`] — [`memory::Register`]s with their operation queues, owned by a
//!    [`memory::RegisterStore`].
//! 4. [`terminal`] — separate channels for printed values and diagnostics, plus a
//!    [`terminal::MockTerminal`] that records both.
//! 5. [`input`] — file and interactive line suppliers used by the binary.
//!
//! ## Language
//!
//! ```text
//! <register> <add|subtract|multiply> <register-or-integer>
//! print <register>
//! quit
//! ```

pub mod input;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;
