//! Register interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Interpreter`], which dispatches commands and drains registers
//! - [`arithmetic`]: Operator validation and checked arithmetic
//! - [`errors`]: Runtime error types
//! - [`constants`]: Keywords and limits
//!
//! # Execution Model
//!
//! Definition lines only append to a register's queue. Work happens when a
//! register is printed: its queue is drained front to back, and any operand
//! naming another register drains that register first. Each drain consumes
//! the queue, so later prints of the same register reuse the stored value.
//!
//! # Cycles
//!
//! A register that is reached again while its own queue is being drained is
//! reported as a cyclic dependency instead of being re-entered. Chains of
//! distinct registers are bounded by
//! [`engine::InterpreterConfig::max_resolution_depth`].

pub mod arithmetic;
pub mod constants;
pub mod engine;
pub mod errors;
