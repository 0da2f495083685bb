//! Register memory model
//!
//! This module provides the state that persists across input lines:
//! - [`register`]: [`register::Register`] accumulators with queued operations
//! - [`store`]: the [`store::RegisterStore`] that owns every register
//!
//! # Deferred operands
//!
//! Operand tokens are stored verbatim and classified only when their register
//! is drained:
//! ```text
//! token names an existing register  →  OperandRef::RegisterName
//! token parses as a base-10 integer →  OperandRef::Literal
//! otherwise                         →  unresolvable operand error
//! ```

pub mod register;
pub mod store;

pub use register::{OperandRef, Operation, Register};
pub use store::RegisterStore;

/// Parse an optionally signed base-10 integer literal
pub fn parse_literal(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}
