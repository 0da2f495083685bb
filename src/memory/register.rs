//! Registers and their pending operations
//!
//! A [`Register`] is a named accumulator with a FIFO queue of [`Operation`]s.
//! Operations store their operand as the raw token from the input line; the
//! token is only classified into an [`OperandRef`] when the register is
//! drained, so the same token may mean a literal at one point in a run and a
//! register at another.

use super::parse_literal;
use super::store::RegisterStore;
use std::collections::VecDeque;

/// Right-hand side of an arithmetic step, classified at drain time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandRef {
    Literal(i64),
    RegisterName(String),
}

impl OperandRef {
    /// Classify an operand token against the current store contents.
    ///
    /// An existing register always wins over a literal reading of the token.
    /// Returns `None` when the token is neither a register nor an integer.
    pub fn classify(token: &str, store: &RegisterStore) -> Option<Self> {
        if store.contains(token) {
            Some(OperandRef::RegisterName(token.to_string()))
        } else {
            parse_literal(token).map(OperandRef::Literal)
        }
    }
}

/// One queued step: an operator name and the unclassified operand token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub operator: String,
    pub operand: String,
}

impl Operation {
    pub fn new(operator: impl Into<String>, operand: impl Into<String>) -> Self {
        Operation {
            operator: operator.into(),
            operand: operand.into(),
        }
    }
}

/// A named integer accumulator with deferred operations
#[derive(Debug, Clone)]
pub struct Register {
    name: String,
    value: i64,
    operations: VecDeque<Operation>,
    in_progress: bool, // Set while this register's own queue is being drained
}

impl Register {
    pub fn new(name: impl Into<String>) -> Self {
        Register {
            name: name.into(),
            value: 0,
            operations: VecDeque::new(),
            in_progress: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current accumulator value (the result of the last drain)
    pub fn value(&self) -> i64 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Append a step to the tail of the queue. The operator is not validated here.
    pub fn add_operation(&mut self, operator: impl Into<String>, operand: impl Into<String>) {
        self.operations.push_back(Operation::new(operator, operand));
    }

    /// Remove and return the head of the queue
    pub fn pop_operation(&mut self) -> Option<Operation> {
        self.operations.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_drained(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    pub(crate) fn set_in_progress(&mut self, in_progress: bool) {
        self.in_progress = in_progress;
    }
}
