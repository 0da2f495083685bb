// Execution engine for the register interpreter

use crate::interpreter::arithmetic::{calculate, ArithmeticError};
use crate::interpreter::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use crate::interpreter::errors::RuntimeError;
use crate::memory::{OperandRef, Operation, Register, RegisterStore};
use crate::parser::{ast::Command, lexer::tokenize, parse::parse_command};
use crate::terminal::{Output, StdTerminal};
use tracing::{debug, trace, warn};

/// Interpreter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of registers that may be drained inside one another
    pub max_resolution_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_resolution_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

/// Whether the caller should keep feeding lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counts gathered over one call to [`Interpreter::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Lines consumed, including the `quit` line if one was seen
    pub lines: usize,
    pub printed: usize,
    pub diagnostics: usize,
    pub quit: bool,
}

/// The command dispatcher and register evaluator
pub struct Interpreter<O: Output = StdTerminal> {
    /// Every register referenced so far
    store: RegisterStore,

    /// Destination for printed values and diagnostics
    terminal: O,

    config: InterpreterConfig,

    /// Running totals, used to build [`RunSummary`]s
    printed: usize,
    diagnostics: usize,
}

impl Interpreter<StdTerminal> {
    /// Create an interpreter writing to stdout/stderr
    pub fn new(config: InterpreterConfig) -> Self {
        Self::with_output(config, StdTerminal)
    }
}

impl<O: Output> Interpreter<O> {
    pub fn with_output(config: InterpreterConfig, terminal: O) -> Self {
        Interpreter {
            store: RegisterStore::new(),
            terminal,
            config,
            printed: 0,
            diagnostics: 0,
        }
    }

    pub fn store(&self) -> &RegisterStore {
        &self.store
    }

    pub fn terminal(&self) -> &O {
        &self.terminal
    }

    /// Process lines until they run out or a `quit` line is reached
    pub fn run<I, S>(&mut self, lines: I) -> RunSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let printed_before = self.printed;
        let diagnostics_before = self.diagnostics;
        let mut summary = RunSummary::default();

        for line in lines {
            summary.lines += 1;
            if self.execute_line(line.as_ref()) == Flow::Quit {
                summary.quit = true;
                break;
            }
        }

        summary.printed = self.printed - printed_before;
        summary.diagnostics = self.diagnostics - diagnostics_before;
        debug!(?summary, registers = self.store.len(), "run finished");
        summary
    }

    /// Tokenize and execute one raw input line
    pub fn execute_line(&mut self, line: &str) -> Flow {
        self.execute_tokens(&tokenize(line))
    }

    /// Execute one tokenized line, reporting any error as a diagnostic
    pub fn execute_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Flow {
        let command = match parse_command(tokens) {
            Ok(command) => command,
            Err(e) => {
                self.report(&RuntimeError::from(e));
                return Flow::Continue;
            }
        };

        if command == Command::Quit {
            debug!("quit");
            return Flow::Quit;
        }

        if let Err(e) = self.execute_command(command) {
            self.report(&e);
        }
        Flow::Continue
    }

    /// Execute an already classified command
    pub fn execute_command(&mut self, command: Command) -> Result<(), RuntimeError> {
        match command {
            Command::Print { register } => {
                // Printing never creates a register
                if !self.store.contains(&register) {
                    return Err(RuntimeError::UndefinedRegister(register));
                }
                let value = self.perform_operations(&register)?;
                debug!(register = %register, value, "print");
                self.terminal.value(value);
                self.printed += 1;
                Ok(())
            }
            Command::Define {
                register,
                operator,
                operand,
            } => {
                debug!(register = %register, operator = %operator, operand = %operand, "enqueue");
                self.store
                    .get_or_create(&register)
                    .add_operation(operator, operand);
                Ok(())
            }
            Command::Quit | Command::Blank => Ok(()),
        }
    }

    /// Drain a register's queue, resolving register operands recursively,
    /// and return its final value.
    ///
    /// Referenced registers are drained as a side effect. A drained register
    /// returns its stored value without further arithmetic.
    pub fn perform_operations(&mut self, name: &str) -> Result<i64, RuntimeError> {
        let mut chain = Vec::new();
        self.drain(name, &mut chain)
    }

    /// Report an error on the diagnostic channel
    pub fn report(&mut self, error: &RuntimeError) {
        warn!(%error, "diagnostic");
        self.diagnostics += 1;
        self.terminal.diagnostic(&error.to_string());
    }

    /// `chain` holds the registers currently being drained, outermost first
    fn drain(&mut self, name: &str, chain: &mut Vec<String>) -> Result<i64, RuntimeError> {
        let register = self
            .store
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UndefinedRegister(name.to_string()))?;

        if register.is_in_progress() {
            chain.push(name.to_string());
            return Err(RuntimeError::CyclicDependency {
                chain: chain.clone(),
            });
        }
        if chain.len() >= self.config.max_resolution_depth {
            return Err(RuntimeError::ResolutionDepthExceeded {
                register: name.to_string(),
                limit: self.config.max_resolution_depth,
            });
        }

        register.set_in_progress(true);
        chain.push(name.to_string());
        let result = self.drain_queue(name, chain);
        chain.pop();
        if let Some(register) = self.store.get_mut(name) {
            register.set_in_progress(false);
        }
        result
    }

    fn drain_queue(&mut self, name: &str, chain: &mut Vec<String>) -> Result<i64, RuntimeError> {
        // A step is consumed as soon as it is popped, even if it then fails
        while let Some(step) = self.store.get_mut(name).and_then(Register::pop_operation) {
            trace!(
                register = name,
                operator = %step.operator,
                operand = %step.operand,
                "apply step"
            );
            let right = self.resolve_operand(name, &step, chain)?;
            self.apply_step(name, &step.operator, right)?;
        }
        self.current_value(name)
    }

    /// Classify the operand against the store as it is right now
    fn resolve_operand(
        &mut self,
        owner: &str,
        step: &Operation,
        chain: &mut Vec<String>,
    ) -> Result<i64, RuntimeError> {
        match OperandRef::classify(&step.operand, &self.store) {
            Some(OperandRef::Literal(n)) => Ok(n),
            Some(OperandRef::RegisterName(dependency)) => {
                trace!(register = owner, dependency = %dependency, "resolve register operand");
                self.drain(&dependency, chain)
            }
            None => Err(RuntimeError::UnresolvableOperand {
                operand: step.operand.clone(),
                register: owner.to_string(),
            }),
        }
    }

    fn apply_step(&mut self, name: &str, operator: &str, right: i64) -> Result<(), RuntimeError> {
        let left = self.current_value(name)?;
        let value = match calculate(left, operator, right) {
            Ok(value) => value,
            Err(ArithmeticError::InvalidOperator(operator)) => {
                self.report(&RuntimeError::InvalidOperator {
                    operator,
                    register: name.to_string(),
                });
                left
            }
            Err(ArithmeticError::Overflow { operation }) => {
                return Err(RuntimeError::IntegerOverflow {
                    operation,
                    register: name.to_string(),
                });
            }
        };

        if let Some(register) = self.store.get_mut(name) {
            register.set_value(value);
        }
        Ok(())
    }

    fn current_value(&self, name: &str) -> Result<i64, RuntimeError> {
        self.store
            .get(name)
            .map(Register::value)
            .ok_or_else(|| RuntimeError::UndefinedRegister(name.to_string()))
    }
}
