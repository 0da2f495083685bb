// Output channels for computed values and diagnostics

use std::io::{self, Write};

/// Which stream a line of output belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Value,
    Diagnostic,
}

/// Destination for interpreter output.
///
/// Computed values and diagnostics are kept on separate channels so that
/// scripted callers can read results without filtering out error text.
pub trait Output {
    fn value(&mut self, value: i64);
    fn diagnostic(&mut self, message: &str);
}

/// Writes values to stdout and diagnostics to stderr
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Output for StdTerminal {
    fn value(&mut self, value: i64) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", value) {
            tracing::warn!(error = %e, "failed to write value to stdout");
        }
    }

    fn diagnostic(&mut self, message: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", message) {
            tracing::warn!(error = %e, "failed to write diagnostic to stderr");
        }
    }
}

/// Mock terminal that records output in order, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
}

/// A line of recorded output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub channel: Channel,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Lines written to the value channel
    pub fn get_output(&self) -> Vec<String> {
        self.channel_lines(Channel::Value)
    }

    /// Lines written to the diagnostic channel
    pub fn get_diagnostics(&self) -> Vec<String> {
        self.channel_lines(Channel::Diagnostic)
    }

    fn channel_lines(&self, channel: Channel) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.channel == channel)
            .map(|line| line.text.clone())
            .collect()
    }
}

impl Output for MockTerminal {
    fn value(&mut self, value: i64) {
        self.lines.push(TerminalLine {
            text: value.to_string(),
            channel: Channel::Value,
        });
    }

    fn diagnostic(&mut self, message: &str) {
        self.lines.push(TerminalLine {
            text: message.to_string(),
            channel: Channel::Diagnostic,
        });
    }
}
