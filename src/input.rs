//! Line suppliers
//!
//! The interpreter consumes raw lines; this module provides the two ways the
//! binary obtains them: all lines of a file, or standard input read one line
//! at a time until `quit`.

use crate::interpreter::constants::QUIT_KEYWORD;
use crate::interpreter::engine::{Interpreter, RunSummary};
use crate::interpreter::errors::RuntimeError;
use crate::terminal::Output;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Read every line of a file
pub fn read_file(path: &Path) -> Result<Vec<String>, RuntimeError> {
    let source = fs::read_to_string(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "failed to read input file");
        RuntimeError::FileNotFound {
            path: path.to_path_buf(),
        }
    })?;
    Ok(source.lines().map(str::to_string).collect())
}

/// Run every line of a file through the interpreter.
///
/// A file that cannot be read is reported as a diagnostic and the run
/// proceeds with no lines.
pub fn run_file<O: Output>(interpreter: &mut Interpreter<O>, path: &Path) -> RunSummary {
    match read_file(path) {
        Ok(lines) => interpreter.run(lines),
        Err(e) => {
            interpreter.report(&e);
            interpreter.run(Vec::<String>::new())
        }
    }
}

/// Lines from an interactive reader, ending before the first `quit` line.
///
/// Reading stops at end of input or on the first I/O error.
pub fn interactive_lines<R: BufRead>(reader: R) -> impl Iterator<Item = String> {
    reader
        .lines()
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!(error = %e, "stopped reading input");
                None
            }
        })
        .take_while(|line| line.to_lowercase() != QUIT_KEYWORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::InterpreterConfig;
    use crate::terminal::MockTerminal;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn interpreter() -> Interpreter<MockTerminal> {
        Interpreter::with_output(InterpreterConfig::default(), MockTerminal::new())
    }

    fn write_script(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_read_file_strips_crlf() {
        let file = write_script("a add 1\r\nprint a\r\n\r\nb add 2\n");
        let lines = read_file(file.path()).expect("Failed to read script");
        assert_eq!(lines, vec!["a add 1", "print a", "", "b add 2"]);
    }

    #[test]
    fn test_run_file_stops_at_quit() {
        let file = write_script(
            "Revenue ADD 200\r\nexpenses add 50\r\nrevenue subtract expenses\r\n\r\nprint revenue\r\nquit\r\nprint expenses\r\n",
        );
        let mut interp = interpreter();
        let summary = run_file(&mut interp, file.path());

        assert_eq!(interp.terminal().get_output(), vec!["150"]);
        assert!(interp.terminal().get_diagnostics().is_empty());
        assert_eq!(summary.lines, 6);
        assert_eq!(summary.printed, 1);
        assert!(summary.quit);
    }

    #[test]
    fn test_run_missing_file_reports_and_runs_nothing() {
        let mut interp = interpreter();
        let summary = run_file(&mut interp, Path::new("definitely/not/here.txt"));

        assert!(interp.terminal().get_output().is_empty());
        assert_eq!(
            interp.terminal().get_diagnostics(),
            vec!["no file with name 'definitely/not/here.txt' found"]
        );
        assert_eq!(summary.lines, 0);
        assert!(!summary.quit);
        assert!(interp.store().is_empty());
    }

    #[test]
    fn test_interactive_stops_at_quit() {
        let input = Cursor::new("a add 1\nprint a\nQUIT\nprint b\n");
        let lines: Vec<String> = interactive_lines(input).collect();
        assert_eq!(lines, vec!["a add 1", "print a"]);
    }

    #[test]
    fn test_interactive_runs_to_end_of_input() {
        let input = Cursor::new("a add 1\nprint a");
        assert_eq!(interactive_lines(input).count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here.txt");
        assert_eq!(
            read_file(path),
            Err(RuntimeError::FileNotFound {
                path: path.to_path_buf()
            })
        );
    }
}
