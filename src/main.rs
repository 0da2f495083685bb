// regcalc: lazy register calculator

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use regcalc::input::{interactive_lines, run_file};
use regcalc::interpreter::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use regcalc::interpreter::engine::{Interpreter, InterpreterConfig};

/// Evaluate register commands from a file, or from standard input until `quit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File of commands to run. Reads standard input when omitted.
    file: Option<PathBuf>,

    /// Maximum number of registers resolved inside one another during a print.
    #[arg(long, default_value_t = DEFAULT_MAX_RESOLUTION_DEPTH, value_parser = parse_max_depth)]
    max_depth: usize,
}

/// Resolution depth must allow at least the printed register itself.
fn parse_max_depth(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(e) => Err(e.to_string()),
    }
}

/// Install a stderr tracing subscriber when `RUST_LOG` is set.
fn init_tracing() -> Result<(), Box<dyn Error>> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .try_init()?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing()?;
    let args = Args::parse();

    let config = InterpreterConfig {
        max_resolution_depth: args.max_depth,
    };
    let mut interpreter = Interpreter::new(config);

    let summary = match &args.file {
        Some(path) => run_file(&mut interpreter, path),
        None => interpreter.run(interactive_lines(io::stdin().lock())),
    };

    tracing::info!(
        lines = summary.lines,
        printed = summary.printed,
        diagnostics = summary.diagnostics,
        "done"
    );
    Ok(())
}
