use std::{fs, process::ExitCode};

use clap::Parser;
use lrcalc::{Evaluator, Mode, evaluate_lines};
use tracing_subscriber::{EnvFilter, fmt};

/// lrcalc evaluates arithmetic expressions strictly from left to right, with
/// no operator precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lrcalc to look at a file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// Reports unsupported operators, malformed numbers, division by zero
    /// and misplaced tokens as errors instead of skipping over them.
    #[arg(short, long)]
    strict: bool,

    /// Evaluates every non-blank line as its own expression and prints one
    /// result per line.
    #[arg(short, long)]
    lines: bool,

    contents: String,
}

fn init_logging() {
    // LRCALC_LOG wins over RUST_LOG; warnings only by default.
    let filter = EnvFilter::try_from_env("LRCALC_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mode = if args.strict { Mode::Strict } else { Mode::Lenient };

    let results = if args.lines {
        evaluate_lines(&source, mode)
    } else {
        let mut evaluator = Evaluator::new();
        evaluator.set_expression(source);
        vec![evaluator.evaluate_with(mode)]
    };

    let mut failed = false;
    for result in results {
        match result {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
