use std::{fs, process::ExitCode};

use clap::Parser;
use descalc::{
    calculate,
    error::Error,
    interpreter::lexer::{Token, tokenize},
    validate,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// descalc evaluates arithmetic expressions, keeping track of whether the
/// result is an integer.
///
/// Without an expression or a file, descalc starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the recognized tokens before each result.
    #[arg(short, long)]
    tokens: bool,

    /// Only check the syntax; do not evaluate.
    #[arg(short, long)]
    check: bool,

    /// Evaluate every non-blank line of this file.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<String>,

    /// The expression to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Some(path) = &args.file {
        let Ok(contents) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        let mut ok = true;
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            ok &= run_line(line, &args);
        }
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match &args.expression {
        Some(expression) => {
            if run_line(expression, &args) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => match run_repl(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Handles one expression; returns whether it succeeded.
fn run_line(line: &str, args: &Args) -> bool {
    if args.tokens {
        match tokenize(line) {
            Ok(tokens) => println!("{}", format_tokens(&tokens)),
            Err(err) => {
                report(&Error::from(err));
                return false;
            },
        }
    }

    let outcome = if args.check {
        validate(line).map(|_| "ok".to_string())
    } else {
        calculate(line).map(|n| n.to_string())
    };

    match outcome {
        Ok(text) => {
            println!("{text}");
            true
        },
        Err(err) => {
            report(&err);
            false
        },
    }
}

fn run_repl(args: &Args) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                run_line(&line, args);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

fn report(err: &Error) {
    eprintln!("{} error: {err}", err.kind());
}
