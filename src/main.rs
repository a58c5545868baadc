//! Kaleidoscope front end CLI.
//!
//! Reads a program from a file (or stdin), parses it and prints one line per
//! top-level unit. Pass `--tokens` to print the token stream instead.

use std::{fs::read_to_string, io, path::PathBuf, process::ExitCode};

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kaleidoscope::{
    ast::declarations::TopLevel,
    display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, stream::CharStream, tokens::TokenKind},
    parser::{
        lookups::PrecedenceTable,
        parser::{drive, Consumer, ErrorPolicy, Parser},
    },
};

/// Kaleidoscope lexer and parser.
#[derive(ClapParser)]
#[command(name = "kaleidoscope", about = "Parse Kaleidoscope programs")]
struct Cli {
    /// Input source file. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Stop at the first parse error.
    #[arg(long = "halt-on-error")]
    halt_on_error: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

struct Printer;

impl Consumer for Printer {
    fn consume(&mut self, unit: TopLevel) {
        println!("Parsed a {}: {}", unit.describe(), unit);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let errors = match &cli.file {
        Some(path) => {
            let source = match read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!("Error: failed to read {}: {}", path.display(), err);
                    return ExitCode::FAILURE;
                }
            };

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            info!(file = %file_name, bytes = source.len(), "read source");

            let errors = run(Lexer::from_source(&source, Some(file_name)), &cli);
            for error in &errors {
                eprint!("{}", display_error(error, &source));
            }
            errors.len()
        }
        None => {
            let lexer = Lexer::from_reader(io::stdin().lock(), Some(String::from("stdin")));

            let errors = run(lexer, &cli);
            for error in &errors {
                eprintln!("Error: {} ({})", error.get_error_name(), error);
            }
            errors.len()
        }
    };

    debug!(errors, "done");

    if errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run<I: CharStream>(lexer: Lexer<I>, cli: &Cli) -> Vec<Error> {
    if cli.tokens {
        return print_tokens(lexer);
    }

    let policy = if cli.halt_on_error {
        ErrorPolicy::Halt
    } else {
        ErrorPolicy::Continue
    };

    let mut parser = Parser::new(lexer, PrecedenceTable::default());
    drive(&mut parser, &mut Printer, policy)
}

fn print_tokens<I: CharStream>(mut lexer: Lexer<I>) -> Vec<Error> {
    let mut errors = vec![];

    loop {
        match lexer.next_token() {
            Ok(token) => {
                println!("{:>5} {}", token.span.start.0, token);
                if token.kind == TokenKind::EOF {
                    return errors;
                }
            }
            Err(err) => errors.push(err),
        }
    }
}
