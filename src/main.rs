use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use codelang::{
    error::Diagnostics,
    interpreter::lexer::{TokenKind, scan},
    run,
};

/// codelang runs programs written in CODE, a small typed teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells codelang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the scanned tokens instead of running the program.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::from(66);
            },
        }
    } else {
        args.contents
    };

    if args.tokens {
        return print_tokens(&script);
    }

    let result = {
        let mut output = io::stdout().lock();
        let result = run(&script, &mut io::stdin().lock(), &mut output);
        let _ = output.flush();
        result
    };

    match result {
        Ok(()) => {
            if !mentions_display(&script) {
                println!("No error");
            }
            ExitCode::SUCCESS
        },
        Err(diagnostics) => {
            eprintln!("{diagnostics}");
            if diagnostics.had_error() {
                ExitCode::from(65)
            } else {
                ExitCode::from(70)
            }
        },
    }
}

fn print_tokens(script: &str) -> ExitCode {
    let mut diagnostics = Diagnostics::new();
    for token in scan(script, &mut diagnostics) {
        println!("{:>4} {:?} {:?}", token.line, token.kind, token.lexeme);
    }

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{diagnostics}");
        ExitCode::from(65)
    }
}

/// A clean run of a program without any `DISPLAY` statement prints a
/// confirmation instead of staying silent.
fn mentions_display(script: &str) -> bool {
    scan(script, &mut Diagnostics::new()).iter()
                                         .any(|token| token.kind == TokenKind::Display)
}
