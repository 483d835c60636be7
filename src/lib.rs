//! # codelang
//!
//! codelang is an interpreter for CODE, a small typed teaching language
//! written in Rust. Programs live in a single `BEGIN CODE … END CODE` block,
//! declare typed variables up front, and talk to the user through `DISPLAY`
//! and `SCAN`.
//!
//! A run goes through three phases: [`interpreter::lexer::scan`],
//! [`interpreter::parser::core::parse`] and
//! [`interpreter::evaluator::core::Context::interpret`]. Errors from every
//! phase are gathered in [`error::Diagnostics`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    error::Diagnostics,
    interpreter::{evaluator::core::Context, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The tree
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program
/// and the `Diagnostics` collector that gathers them. Every error carries the
/// source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Separates errors that prevent evaluation from errors raised by it.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and variable scopes to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase.
pub mod interpreter;

/// Runs a program from source text.
///
/// The source is scanned and parsed first. If either phase reported an error,
/// nothing is executed. Otherwise the program runs against `input` (read by
/// `SCAN`) and `output` (written by `DISPLAY`) until it finishes or raises a
/// runtime error.
///
/// # Errors
/// Returns the collected [`Diagnostics`] if any lexical, syntax or runtime
/// error occurred. [`Diagnostics::had_error`] tells the first two apart from
/// the last.
///
/// # Examples
/// ```
/// use codelang::run;
///
/// let source = "BEGIN CODE\nINT x = 40 + 2\nDISPLAY: x\nEND CODE";
/// let mut output: Vec<u8> = Vec::new();
///
/// run(source, &mut std::io::empty(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "42\n");
///
/// // Example with an intentional error (declaration after executable code).
/// let source = "BEGIN CODE\nDISPLAY: 1\nINT y\nEND CODE";
/// let diagnostics = run(source, &mut std::io::empty(), &mut Vec::<u8>::new()).unwrap_err();
/// assert!(diagnostics.had_error());
/// ```
pub fn run(source: &str,
           input: &mut dyn BufRead,
           output: &mut dyn Write)
           -> Result<(), Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);

    if diagnostics.had_error() {
        debug!("skipping evaluation after {} error(s)", diagnostics.len());
        return Err(diagnostics);
    }

    let mut context = Context::new(input, output);
    if let Err(error) = context.interpret(&statements) {
        diagnostics.report(error);
        return Err(diagnostics);
    }

    Ok(())
}
