/// Parser state and the program entry point.
///
/// Holds the `Parser` struct, the `ParseResult` alias, and the top-level loop
/// that requires a single `BEGIN CODE … END CODE` block.
pub mod core;

/// Declarations and simple statements.
///
/// Parses typed declarations, `DISPLAY`, `SCAN` and expression statements,
/// and enforces that declarations precede executable code.
pub mod statement;

/// Block statements.
///
/// Parses the program block and the `IF`, `WHILE` and `FOR` constructs whose
/// bodies are closed by a matching `END` keyword pair.
pub mod block;

/// Binary expression parsing.
///
/// Implements the precedence levels from assignment down to factor, including
/// the short-circuit logical operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, variables and parenthesized groups.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides token cursor helpers and error recovery by synchronization.
pub mod utils;
