/// Lexical errors.
///
/// Raised while turning source text into tokens: stray characters, literals
/// that never close, and malformed character or escape literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing tokens into
/// statements. Parse errors include missing delimiters, misplaced
/// declarations, invalid assignment targets, and a malformed program block.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// undefined variables, or failed reads of program input.
pub mod runtime_error;
/// Error collection.
///
/// Gathers every error reported during a run and tells apart failures that
/// stop evaluation from starting and failures raised by evaluation itself.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
