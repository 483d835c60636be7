/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, text joining and short-circuit logic.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements all unary operations: arithmetic negation and identity, logical
/// NOT, and the newline prefix.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the expression dispatcher, and the
/// `EvalResult` alias used throughout evaluation.
pub mod core;

/// Statement execution.
///
/// Runs declarations, control flow and blocks, managing one scope per block.
pub mod statement;

/// Program input and output.
///
/// Implements `DISPLAY` and `SCAN`, including the type inference applied to
/// every scanned field.
pub mod io;
