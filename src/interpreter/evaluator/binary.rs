/// Binary operator dispatch.
///
/// Evaluates both operands and routes the operator to its handler.
pub mod core;

/// Arithmetic on numbers.
///
/// Integer arithmetic when both operands are integers, floating-point
/// arithmetic otherwise, with division by zero and overflow reported.
pub mod scalar;

/// Relational and equality comparisons.
pub mod comparison;

/// Short-circuit `AND` and `OR`.
pub mod logic;

/// Text joining with `&` and `$`.
pub mod text;
