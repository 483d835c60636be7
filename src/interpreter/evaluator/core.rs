use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the chain of variable scopes and
/// the reader and writer that `SCAN` and `DISPLAY` use.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::interpret`] executes the
/// parsed program and stops at the first runtime error.
pub struct Context<'io> {
    /// Variables visible to the running program.
    pub environment: Environment,
    pub(in crate::interpreter::evaluator) input:  &'io mut dyn BufRead,
    pub(in crate::interpreter::evaluator) output: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with an empty root scope.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::evaluator::core::Context;
    ///
    /// let mut input = std::io::empty();
    /// let mut output: Vec<u8> = Vec::new();
    /// let context = Context::new(&mut input, &mut output);
    ///
    /// assert_eq!(context.environment.depth(), 1);
    /// ```
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { environment: Environment::new(),
               input,
               output }
    }
}

impl Context<'_> {
    /// Executes a program's statements in order.
    ///
    /// The first runtime error halts the run and is returned; statements after
    /// it are never executed.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        debug!("interpreting {} top-level statements", statements.len());
        statements.iter()
                  .try_for_each(|statement| self.execute(statement))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, groups, unary, binary and logical operations, variable reads
    /// and assignments.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output: Vec<u8> = Vec::new();
    /// let mut ctx = Context::new(&mut input, &mut output);
    /// let expr = Expr::Literal { value: LiteralValue::Integer(10),
    ///                            line:  1, };
    ///
    /// assert_eq!(ctx.evaluate(&expr).unwrap(), Value::Integer(10));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary_op(left, *op, right, *line),
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }
}
