use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates both operands of a binary expression, left first, then
    /// applies `op`.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, relational and equality
    /// operators to `eval_comparison`, and `&` / `$` to `eval_text`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, LineBreak, Mod, Mul,
            NotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, line),
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Concat | LineBreak => Ok(Self::eval_text(op, left, right)),
        }
    }

    /// Widens both operands to `f64`.
    ///
    /// # Returns
    /// - `Ok((f64, f64))`: If both operands are numeric.
    /// - `Err(RuntimeError::ExpectedNumbers)`: Otherwise.
    pub(in crate::interpreter::evaluator) fn widen(op: BinaryOperator,
                                                   left: &Value,
                                                   right: &Value,
                                                   line: usize)
                                                   -> EvalResult<(f64, f64)> {
        match (left.as_float(), right.as_float()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError::ExpectedNumbers { operator: op.to_string(),
                                                     line }),
        }
    }
}
