use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates the operand of a unary expression, then applies `op`.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         line: usize)
                         -> EvalResult<Value> {
        let value = self.evaluate(expr)?;
        Self::eval_unary(op, &value, line)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: negation of the operand's truthiness.
    /// - `Negate`: numeric negation; integers stay integers.
    /// - `Plus`: numeric identity; rejects non-numeric operands.
    /// - `LineBreak`: the operand's display text preceded by a newline.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Logical not
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// // Plus requires a number
    /// assert!(Context::eval_unary(UnaryOperator::Plus, &Value::from("x"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Float(r) => Ok(Value::Float(-r)),
                _ => Err(RuntimeError::ExpectedNumber { operator: op.to_string(),
                                                        line }),
            },
            UnaryOperator::Plus => {
                if value.is_numeric() {
                    Ok(value.clone())
                } else {
                    Err(RuntimeError::ExpectedNumber { operator: op.to_string(),
                                                       line })
                }
            },
            UnaryOperator::LineBreak => Ok(Value::from(format!("\n{value}"))),
        }
    }
}
