use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers are combined in checked integer arithmetic; division and
    /// modulo truncate toward zero. Any other pair of numbers is widened to
    /// floating point first. Division by zero is checked explicitly in both
    /// branches. The operator must be one of `Add`, `Sub`, `Mul`, `Div` or
    /// `Mod`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Float(2.0);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Float(3.5));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &x, &Value::Integer(2), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(3));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            if matches!(op, Div | Mod) && *b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }

            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => a.checked_div(*b),
                Mod => a.checked_rem(*b),
                _ => unreachable!(),
            };
            return result.map(Value::Integer)
                         .ok_or(RuntimeError::Overflow { line });
        }

        let (left, right) = Self::widen(op, left, right, line)?;
        if matches!(op, Div | Mod) && right == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        Ok(Value::Float(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                            Mod => left % right,
                            _ => unreachable!(),
                        }))
    }
}
