use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, any two values are compared by value: an
    /// integer never equals a float, and nil equals only nil. Relational
    /// operators require numbers; two integers compare as integers, anything
    /// else after widening to floating point.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Float(5.5);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &Value::Nil, &a, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Bool(match op {
                           Equal => left == right,
                           NotEqual => left != right,
                           Less | LessEqual | Greater | GreaterEqual => {
                               if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
                                   match op {
                                       Less => a < b,
                                       LessEqual => a <= b,
                                       Greater => a > b,
                                       GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }
                               } else {
                                   let (a, b) = Self::widen(op, left, right, line)?;
                                   match op {
                                       Less => a < b,
                                       LessEqual => a <= b,
                                       Greater => a > b,
                                       GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }
                               }
                           },
                           _ => unreachable!(),
                       }))
    }
}
