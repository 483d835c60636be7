use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a short-circuit logical operation.
    ///
    /// The left operand is always evaluated. `OR` returns it when truthy and
    /// `AND` returns it when falsy, without evaluating the right operand;
    /// otherwise the right operand's value is the result. Operands keep their
    /// own values, so `NIL OR 5` yields `5`.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The logical operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` holding whichever operand decided the result.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        match op {
            LogicalOperator::Or if left.is_truthy() => Ok(left),
            LogicalOperator::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(right),
        }
    }
}
