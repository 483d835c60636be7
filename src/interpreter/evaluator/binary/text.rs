use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Joins the display text of two values.
    ///
    /// `Concat` (`&`) joins them directly; `LineBreak` (`$`) puts a newline
    /// between them. Any pair of values can be joined.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_text(BinaryOperator::Concat, &Value::Bool(true), &Value::Nil);
    /// assert_eq!(joined, Value::from("TRUEnil"));
    ///
    /// let joined = Context::eval_text(BinaryOperator::LineBreak, &Value::Integer(1), &Value::from("a"));
    /// assert_eq!(joined, Value::from("1\na"));
    /// ```
    #[must_use]
    pub fn eval_text(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOperator::LineBreak => Value::from(format!("{left}\n{right}")),
            _ => Value::from(format!("{left}{right}")),
        }
    }
}
