use std::io::Write;

use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// - `-` requires a number and negates it.
    /// - `!` yields `false` only for `true`; every other value, `false`,
    ///   `nil`, strings and numbers included, yields `true`.
    ///
    /// ## Example
    /// ```
    /// use brt::{ast::UnaryOperator,
    ///           interpreter::{evaluator::core::Interpreter, value::core::Value}};
    ///
    /// type Eval = Interpreter<Vec<u8>>;
    ///
    /// assert_eq!(Eval::eval_unary(UnaryOperator::Negate, &Value::from(2.0), 1).unwrap(),
    ///            Value::from(-2.0));
    /// assert_eq!(Eval::eval_unary(UnaryOperator::Not, &Value::from("s"), 1).unwrap(),
    ///            Value::from(true));
    /// assert!(Eval::eval_unary(UnaryOperator::Negate, &Value::Nil, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let n = operand.as_number(&op.to_string(), line)?;
                Ok(Value::Number(-n))
            },
            UnaryOperator::Not => Ok(Value::Bool(!matches!(operand, Value::Bool(true)))),
        }
    }
}
