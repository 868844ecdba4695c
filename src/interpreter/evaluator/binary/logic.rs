use std::io::Write;

use crate::{
    ast::LogicalOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated; there is no
    /// short-circuiting. A non-boolean on either side is a type error.
    ///
    /// ## Example
    /// ```
    /// use brt::{ast::LogicalOperator,
    ///           interpreter::{evaluator::core::Interpreter, value::core::Value}};
    ///
    /// type Eval = Interpreter<Vec<u8>>;
    ///
    /// let r = Eval::eval_logical(LogicalOperator::Or, &Value::from(false), &Value::from(true), 1);
    /// assert_eq!(r.unwrap(), Value::from(true));
    /// assert!(Eval::eval_logical(LogicalOperator::And, &Value::from(1.0), &Value::from(true), 1)
    ///         .is_err());
    /// ```
    pub fn eval_logical(op: LogicalOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        let at = op.to_string();
        let a = left.as_bool(&at, line)?;
        let b = right.as_bool(&at, line)?;

        match op {
            LogicalOperator::And => Ok(Value::Bool(a && b)),
            LogicalOperator::Or => Ok(Value::Bool(a || b)),
        }
    }
}
