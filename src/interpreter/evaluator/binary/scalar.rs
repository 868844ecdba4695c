use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `+`: number addition or string concatenation.
///
/// A mismatch is reported against the type the left operand asks for.
pub fn eval_add(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Str(_), _) => Err(RuntimeError::TypeError { at: op.to_string(),
                                                            expected: "string".to_string(),
                                                            line }),
        _ => Err(RuntimeError::TypeError { at: op.to_string(),
                                           expected: "number".to_string(),
                                           line }),
    }
}

/// Evaluates `-`, `--`, `*`, `/` and `%` over numbers.
///
/// Division and remainder follow IEEE-754: dividing by zero yields an
/// infinity or NaN rather than an error.
///
/// ## Example
/// ```
/// use brt::{ast::BinaryOperator,
///           interpreter::{evaluator::binary::scalar::eval_arithmetic, value::core::Value}};
///
/// let r = eval_arithmetic(BinaryOperator::Div, &Value::from(1.0), &Value::from(0.0), 1);
/// assert_eq!(r.unwrap(), Value::from(f64::INFINITY));
///
/// let r = eval_arithmetic(BinaryOperator::Mod, &Value::from(7.0), &Value::from(4.0), 1);
/// assert_eq!(r.unwrap(), Value::from(3.0));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let at = op.to_string();
    let a = left.as_number(&at, line)?;
    let b = right.as_number(&at, line)?;

    let result = match op {
        BinaryOperator::Sub | BinaryOperator::SubSub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => a % b,
        _ => {
            return Err(RuntimeError::TypeError { at,
                                                 expected: "arithmetic operator".to_string(),
                                                 line });
        },
    };
    Ok(Value::Number(result))
}
