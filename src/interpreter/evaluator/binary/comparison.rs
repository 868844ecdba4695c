use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `<`, `<=`, `>` and `>=` over numbers.
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let at = op.to_string();
    let a = left.as_number(&at, line)?;
    let b = right.as_number(&at, line)?;

    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::GreaterEqual => a >= b,
        _ => {
            return Err(RuntimeError::TypeError { at,
                                                 expected: "comparison operator".to_string(),
                                                 line });
        },
    };
    Ok(Value::Bool(result))
}

/// Evaluates `==` and `!=`.
///
/// Operands of different types are an error rather than unequal.
///
/// ## Example
/// ```
/// use brt::{ast::BinaryOperator,
///           interpreter::{evaluator::binary::comparison::eval_equality, value::core::Value}};
///
/// let eq = eval_equality(BinaryOperator::Equal, &Value::Nil, &Value::Nil, 1);
/// assert_eq!(eq.unwrap(), Value::from(true));
///
/// assert!(eval_equality(BinaryOperator::Equal, &Value::from(1.0), &Value::from("1"), 1).is_err());
/// ```
pub fn eval_equality(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<Value> {
    if !left.same_type(right) {
        return Err(RuntimeError::TypeMismatch { at: op.to_string(),
                                                line });
    }
    let equal = left == right;
    Ok(Value::Bool(if op == BinaryOperator::NotEqual { !equal } else { equal }))
}
