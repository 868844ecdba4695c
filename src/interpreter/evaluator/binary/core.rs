use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                comparison::{eval_comparison, eval_equality},
                scalar::{eval_add, eval_arithmetic},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// `+` (and its doubled spelling `++`) adds numbers or concatenates strings.
/// The remaining arithmetic operators and the ordering comparisons require
/// numbers. `==` and `!=` require operands of the same type.
///
/// ## Example
/// ```
/// use brt::{ast::BinaryOperator,
///           interpreter::{evaluator::binary::core::eval_binary, value::core::Value}};
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
/// assert_eq!(sum.unwrap(), Value::from(7.0));
///
/// let joined = eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::from("b"), 1);
/// assert_eq!(joined.unwrap(), Value::from("ab"));
///
/// assert!(eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::from(1.0), 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, AddAdd, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        SubSub,
    };

    match op {
        Add | AddAdd => eval_add(op, left, right, line),
        Sub | SubSub | Mul | Div | Mod => eval_arithmetic(op, left, right, line),
        Less | LessEqual | Greater | GreaterEqual => eval_comparison(op, left, right, line),
        Equal | NotEqual => eval_equality(op, left, right, line),
    }
}
