use chrono::Utc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_f64_checked,
};

/// `vibeCheck()`: the current Unix timestamp in whole seconds.
///
/// ## Example
/// ```
/// use brt::interpreter::{evaluator::function::clock::vibe_check, value::core::Value};
///
/// let Value::Number(now) = vibe_check(&[], 1).unwrap() else { panic!("not a number") };
/// assert!(now > 1_600_000_000.0);
/// assert_eq!(now.fract(), 0.0);
/// ```
pub fn vibe_check(_args: &[Value], line: usize) -> EvalResult<Value> {
    let seconds = Utc::now().timestamp();
    let error = RuntimeError::NativeFailure { name: "vibeCheck".to_string(),
                                              details: format!("timestamp {seconds} is out of range"),
                                              line };
    i64_to_f64_checked(seconds, error).map(Value::Number)
}
