/// Numeric conversion helpers.
///
/// Checked conversions between integer and floating-point types, and the
/// parsing of number literal text into the `f64` the runtime computes with.
pub mod num;

/// Stack growth for deep recursion in the parser and the evaluator.
pub mod stack;
