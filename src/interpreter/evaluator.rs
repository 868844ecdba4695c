/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons, equality and the
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` type, the expression evaluation entry point and
/// literal resolution.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluator and the statement runner.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and native function calls, argument checking, the
/// call depth limit and return value computation.
pub mod function;
