/// Binary operator dispatch.
///
/// Routes each operator to the scalar or comparison handlers.
pub mod core;

/// Arithmetic and string concatenation.
pub mod scalar;

/// Ordering and equality comparisons.
///
/// Equality requires both operands to share a dynamic type.
pub mod comparison;

/// Logical `&&` and `||` over booleans.
pub mod logic;
