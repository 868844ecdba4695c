/// The runtime value type.
///
/// Defines [`core::Value`], the dynamically typed value every expression
/// evaluates to, with its type names, checked accessors and display form.
pub mod core;
