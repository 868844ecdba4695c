/// Function call dispatch.
///
/// Holds the native function table and the user function call protocol:
/// arity checks, argument evaluation in the caller's scope, scope linking and
/// the call depth limit.
pub mod core;

/// Clock natives.
pub mod clock;
