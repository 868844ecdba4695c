/// Program execution and statement dispatch.
///
/// Walks the top-level node sequence, hoists function declarations and runs
/// each statement against the interpreter's scopes. Also hosts the
/// expression-printing `evaluate` mode.
pub mod core;

/// Blocks, conditionals, loops and variable stepping.
pub mod control;
