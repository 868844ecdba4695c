/// How a called function's scope is linked to the rest of the program.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FunctionScope {
    /// The callee's scope encloses the scope the function was declared in.
    #[default]
    Lexical,
    /// The callee's scope encloses the scope of the call site, so the body
    /// sees the caller's locals.
    CallSite,
}

/// What the parser does after its first error.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Stop at the first error.
    #[default]
    FailFast,
    /// Record every error, skip to the next `;` or `}` and keep going.
    CollectAll,
}

/// Interpreter settings shared by the parser and the runtime.
///
/// ## Example
/// ```
/// use brt::config::{Config, ErrorMode, FunctionScope};
///
/// let config = Config::default().with_max_call_depth(64)
///                               .with_error_mode(ErrorMode::CollectAll);
/// assert_eq!(config.max_call_depth, 64);
/// assert_eq!(config.function_scope, FunctionScope::Lexical);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Nested user-function calls allowed before a stack overflow error.
    pub max_call_depth:    usize,
    /// Nested groupings, blocks and unary operators the parser accepts.
    pub max_nesting_depth: usize,
    /// Scope linking used for calls.
    pub function_scope:    FunctionScope,
    /// Parser error handling.
    pub error_mode:        ErrorMode,
}

/// Default for [`Config::max_call_depth`].
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Default for [`Config::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
               function_scope:    FunctionScope::default(),
               error_mode:        ErrorMode::default(), }
    }
}

impl Config {
    /// Sets the call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Sets the parser nesting limit.
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Sets the function scope linking.
    #[must_use]
    pub const fn with_function_scope(mut self, scope: FunctionScope) -> Self {
        self.function_scope = scope;
        self
    }

    /// Sets the parser error mode.
    #[must_use]
    pub const fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }
}
