use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Call, CallTarget, Node, Stmt},
    config::FunctionScope,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::clock,
        },
        runner::core::Flow,
        value::core::Value,
    },
};

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the line
/// number of the call.
type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the native.
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct NativeDef {
            name:  &'static str,
            arity: usize,
            func:  NativeFn,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every native function.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "vibeCheck" => { arity: 0, func: clock::vibe_check },
}

/// Returns `true` if `name` is a native function.
///
/// The parser uses this to mark call targets; natives cannot be shadowed by
/// user declarations.
///
/// ## Example
/// ```
/// use brt::interpreter::evaluator::function::core::is_native_function;
///
/// assert!(is_native_function("vibeCheck"));
/// assert!(!is_native_function("vibecheck"));
/// ```
#[must_use]
pub fn is_native_function(name: &str) -> bool {
    NATIVE_FUNCTIONS.contains(&name)
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a function call.
    ///
    /// Native targets are looked up in the native table; user targets are
    /// resolved through the scope chain at call time.
    ///
    /// # Returns
    /// The value of the `return` that ended the call, or `nil`.
    pub fn call_function(&mut self, call: &Call) -> EvalResult<Value> {
        match call.target {
            CallTarget::Native => self.call_native(call),
            CallTarget::User => self.call_user(call),
        }
    }

    fn call_native(&mut self, call: &Call) -> EvalResult<Value> {
        let def = NATIVE_TABLE.iter()
                              .find(|def| def.name == call.name)
                              .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: call.name.clone(),
                                                                                 line: call.line, })?;

        if call.args.len() != def.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:     call.name.clone(),
                                                             expected: def.arity,
                                                             found:    call.args.len(),
                                                             line:     call.line, });
        }

        let args = self.eval_args(call)?;
        (def.func)(&args, call.line)
    }

    /// Calls a user function.
    ///
    /// Arguments are evaluated in the caller's scope, then bound in a fresh
    /// scope whose parent depends on [`FunctionScope`]. The scope is popped
    /// and the depth counter restored on every exit path.
    fn call_user(&mut self, call: &Call) -> EvalResult<Value> {
        let entry = self.runtime
                        .get_func(&call.name)
                        .cloned()
                        .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: call.name.clone(),
                                                                           line: call.line, })?;
        let def = entry.def;

        if call.args.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     call.name.clone(),
                                                             expected: def.params.len(),
                                                             found:    call.args.len(),
                                                             line:     call.line, });
        }

        let args = self.eval_args(call)?;

        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::StackOverflow { name:  call.name.clone(),
                                                     limit: self.config.max_call_depth,
                                                     line:  call.line, });
        }

        let parent = match self.config.function_scope {
            FunctionScope::Lexical => entry.env,
            FunctionScope::CallSite => self.runtime.current(),
        };

        trace!(name = %call.name, depth = self.call_depth + 1, "call");
        self.call_depth += 1;
        self.runtime.push_env(parent);

        let result = self.bind_and_run(&def.params, args, &def.body, call.line);

        self.runtime.pop_env();
        self.call_depth -= 1;

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }

    fn bind_and_run(&mut self,
                    params: &[String],
                    args: Vec<Value>,
                    body: &Node,
                    line: usize)
                    -> EvalResult<Flow> {
        for (param, value) in params.iter().zip(args) {
            self.runtime.declare_var(param, value, line)?;
        }

        match body {
            Node::Stmt(Stmt::Block { nodes, .. }) => self.run_nodes(nodes),
            other => self.run_node(other),
        }
    }

    fn eval_args(&mut self, call: &Call) -> EvalResult<Vec<Value>> {
        call.args.iter().map(|arg| self.eval(arg)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn native_call(name: &str, args: usize) -> Call {
        Call { name: name.to_string(),
               args: (0..args).map(|_| crate::ast::Expr::nil(1)).collect(),
               target: CallTarget::Native,
               line: 2 }
    }

    #[test]
    fn native_arity_is_checked() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let err = interpreter.call_function(&native_call("vibeCheck", 1)).unwrap_err();

        assert!(matches!(err,
                         RuntimeError::ArgumentCountMismatch { expected: 0,
                                                               found: 1,
                                                               line: 2,
                                                               .. }));
    }

    #[test]
    fn vibe_check_returns_a_number() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let value = interpreter.call_function(&native_call("vibeCheck", 0)).unwrap();

        assert_eq!(value.type_name(), "number");
    }

    #[test]
    fn unknown_user_function_is_undefined() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let call = Call { name:   "missing".to_string(),
                          args:   Vec::new(),
                          target: CallTarget::User,
                          line:   7, };

        assert!(matches!(interpreter.call_function(&call),
                         Err(RuntimeError::UndefinedIdentifier { line: 7, .. })));
    }
}
