use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Index of an [`Environment`] in the [`Runtime`] arena.
pub type EnvId = usize;

/// A declared function and the scope it was declared in.
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    /// The declaration.
    pub def: Rc<FunctionDef>,
    /// The scope holding the declaration.
    pub env: EnvId,
}

/// One scope: variable bindings, function declarations and a link to the
/// enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    vars:   HashMap<String, Value>,
    funcs:  HashMap<String, FunctionEntry>,
    parent: Option<EnvId>,
}

/// The stack of open scopes.
///
/// Environments live in an arena addressed by [`EnvId`]; the arena is used
/// strictly as a stack, so an environment's parent always has a lower id and
/// outlives it. Index 0 is the global scope, which is never popped. Every
/// [`Runtime::push_env`] must be matched by exactly one
/// [`Runtime::pop_env`].
///
/// ## Example
/// ```
/// use brt::interpreter::{runtime::Runtime, value::core::Value};
///
/// let mut runtime = Runtime::new();
/// runtime.declare_var("x", Value::from(5.0), 1).unwrap();
///
/// runtime.push_env(runtime.current());
/// runtime.assign_var("x", Value::from(6.0), 2).unwrap();
/// runtime.pop_env();
///
/// assert_eq!(runtime.get_var("x"), Some(&Value::from(6.0)));
/// ```
#[derive(Debug)]
pub struct Runtime {
    envs: Vec<Environment>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// The global scope.
    pub const GLOBAL: EnvId = 0;

    /// Creates a runtime holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { envs: vec![Environment::default()] }
    }

    /// The innermost open scope.
    #[must_use]
    pub fn current(&self) -> EnvId {
        self.envs.len() - 1
    }

    /// Number of open scopes, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.envs.len()
    }

    /// Opens a scope whose lookups fall back to `parent`.
    pub fn push_env(&mut self, parent: EnvId) -> EnvId {
        self.envs.push(Environment { parent: Some(parent),
                                     ..Environment::default() });
        trace!(depth = self.envs.len(), parent, "push scope");
        self.current()
    }

    /// Closes the innermost scope. The global scope stays open.
    pub fn pop_env(&mut self) {
        if self.envs.len() > 1 {
            self.envs.pop();
            trace!(depth = self.envs.len(), "pop scope");
        }
    }

    /// Iterates over the current scope and its ancestors, innermost first.
    fn chain(&self) -> impl Iterator<Item = EnvId> + '_ {
        std::iter::successors(Some(self.current()), |&id| self.envs[id].parent)
    }

    fn find_var_scope(&self, name: &str) -> Option<EnvId> {
        self.chain().find(|&id| self.envs[id].vars.contains_key(name))
    }

    /// Looks a variable up through the scope chain.
    #[must_use]
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.find_var_scope(name).and_then(|id| self.envs[id].vars.get(name))
    }

    /// Returns `true` if some scope in the chain declares `name`.
    #[must_use]
    pub fn has_var(&self, name: &str) -> bool {
        self.find_var_scope(name).is_some()
    }

    /// Binds a new variable in the current scope.
    ///
    /// # Errors
    /// Returns `RuntimeError::IdentifierAlreadyExists` if the current scope
    /// already declares `name`. Shadowing an outer declaration is allowed.
    pub fn declare_var(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let current = self.current();
        let scope = &mut self.envs[current].vars;
        if scope.contains_key(name) {
            return Err(RuntimeError::IdentifierAlreadyExists { name: name.to_string(),
                                                               line });
        }
        scope.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrites a variable in the scope that declares it.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedIdentifier` if no scope in the chain
    /// declares `name`.
    pub fn assign_var(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let id = self.find_var_scope(name)
                     .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                                        line })?;
        self.envs[id].vars.insert(name.to_string(), value);
        Ok(())
    }

    /// Looks a function up through the scope chain.
    #[must_use]
    pub fn get_func(&self, name: &str) -> Option<&FunctionEntry> {
        self.chain().find_map(|id| self.envs[id].funcs.get(name))
    }

    /// Registers a function in the current scope.
    ///
    /// Registering the same declaration again is a no-op, which lets a block
    /// hoist its functions and still run the declarations in order.
    ///
    /// # Errors
    /// Returns `RuntimeError::IdentifierAlreadyExists` if a different
    /// function with the same name is visible.
    pub fn declare_func(&mut self, def: &Rc<FunctionDef>, line: usize) -> EvalResult<()> {
        if let Some(existing) = self.get_func(&def.name) {
            if Rc::ptr_eq(&existing.def, def) {
                return Ok(());
            }
            return Err(RuntimeError::IdentifierAlreadyExists { name: def.name.clone(),
                                                               line });
        }
        let current = self.current();
        self.envs[current].funcs.insert(def.name.clone(),
                                        FunctionEntry { def: Rc::clone(def),
                                                        env: current, });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Node, Stmt};

    fn function(name: &str) -> Rc<FunctionDef> {
        Rc::new(FunctionDef { name:   name.to_string(),
                              params: Vec::new(),
                              body:   Node::Stmt(Stmt::Block { nodes: Vec::new(),
                                                               line:  1, }),
                              line:   1, })
    }

    #[test]
    fn redeclaring_in_the_same_scope_fails() {
        let mut runtime = Runtime::new();
        runtime.declare_var("x", Value::Nil, 1).unwrap();
        assert!(matches!(runtime.declare_var("x", Value::Nil, 2),
                         Err(RuntimeError::IdentifierAlreadyExists { line: 2, .. })));
    }

    #[test]
    fn shadowing_in_a_child_scope_is_allowed() {
        let mut runtime = Runtime::new();
        runtime.declare_var("x", Value::from(1.0), 1).unwrap();
        runtime.push_env(runtime.current());
        runtime.declare_var("x", Value::from(2.0), 2).unwrap();
        assert_eq!(runtime.get_var("x"), Some(&Value::from(2.0)));
        runtime.pop_env();
        assert_eq!(runtime.get_var("x"), Some(&Value::from(1.0)));
    }

    #[test]
    fn assigning_an_undeclared_name_fails() {
        let mut runtime = Runtime::new();
        assert!(matches!(runtime.assign_var("y", Value::Nil, 3),
                         Err(RuntimeError::UndefinedIdentifier { line: 3, .. })));
    }

    #[test]
    fn global_scope_is_never_popped() {
        let mut runtime = Runtime::new();
        runtime.pop_env();
        runtime.pop_env();
        assert_eq!(runtime.depth(), 1);
        assert_eq!(runtime.current(), Runtime::GLOBAL);
    }

    #[test]
    fn lookups_follow_the_parent_link_not_the_stack() {
        let mut runtime = Runtime::new();
        let outer = runtime.push_env(Runtime::GLOBAL);
        runtime.declare_var("local", Value::Nil, 1).unwrap();
        runtime.push_env(Runtime::GLOBAL);
        assert!(!runtime.has_var("local"));
        runtime.pop_env();
        assert_eq!(runtime.current(), outer);
        assert!(runtime.has_var("local"));
    }

    #[test]
    fn functions_register_once() {
        let mut runtime = Runtime::new();
        let f = function("f");
        runtime.declare_func(&f, 1).unwrap();
        runtime.declare_func(&f, 1).unwrap();

        runtime.push_env(runtime.current());
        assert!(matches!(runtime.declare_func(&function("f"), 4),
                         Err(RuntimeError::IdentifierAlreadyExists { line: 4, .. })));
        assert_eq!(runtime.get_func("f").map(|e| e.env), Some(Runtime::GLOBAL));
    }
}
