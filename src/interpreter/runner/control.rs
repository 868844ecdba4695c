use std::io::Write;

use crate::{
    ast::{ElseIf, Expr, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        runner::core::Flow,
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Runs a block body in a fresh child scope.
    ///
    /// The scope is popped whether the body finishes, returns or fails.
    pub(crate) fn run_block(&mut self, nodes: &[Node]) -> EvalResult<Flow> {
        self.runtime.push_env(self.runtime.current());
        let result = self.run_nodes(nodes);
        self.runtime.pop_env();
        result
    }

    /// Runs the first branch whose condition holds.
    pub(crate) fn run_if(&mut self,
                         cond: &Expr,
                         branch: &Node,
                         else_ifs: &[ElseIf],
                         else_branch: Option<&Node>)
                         -> EvalResult<Flow> {
        if self.expect_bool(cond)? {
            return self.run_node(branch);
        }
        for clause in else_ifs {
            if self.expect_bool(&clause.cond)? {
                return self.run_node(&clause.branch);
            }
        }
        match else_branch {
            Some(node) => self.run_node(node),
            None => Ok(Flow::Normal),
        }
    }

    pub(crate) fn run_while(&mut self, cond: &Expr, body: &Node) -> EvalResult<Flow> {
        while self.expect_bool(cond)? {
            if let Flow::Return(value) = self.run_node(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs a `for` loop inside its own scope, so a `var` initializer is
    /// local to the loop. A missing condition loops until `return`.
    pub(crate) fn run_for(&mut self,
                          init: Option<&Node>,
                          cond: Option<&Expr>,
                          update: Option<&Node>,
                          body: &Node)
                          -> EvalResult<Flow> {
        self.runtime.push_env(self.runtime.current());
        let result = self.run_for_scoped(init, cond, update, body);
        self.runtime.pop_env();
        result
    }

    fn run_for_scoped(&mut self,
                      init: Option<&Node>,
                      cond: Option<&Expr>,
                      update: Option<&Node>,
                      body: &Node)
                      -> EvalResult<Flow> {
        if let Some(init) = init {
            self.run_node(init)?;
        }
        loop {
            let keep_going = match cond {
                Some(cond) => self.expect_bool(cond)?,
                None => true,
            };
            if !keep_going {
                return Ok(Flow::Normal);
            }
            if let Flow::Return(value) = self.run_node(body)? {
                return Ok(Flow::Return(value));
            }
            if let Some(update) = update {
                self.run_node(update)?;
            }
        }
    }

    /// Adds `delta` to a numeric variable in the scope that declares it.
    pub(crate) fn step_var(&mut self, name: &str, delta: f64, line: usize) -> EvalResult<()> {
        let current = self.runtime
                          .get_var(name)
                          .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                                             line })?
                          .as_number(name, line)?;
        self.runtime.assign_var(name, Value::Number(current + delta), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn stepping_a_string_is_a_type_error() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        interpreter.runtime.declare_var("s", Value::from("a"), 1).unwrap();

        assert!(matches!(interpreter.step_var("s", 1.0, 2),
                         Err(RuntimeError::TypeError { line: 2, .. })));
    }

    #[test]
    fn stepping_writes_to_the_declaring_scope() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        interpreter.runtime.declare_var("n", Value::from(1.0), 1).unwrap();
        interpreter.runtime.push_env(interpreter.runtime.current());
        interpreter.step_var("n", -1.0, 2).unwrap();
        interpreter.runtime.pop_env();

        assert_eq!(interpreter.runtime.get_var("n"), Some(&Value::from(0.0)));
    }

    #[test]
    fn failing_blocks_still_pop_their_scope() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let nodes = vec![Node::Expr(Expr::Literal { kind:  crate::interpreter::token::TokenKind::Identifier,
                                                    value: "missing".to_string(),
                                                    line:  1, })];

        assert!(interpreter.run_block(&nodes).is_err());
        assert_eq!(interpreter.runtime.depth(), 1);
    }
}
