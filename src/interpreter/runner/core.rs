use std::io::Write;

use tracing::debug;

use crate::{
    ast::{Node, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` ran; the value travels up to the enclosing call.
    Return(Value),
}

impl<W: Write> Interpreter<W> {
    /// Runs a whole program.
    ///
    /// Function declarations are hoisted first, then the nodes run in order.
    /// A top-level `return` stops the program.
    ///
    /// ## Example
    /// ```
    /// use brt::{config::Config,
    ///           interpreter::{evaluator::core::Interpreter,
    ///                         lexer::{significant_tokens, tokenize},
    ///                         parser::parse}};
    ///
    /// let source = b"var x = 3; var y = 4; print x + y;";
    /// let tokens = significant_tokens(tokenize(source).unwrap()).unwrap();
    /// let nodes = parse(tokens, &Config::default()).unwrap();
    ///
    /// let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
    /// interpreter.run(&nodes).unwrap();
    ///
    /// assert_eq!(interpreter.into_output(), b"7\n");
    /// ```
    pub fn run(&mut self, nodes: &[Node]) -> EvalResult<()> {
        debug!(nodes = nodes.len(), "running program");
        self.run_nodes(nodes).map(|_| ())
    }

    /// Runs every node of `nodes`, executing each one and printing the
    /// value of every expression node.
    ///
    /// Calls count as expressions whether they were written as statements or
    /// not. A top-level `return` stops evaluation.
    pub fn evaluate(&mut self, nodes: &[Node]) -> EvalResult<()> {
        debug!(nodes = nodes.len(), "evaluating program");
        self.hoist_functions(nodes)?;

        for node in nodes {
            let line = node.line();
            let value = match node {
                Node::Expr(expr) => self.eval(expr)?,
                Node::Stmt(Stmt::FuncCall(call)) => self.call_function(call)?,
                Node::Stmt(_) => match self.run_node(node)? {
                    Flow::Normal => continue,
                    Flow::Return(_) => break,
                },
            };
            self.write_line(&value, line)?;
        }
        Ok(())
    }

    /// Runs a sequence of nodes in the current scope until it ends, a
    /// `return` runs, or a block close marker is reached.
    pub(crate) fn run_nodes(&mut self, nodes: &[Node]) -> EvalResult<Flow> {
        self.hoist_functions(nodes)?;

        for node in nodes {
            if matches!(node, Node::Stmt(Stmt::CloseBlock { .. })) {
                break;
            }
            if let Flow::Return(value) = self.run_node(node)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single node.
    ///
    /// Expression nodes are evaluated for their side effects and the value
    /// is dropped.
    pub fn run_node(&mut self, node: &Node) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| match node {
            Node::Expr(expr) => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Node::Stmt(stmt) => self.run_stmt(stmt),
        })
    }

    fn run_stmt(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::Print { expr, line } => {
                let value = self.eval(expr)?;
                self.write_line(&value, *line)?;
            },
            Stmt::VarDeclare { name, init, line } => {
                let value = self.eval(init)?;
                self.runtime.declare_var(name, value, *line)?;
            },
            Stmt::VarReassign { name, value, line } => {
                if !self.runtime.has_var(name) {
                    return Err(RuntimeError::UndefinedIdentifier { name: name.clone(),
                                                                   line: *line, });
                }
                let value = self.eval(value)?;
                self.runtime.assign_var(name, value, *line)?;
            },
            Stmt::Block { nodes, .. } => return self.run_block(nodes),
            Stmt::If { cond,
                       branch,
                       else_ifs,
                       else_branch,
                       .. } => return self.run_if(cond, branch, else_ifs, else_branch.as_deref()),
            Stmt::While { cond, body, .. } => return self.run_while(cond, body),
            Stmt::For { init,
                        cond,
                        update,
                        body,
                        .. } => {
                return self.run_for(init.as_deref(), cond.as_ref(), update.as_deref(), body);
            },
            Stmt::FuncDeclare(def) => self.runtime.declare_func(def, def.line)?,
            Stmt::FuncCall(call) => {
                self.call_function(call)?;
            },
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                return Ok(Flow::Return(value));
            },
            Stmt::Increment { name, line } => self.step_var(name, 1.0, *line)?,
            Stmt::Decrement { name, line } => self.step_var(name, -1.0, *line)?,
            Stmt::CloseBlock { .. } => {},
        }
        Ok(Flow::Normal)
    }

    /// Registers every function declared directly in `nodes` so calls may
    /// precede declarations.
    fn hoist_functions(&mut self, nodes: &[Node]) -> EvalResult<()> {
        for node in nodes {
            if let Node::Stmt(Stmt::FuncDeclare(def)) = node {
                self.runtime.declare_func(def, def.line)?;
            }
        }
        Ok(())
    }

    fn write_line(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                                               line })
    }
}
