use std::io::Write;

use crate::{
    ast::Expr,
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::core::eval_binary, runtime::Runtime, token::TokenKind,
        value::core::Value,
    },
    util::{num::parse_number_literal, stack::ensure_sufficient_stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the interpreter state.
///
/// Holds the scope stack, the writer `print` sends its output to, the
/// configuration and the current depth of nested user function calls.
///
/// ## Usage
///
/// An `Interpreter` is created once per program. Expressions are evaluated
/// with [`Interpreter::eval`]; statements are executed with the runner
/// methods ([`Interpreter::run`], [`Interpreter::run_node`]).
///
/// ## Example
/// ```
/// use brt::{config::Config,
///           interpreter::{evaluator::core::Interpreter, value::core::Value}};
///
/// let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
/// interpreter.runtime.declare_var("x", Value::from(2.0), 1).unwrap();
///
/// assert_eq!(interpreter.runtime.get_var("x"), Some(&Value::from(2.0)));
/// ```
pub struct Interpreter<W: Write> {
    /// The open scopes.
    pub runtime:           Runtime,
    pub(crate) out:        W,
    pub(crate) config:     Config,
    pub(crate) call_depth: usize,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing program output to `out`.
    #[must_use]
    pub fn new(out: W, config: Config) -> Self {
        Self { runtime: Runtime::new(),
               out,
               config,
               call_depth: 0 }
    }

    /// Consumes the interpreter and returns its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Both operands
    /// of binary and logical operators are always evaluated, left first.
    /// Only calls can change interpreter state.
    ///
    /// ## Example
    /// ```
    /// use brt::{ast::{BinaryOperator, Expr},
    ///           config::Config,
    ///           interpreter::{evaluator::core::Interpreter, value::core::Value}};
    ///
    /// let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
    /// let expr = Expr::Binary { left:  Box::new(Expr::number("3", 1)),
    ///                           op:    BinaryOperator::Mul,
    ///                           right: Box::new(Expr::number("4", 1)),
    ///                           line:  1, };
    ///
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::from(12.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr(expr))
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { kind, value, line } => self.eval_literal(*kind, value, *line),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left,
                            op,
                            right,
                            line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_logical(*op, &left, &right, *line)
            },
            Expr::Call(call) => self.call_function(call),
        }
    }

    /// Evaluates a literal.
    ///
    /// Identifiers are looked up through the scope chain; every other kind
    /// maps directly to a value. Number text is parsed as a 64-bit float.
    fn eval_literal(&self, kind: TokenKind, value: &str, line: usize) -> EvalResult<Value> {
        match kind {
            TokenKind::String => Ok(Value::Str(value.to_string())),
            TokenKind::Number => parse_number_literal(value, line).map(Value::Number),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Identifier => {
                self.runtime
                    .get_var(value)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: value.to_string(),
                                                                       line })
            },
            _ => Ok(Value::Nil),
        }
    }
}
