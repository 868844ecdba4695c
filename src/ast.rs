use std::rc::Rc;

use serde::Serialize;

use crate::{error::ParseError, interpreter::token::TokenKind};

/// A top-level or nested program element.
///
/// The parser yields a flat sequence of nodes; blocks and function bodies
/// nest further nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// A bare expression.
    Expr(Expr),
    /// A statement.
    Stmt(Stmt),
}

impl Node {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Expr(expr) => expr.line(),
            Self::Stmt(stmt) => stmt.line(),
        }
    }

    /// Returns the expression this node is or wraps, if any.
    ///
    /// ## Example
    /// ```
    /// use brt::ast::{Expr, Node, Stmt};
    ///
    /// let operand = Expr::number("1", 1);
    /// let node = Node::Stmt(Stmt::Print { expr: operand.clone(),
    ///                                     line: 1, });
    ///
    /// assert_eq!(node.expr(), Some(&operand));
    /// ```
    #[must_use]
    pub fn expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Stmt(stmt) => stmt.expr(),
        }
    }

    /// Converts the node into an operand expression.
    ///
    /// A function call statement becomes a call expression; every other
    /// statement is rejected.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpressionExpected`] when the node is a
    /// statement other than a call.
    pub fn into_expr(self, at: &str) -> Result<Expr, ParseError> {
        match self {
            Self::Expr(expr) => Ok(expr),
            Self::Stmt(Stmt::FuncCall(call)) => Ok(Expr::Call(call)),
            Self::Stmt(stmt) => Err(ParseError::ExpressionExpected { at:   at.to_string(),
                                                                     line: stmt.line(), }),
        }
    }
}

/// An expression node.
///
/// Identifier reads are literals of kind [`TokenKind::Identifier`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// A literal token: string, number, boolean, nil or identifier.
    Literal {
        /// The token kind the literal came from.
        kind:  TokenKind,
        /// The literal text. Strings are unquoted; numbers keep their source
        /// spelling.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesised expression.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic or comparison operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean `&&` / `||` operation.
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function call used as a value.
    Call(Call),
}

impl Expr {
    /// Builds a `nil` literal.
    #[must_use]
    pub fn nil(line: usize) -> Self {
        Self::Literal { kind: TokenKind::Nil,
                        value: "nil".to_string(),
                        line }
    }

    /// Builds a number literal from its source text.
    #[must_use]
    pub fn number(text: &str, line: usize) -> Self {
        Self::Literal { kind: TokenKind::Number,
                        value: text.to_string(),
                        line }
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use brt::ast::Expr;
    ///
    /// assert_eq!(Expr::nil(5).line(), 5);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. } => *line,
            Self::Call(call) => call.line,
        }
    }
}

/// Renders the expression in parenthesised prefix form.
///
/// ## Example
/// ```
/// use brt::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::Binary { left:  Box::new(Expr::number("1", 1)),
///                           op:    BinaryOperator::Add,
///                           right: Box::new(Expr::number("2", 1)),
///                           line:  1, };
/// assert_eq!(expr.to_string(), "(+ 1 2)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Call(call) => {
                write!(f, "(call {}", call.name)?;
                for arg in &call.args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Where a call resolves to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum CallTarget {
    /// A function declared in the program, looked up when the call runs.
    User,
    /// A builtin implemented by the interpreter.
    Native,
}

/// A function call, usable both as a statement and as an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    /// Name of the function being called.
    pub name:   String,
    /// Arguments to the function.
    pub args:   Vec<Expr>,
    /// How the name resolves.
    pub target: CallTarget,
    /// Line number in the source code.
    pub line:   usize,
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body run when the function is called.
    pub body:   Node,
    /// Line number in the source code.
    pub line:   usize,
}

/// One `elif` clause of an [`Stmt::If`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseIf {
    /// The clause condition.
    pub cond:   Expr,
    /// The node run when the condition holds.
    pub branch: Node,
    /// Line number in the source code.
    pub line:   usize,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// `var name = init;`
    VarDeclare {
        /// The name of the variable.
        name: String,
        /// The initial value; a `nil` literal when omitted.
        init: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value;`
    VarReassign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr;`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `{ ... }`. The last node is always [`Stmt::CloseBlock`].
    Block {
        /// Nodes inside the block.
        nodes: Vec<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (cond) branch elif (cond) branch else branch`
    If {
        /// The primary condition.
        cond:        Expr,
        /// Node run if the condition holds.
        branch:      Box<Node>,
        /// Clauses tried in order when the condition fails.
        else_ifs:    Vec<ElseIf>,
        /// Node run when no condition held.
        else_branch: Option<Box<Node>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (cond) body`
    While {
        /// The loop condition.
        cond: Expr,
        /// The loop body.
        body: Box<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// `for (init; cond; update) body`
    For {
        /// Runs once before the loop.
        init:   Option<Box<Node>>,
        /// The loop condition; always true when omitted.
        cond:   Option<Expr>,
        /// Runs after each pass of the body.
        update: Option<Box<Node>>,
        /// The loop body.
        body:   Box<Node>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `fun name(params) body`
    FuncDeclare(Rc<FunctionDef>),
    /// `name(args)`
    FuncCall(Call),
    /// `return value;`
    Return {
        /// The returned value, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name++`
    Increment {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `name--`
    Decrement {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Marks the end of a block.
    CloseBlock {
        /// Line number of the closing brace.
        line: usize,
    },
}

impl Stmt {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::VarDeclare { line, .. }
            | Self::VarReassign { line, .. }
            | Self::Print { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Return { line, .. }
            | Self::Increment { line, .. }
            | Self::Decrement { line, .. }
            | Self::CloseBlock { line } => *line,
            Self::FuncDeclare(def) => def.line,
            Self::FuncCall(call) => call.line,
        }
    }

    /// Returns the expression the statement wraps, if any.
    #[must_use]
    pub const fn expr(&self) -> Option<&Expr> {
        match self {
            Self::VarDeclare { init: expr, .. }
            | Self::VarReassign { value: expr, .. }
            | Self::Print { expr, .. }
            | Self::If { cond: expr, .. }
            | Self::While { cond: expr, .. }
            | Self::Return { value: Some(expr), .. } => Some(expr),
            _ => None,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Doubled plus (`++`), evaluated as `+`
    AddAdd,
    /// Subtraction (`-`)
    Sub,
    /// Doubled minus (`--`), evaluated as `-`
    SubSub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// Represents a logical operator. Both operands are always evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    /// `&&` / `and`
    And,
    /// `||` / `or`
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, AddAdd, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Sub, SubSub,
        };
        let operator = match self {
            Add => "+",
            AddAdd => "++",
            Sub => "-",
            SubSub => "--",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "&&"),
            Self::Or => write!(f, "||"),
        }
    }
}
