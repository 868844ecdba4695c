use crate::{
    ast::{Call, CallTarget, Expr, Node, Stmt, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::is_native_function,
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl Parser {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// The operand is parsed at this same level, so `-1 + 2` negates only `1`
    /// and `!-x` is `!(-x)`. Each prefix operator counts as one nesting
    /// level.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("-" | "!") unary
    ///            | logical
    /// ```
    pub(super) fn parse_unary(&mut self) -> ParseResult<Node> {
        let op = match self.peek().kind {
            TokenKind::Minus => UnaryOperator::Negate,
            TokenKind::Bang => UnaryOperator::Not,
            _ => return self.parse_logical(),
        };

        let operator = self.advance();
        if self.is_at_end() {
            return Err(ParseError::ExpressionExpected { at:   operator.lexeme,
                                                        line: operator.line, });
        }
        let operand = self.nested(Self::parse_unary)?.into_expr(&operator.lexeme)?;

        Ok(Node::Expr(Expr::Unary { op,
                                    expr: Box::new(operand),
                                    line: operator.line }))
    }

    /// Parses a primary node.
    ///
    /// Besides literals and groupings, every statement form starts here: the
    /// leading keyword (or, for identifiers, the token after the name)
    /// decides what is parsed.
    pub(super) fn parse_primary(&mut self) -> ParseResult<Node> {
        let token = self.advance();
        match token.kind {
            TokenKind::LeftParen => self.parse_grouping(&token),
            TokenKind::LeftBrace => self.parse_block(&token),
            TokenKind::Print => self.parse_print(&token),
            TokenKind::Var => self.parse_var_declaration(&token),
            TokenKind::If => self.parse_if(&token),
            TokenKind::While => self.parse_while(&token),
            TokenKind::For => self.parse_for(&token),
            TokenKind::Func => self.parse_function_declaration(&token),
            TokenKind::Return => self.parse_return(&token),
            TokenKind::Identifier => self.parse_identifier_led(token),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil => Ok(Node::Expr(literal(token))),
            TokenKind::ElseIf | TokenKind::Else => {
                Err(ParseError::MissingIfBranch { at:   token.lexeme,
                                                  line: token.line, })
            },
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
            _ => Err(ParseError::ExpressionExpected { at:   token.lexeme,
                                                      line: token.line, }),
        }
    }

    /// Parses `( expr )`. The opening parenthesis is already consumed.
    fn parse_grouping(&mut self, open: &Token) -> ParseResult<Node> {
        let inner = self.parse_operand(open)?;
        self.consume(TokenKind::RightParen, |at, line| ParseError::MissingRightParen { at, line })?;

        Ok(Node::Expr(Expr::Grouping { expr: Box::new(inner),
                                       line: open.line }))
    }

    /// Parses the forms that start with a name, chosen by the next token:
    /// `name = value`, `name(args)`, `name++`, `name--`, or a plain read.
    fn parse_identifier_led(&mut self, name: Token) -> ParseResult<Node> {
        match self.peek().kind {
            TokenKind::Equal => {
                let equal = self.advance();
                let value = self.parse_operand(&equal)?;
                self.skip(TokenKind::Semicolon);
                Ok(Node::Stmt(Stmt::VarReassign { name: name.lexeme,
                                                  value,
                                                  line: name.line }))
            },
            TokenKind::LeftParen => {
                self.advance();
                let args = self.parse_comma_separated(|p| p.parse_operand(&name))?;
                let target = if is_native_function(&name.lexeme) {
                    CallTarget::Native
                } else {
                    CallTarget::User
                };
                Ok(Node::Stmt(Stmt::FuncCall(Call { name: name.lexeme,
                                                    args,
                                                    target,
                                                    line: name.line })))
            },
            TokenKind::PlusPlus => {
                self.advance();
                self.skip(TokenKind::Semicolon);
                Ok(Node::Stmt(Stmt::Increment { name: name.lexeme,
                                                line: name.line }))
            },
            TokenKind::MinusMinus => {
                self.advance();
                self.skip(TokenKind::Semicolon);
                Ok(Node::Stmt(Stmt::Decrement { name: name.lexeme,
                                                line: name.line }))
            },
            _ => Ok(Node::Expr(literal(name))),
        }
    }
}

/// Builds a literal from a value token. Strings keep their unquoted text,
/// numbers their source spelling; keyword literals use their canonical
/// spelling whatever alias was written.
fn literal(token: Token) -> Expr {
    let value = match token.kind {
        TokenKind::String => token.literal,
        TokenKind::True => "true".to_string(),
        TokenKind::False => "false".to_string(),
        TokenKind::Nil => "nil".to_string(),
        _ => token.lexeme,
    };
    Expr::Literal { kind: token.kind,
                    value,
                    line: token.line }
}
