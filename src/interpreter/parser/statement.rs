use std::rc::Rc;

use crate::{
    ast::{ElseIf, Expr, FunctionDef, Node, Stmt},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl Parser {
    /// Parses `print expr;`.
    pub(super) fn parse_print(&mut self, keyword: &Token) -> ParseResult<Node> {
        let expr = self.parse_operand(keyword)?;
        self.consume(TokenKind::Semicolon, |at, line| ParseError::MissingSemicolon { at, line })?;

        Ok(Node::Stmt(Stmt::Print { expr,
                                    line: keyword.line }))
    }

    /// Parses `var name;` or `var name = expr;`.
    ///
    /// An omitted initializer is a `nil` literal.
    pub(super) fn parse_var_declaration(&mut self, keyword: &Token) -> ParseResult<Node> {
        let name = self.advance();
        match name.kind {
            TokenKind::Identifier => {},
            TokenKind::Eof => {
                return Err(ParseError::VariableNameExpected { at:   keyword.lexeme.clone(),
                                                              line: keyword.line, });
            },
            _ => {
                return Err(ParseError::InvalidVariableName { at:   name.lexeme,
                                                             line: name.line, });
            },
        }

        let init = if self.check(TokenKind::Equal) {
            let equal = self.advance();
            if self.is_at_end() || self.check(TokenKind::Semicolon) {
                return Err(ParseError::ExpressionAfterAssignmentExpected { at:   equal.lexeme,
                                                                           line: equal.line, });
            }
            self.parse_operand(&equal)?
        } else {
            Expr::nil(name.line)
        };

        self.consume(TokenKind::Semicolon, |at, line| ParseError::MissingSemicolon { at, line })?;

        Ok(Node::Stmt(Stmt::VarDeclare { name: name.lexeme,
                                         init,
                                         line: keyword.line }))
    }

    /// Parses an `if` statement with any number of `elif` / `else if`
    /// clauses and an optional `else`.
    ///
    /// Syntax:
    /// ```text
    ///     if <cond> <node>
    ///     elif <cond> <node>
    ///     else <node>
    /// ```
    /// A `;` directly after a branch is allowed before the next clause.
    pub(super) fn parse_if(&mut self, keyword: &Token) -> ParseResult<Node> {
        let cond = self.parse_operand(keyword)?;
        let branch = self.parse_branch(keyword)?;

        let mut else_ifs = Vec::new();
        let mut else_branch = None;

        loop {
            if self.check(TokenKind::Semicolon)
               && matches!(self.peek_next().kind, TokenKind::ElseIf | TokenKind::Else)
            {
                self.advance();
            }

            let is_else_if = self.check(TokenKind::ElseIf)
                             || (self.check(TokenKind::Else)
                                 && self.peek_next().kind == TokenKind::If);
            if is_else_if {
                let clause = self.advance();
                if clause.kind == TokenKind::Else {
                    self.advance();
                }
                let cond = self.parse_operand(&clause)?;
                let branch = self.parse_branch(&clause)?;
                else_ifs.push(ElseIf { cond,
                                       branch,
                                       line: clause.line });
                continue;
            }

            if self.check(TokenKind::Else) {
                let clause = self.advance();
                else_branch = Some(Box::new(self.parse_branch(&clause)?));
            }
            break;
        }

        Ok(Node::Stmt(Stmt::If { cond,
                                 branch: Box::new(branch),
                                 else_ifs,
                                 else_branch,
                                 line: keyword.line }))
    }

    /// Parses `while <cond> <node>`.
    pub(super) fn parse_while(&mut self, keyword: &Token) -> ParseResult<Node> {
        let cond = self.parse_operand(keyword)?;
        let body = self.parse_branch(keyword)?;

        Ok(Node::Stmt(Stmt::While { cond,
                                    body: Box::new(body),
                                    line: keyword.line }))
    }

    /// Parses `for (init; cond; update) body`. Each of the three clauses may
    /// be empty.
    pub(super) fn parse_for(&mut self, keyword: &Token) -> ParseResult<Node> {
        self.consume(TokenKind::LeftParen, |at, line| ParseError::MissingLeftParen { at, line })?;

        let init = if self.skip(TokenKind::Semicolon) {
            None
        } else {
            let node = self.parse_node()?;
            self.skip(TokenKind::Semicolon);
            Some(Box::new(node))
        };

        let cond = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_operand(keyword)?)
        };
        self.consume(TokenKind::Semicolon, |at, line| ParseError::MissingSemicolon { at, line })?;

        let update = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(Box::new(self.parse_node()?))
        };
        self.consume(TokenKind::RightParen, |at, line| ParseError::MissingRightParen { at, line })?;

        let body = self.parse_branch(keyword)?;

        Ok(Node::Stmt(Stmt::For { init,
                                  cond,
                                  update,
                                  body: Box::new(body),
                                  line: keyword.line }))
    }

    /// Parses `fun name(params) body`.
    ///
    /// The name is registered in the enclosing block before the body is
    /// parsed. A second function with the same name in that block, or
    /// anywhere in the blocks around it, is rejected whichever comes first.
    pub(super) fn parse_function_declaration(&mut self, keyword: &Token) -> ParseResult<Node> {
        let name = self.advance();
        match name.kind {
            TokenKind::Identifier => {},
            TokenKind::Eof => return Err(ParseError::UnexpectedEndOfInput { line: name.line }),
            _ => {
                return Err(ParseError::InvalidExpression { at:   name.lexeme,
                                                           line: name.line, });
            },
        }
        self.declare_function(&name)?;

        self.consume(TokenKind::LeftParen, |at, line| ParseError::MissingLeftParen { at, line })?;
        let params = self.parse_comma_separated(Self::parse_identifier)?;
        let body = self.parse_branch(keyword)?;

        Ok(Node::Stmt(Stmt::FuncDeclare(Rc::new(FunctionDef { name: name.lexeme,
                                                              params,
                                                              body,
                                                              line: keyword.line }))))
    }

    /// Parses `return;`, `return expr;` or a bare `return` before `}`.
    pub(super) fn parse_return(&mut self, keyword: &Token) -> ParseResult<Node> {
        let value = if self.is_at_end()
                       || self.check(TokenKind::Semicolon)
                       || self.check(TokenKind::RightBrace)
        {
            None
        } else {
            Some(self.parse_operand(keyword)?)
        };
        self.skip(TokenKind::Semicolon);

        Ok(Node::Stmt(Stmt::Return { value,
                                     line: keyword.line }))
    }

    /// Parses the node a control keyword governs.
    fn parse_branch(&mut self, keyword: &Token) -> ParseResult<Node> {
        if self.is_at_end() {
            return Err(ParseError::ExpressionExpected { at:   keyword.lexeme.clone(),
                                                        line: keyword.line, });
        }
        self.parse_node()
    }
}
