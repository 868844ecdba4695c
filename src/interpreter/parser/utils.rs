use crate::{
    ast::{Expr, Node},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

/// Builds a [`ParseError`] from the offending lexeme and its line.
pub(super) type ErrorFn = fn(String, usize) -> ParseError;

/// The most parameters a function may declare, and the most arguments a call
/// may pass.
pub const MAX_ARGUMENTS: usize = 255;

impl Parser {
    /// Returns the next unconsumed token. Past the end this is the `EOF`
    /// token.
    pub(super) fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    /// Returns the token after [`Parser::peek`].
    pub(super) fn peek_next(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + 1).min(last)]
    }

    /// Consumes and returns the next token. `EOF` is never consumed.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the next token if it has the given kind.
    pub(super) fn skip(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a mandatory token, failing with `error` at the token found
    /// instead.
    pub(super) fn consume(&mut self, kind: TokenKind, error: ErrorFn) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let found = self.peek();
        Err(error(found.lexeme.clone(), found.line))
    }

    /// Requires the token after `operator` to sit on the operator's line.
    pub(super) fn expect_same_line(&self, operator: &Token) -> ParseResult<()> {
        if self.peek().line == operator.line && !self.is_at_end() {
            return Ok(());
        }
        Err(ParseError::ExpressionExpected { at:   operator.lexeme.clone(),
                                             line: operator.line, })
    }

    /// Parses a node that must be usable as a value.
    ///
    /// `at` names the token the operand belongs to, for the error message.
    pub(super) fn parse_operand(&mut self, at: &Token) -> ParseResult<Expr> {
        if self.is_at_end() {
            return Err(ParseError::ExpressionExpected { at:   at.lexeme.clone(),
                                                        line: at.line, });
        }
        self.parse_node()?.into_expr(&at.lexeme)
    }

    /// Parses a comma-separated list of items up to and including `)`.
    ///
    /// An immediately encountered `)` produces an empty list. More than
    /// [`MAX_ARGUMENTS`] items is an error.
    ///
    /// Grammar: `list := (item ("," item)*)? ")"`
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
                                           -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.skip(TokenKind::RightParen) {
            return Ok(items);
        }
        loop {
            if items.len() >= MAX_ARGUMENTS {
                let found = self.peek();
                return Err(ParseError::TooManyArguments { at:   found.lexeme.clone(),
                                                          line: found.line, });
            }
            items.push(parse_item(self)?);
            if !self.skip(TokenKind::Comma) {
                break;
            }
        }
        self.consume(TokenKind::RightParen, |at, line| ParseError::MissingRightParen { at, line })?;
        Ok(items)
    }

    /// Parses a plain identifier, as used for parameter names.
    pub(super) fn parse_identifier(&mut self) -> ParseResult<String> {
        let token = self.advance();
        match token.kind {
            TokenKind::Identifier => Ok(token.lexeme),
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
            _ => Err(ParseError::InvalidVariableName { at:   token.lexeme,
                                                       line: token.line, }),
        }
    }
}

/// Returns `true` when the node can only appear where a statement may.
pub(super) const fn is_statement(node: &Node) -> bool {
    matches!(node, Node::Stmt(stmt) if !matches!(stmt, crate::ast::Stmt::FuncCall(_)))
}
