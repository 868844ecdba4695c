use std::collections::HashSet;

use crate::{
    ast::{Node, Stmt},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

/// Function names of one open block.
///
/// `ahead` holds every function the block declares directly, collected
/// before its nodes are parsed, so nested blocks see outer declarations that
/// come later in the source. `declared` holds the ones parsed so far.
#[derive(Debug, Default)]
pub(super) struct BlockFunctions {
    ahead:    HashSet<String>,
    declared: HashSet<String>,
}

impl Parser {
    /// Parses a block delimited by braces. The opening brace is already
    /// consumed.
    ///
    /// Stray `;` tokens between nodes are skipped. The resulting node list
    /// always ends with a [`Stmt::CloseBlock`] carrying the line of the
    /// closing brace.
    ///
    /// Grammar: `block := "{" node* "}"`
    pub(super) fn parse_block(&mut self, open: &Token) -> ParseResult<Node> {
        let scope = self.scan_block_functions();
        self.functions.push(scope);
        let nodes = self.parse_block_body();
        self.functions.pop();

        Ok(Node::Stmt(Stmt::Block { nodes: nodes?,
                                    line:  open.line, }))
    }

    fn parse_block_body(&mut self) -> ParseResult<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            if self.check(TokenKind::RightBrace) {
                let close = self.advance();
                nodes.push(Node::Stmt(Stmt::CloseBlock { line: close.line }));
                return Ok(nodes);
            }
            if self.is_at_end() {
                let found = self.peek();
                return Err(ParseError::MissingRightBrace { at:   found.lexeme.clone(),
                                                           line: found.line, });
            }
            if self.skip(TokenKind::Semicolon) {
                continue;
            }
            nodes.push(self.parse_node()?);
        }
    }

    /// Collects the names of the functions declared directly in the block
    /// starting at the cursor, up to its closing `}` or the end of input.
    pub(super) fn scan_block_functions(&self) -> BlockFunctions {
        let mut ahead = HashSet::new();
        let mut depth = 0usize;
        let rest = self.tokens.get(self.pos..).unwrap_or_default();

        for (i, token) in rest.iter().enumerate() {
            match token.kind {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace if depth == 0 => break,
                TokenKind::RightBrace => depth -= 1,
                TokenKind::Func if depth == 0 => {
                    if let Some(name) = rest.get(i + 1).filter(|t| t.kind == TokenKind::Identifier) {
                        ahead.insert(name.lexeme.clone());
                    }
                },
                TokenKind::Eof => break,
                _ => {},
            }
        }

        BlockFunctions { ahead,
                         declared: HashSet::new() }
    }

    /// Records a function name in the innermost block.
    ///
    /// The name is rejected if the innermost block already declared it, or
    /// if any enclosing block declares it anywhere, before or after this
    /// point.
    pub(super) fn declare_function(&mut self, name: &Token) -> ParseResult<()> {
        let duplicate = match self.functions.split_last_mut() {
            Some((current, enclosing)) => {
                enclosing.iter().any(|scope| scope.ahead.contains(&name.lexeme))
                || !current.declared.insert(name.lexeme.clone())
            },
            None => false,
        };
        if duplicate {
            return Err(ParseError::IdentifierAlreadyExists { at:   name.lexeme.clone(),
                                                             line: name.line, });
        }
        Ok(())
    }
}
