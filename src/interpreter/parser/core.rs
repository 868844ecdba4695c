use tracing::debug;

use crate::{
    ast::Node,
    config::{Config, ErrorMode},
    error::ParseError,
    interpreter::{
        parser::block::BlockFunctions,
        token::{Token, TokenKind},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a filtered token list.
///
/// The parser owns the tokens and a stack of the function names declared in
/// each open block, which is all it needs to reject duplicate declarations.
/// It also counts how deeply the node being parsed is nested and gives up
/// past [`Config::max_nesting_depth`].
/// Calls to user functions are left unresolved; the runner looks them up when
/// they execute.
///
/// The list is expected to be free of `IGNORE` and `ILLEGAL` tokens (see
/// [`crate::interpreter::lexer::significant_tokens`]). A trailing `EOF` token
/// is appended when missing.
pub struct Parser {
    pub(super) tokens:    Vec<Token>,
    pub(super) pos:       usize,
    pub(super) functions: Vec<BlockFunctions>,
    mode:                 ErrorMode,
    depth:                usize,
    max_depth:            usize,
}

impl Parser {
    /// Creates a parser for `tokens` using the error mode and nesting limit
    /// of `config`.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>, config: &Config) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::plain(TokenKind::Eof, "", line));
        }
        let mut parser = Self { tokens,
                                pos: 0,
                                functions: Vec::new(),
                                mode: config.error_mode,
                                depth: 0,
                                max_depth: config.max_nesting_depth };
        let top_level = parser.scan_block_functions();
        parser.functions.push(top_level);
        parser
    }

    /// Parses the whole token list into top-level nodes.
    ///
    /// Stray `;` tokens between nodes are skipped. In
    /// [`ErrorMode::FailFast`] the first error ends parsing; in
    /// [`ErrorMode::CollectAll`] the parser skips past the next `;` or `}`
    /// after every error and reports all of them at the end.
    ///
    /// # Errors
    /// Returns every error encountered; the vector is never empty.
    pub fn parse_program(&mut self) -> Result<Vec<Node>, Vec<ParseError>> {
        let mut nodes = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if self.skip(TokenKind::Semicolon) {
                continue;
            }
            match self.parse_node() {
                Ok(node) => nodes.push(node),
                Err(e) if self.mode == ErrorMode::FailFast => return Err(vec![e]),
                Err(e) => {
                    debug!(error = %e, "recovering from parse error");
                    errors.push(e);
                    self.synchronize();
                },
            }
        }

        if errors.is_empty() {
            debug!(nodes = nodes.len(), "parsed program");
            Ok(nodes)
        } else {
            Err(errors)
        }
    }

    /// Parses one node, starting at the lowest precedence level.
    ///
    /// Grammar: `node := equality`
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeeplyNested`] once nodes nest past the
    /// configured limit.
    pub fn parse_node(&mut self) -> ParseResult<Node> {
        self.nested(Self::parse_equality)
    }

    /// Runs `parse` one nesting level deeper.
    pub(super) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.max_depth {
            let found = self.peek();
            return Err(ParseError::TooDeeplyNested { at:   found.lexeme.clone(),
                                                     line: found.line, });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }

    /// Skips to just past the next `;` or `}` and forgets any block-level
    /// function scopes the failed construct left open.
    fn synchronize(&mut self) {
        self.functions.truncate(1);
        while !self.is_at_end() {
            let token = self.advance();
            if matches!(token.kind, TokenKind::Semicolon | TokenKind::RightBrace) {
                return;
            }
        }
    }
}
