use std::str::Utf8Chunks;

use logos::Logos;
use tracing::debug;

use crate::{error::LexError,
            interpreter::token::{Token, TokenKind, keyword}};

/// Result type produced by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw scanner output. Only ever converted into a [`Token`], never exposed.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = ScanError)]
enum RawToken {
    /// String literal tokens such as `"hello"`; holds the text between the
    /// quotes.
    #[regex(r#""[^"\n]*""#, string_literal, allow_greedy = true)]
    #[regex(r#""[^"\n]*"#, |_| { Err::<String, _>(ScanError::UnterminatedString) }, allow_greedy = true)]
    Str(String),
    /// Number literal tokens such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+\.([0-9]+\.)?", |_| { Err::<String, _>(ScanError::UnterminatedNumber) })]
    Number(String),
    /// Identifiers and reserved words.
    #[regex(r"[#$':?-z~][#$'0-:?-z~]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `-`
    #[token("-")]
    Minus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `.`
    #[token(".")]
    Dot,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `// Comments.`
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        RawToken::Newline
    })]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+")]
    Whitespace,
}

/// Failure classes the scanner can report for a single match.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum ScanError {
    UnterminatedString,
    UnterminatedNumber,
    #[default]
    Unrecognized,
}

/// Additional information carried by the scanner.
///
/// Tracks the current 1-based line for tokens and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn string_literal(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Streaming tokenizer over raw source bytes.
///
/// Valid UTF-8 runs are scanned by the logos automaton; every byte that is
/// not part of valid UTF-8 comes out as its own `ILLEGAL` token. The stream
/// ends with exactly one `EOF` token.
///
/// ## Example
/// ```
/// use brt::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new(b"yap 1;").filter_map(Result::ok)
///                                                  .map(|t| t.kind)
///                                                  .filter(|k| *k != TokenKind::Ignore)
///                                                  .collect();
/// assert_eq!(kinds,
///            [TokenKind::Print, TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    chunks:   Utf8Chunks<'src>,
    scanner:  Option<logos::Lexer<'src, RawToken>>,
    invalid:  &'src [u8],
    line:     usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        Self { chunks:   source.utf8_chunks(),
               scanner:  None,
               invalid:  &[],
               line:     1,
               finished: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(scanner) = &mut self.scanner {
                if let Some(raw) = scanner.next() {
                    return Some(convert(raw, scanner.slice(), scanner.extras.line));
                }
                self.line = scanner.extras.line;
                self.scanner = None;
            }

            if let Some((&byte, rest)) = self.invalid.split_first() {
                self.invalid = rest;
                let shown = format!("\\x{byte:02X}");
                return Some(Ok(Token::new(TokenKind::Illegal, shown.clone(), shown, self.line)));
            }

            match self.chunks.next() {
                Some(chunk) => {
                    self.scanner = Some(RawToken::lexer_with_extras(chunk.valid(),
                                                                    LexerExtras { line: self.line }));
                    self.invalid = chunk.invalid();
                },
                None if self.finished => return None,
                None => {
                    self.finished = true;
                    return Some(Ok(Token::plain(TokenKind::Eof, "", self.line)));
                },
            }
        }
    }
}

fn convert(raw: Result<RawToken, ScanError>, slice: &str, line: usize) -> LexResult<Token> {
    let kind = match raw {
        Ok(RawToken::Str(text)) => return Ok(Token::new(TokenKind::String, slice, text, line)),
        Ok(RawToken::Number(digits)) => {
            let literal = if digits.contains('.') { digits } else { format!("{digits}.0") };
            return Ok(Token::new(TokenKind::Number, slice, literal, line));
        },
        Ok(RawToken::Word(word)) => keyword(&word).unwrap_or(TokenKind::Identifier),
        Ok(RawToken::LeftParen) => TokenKind::LeftParen,
        Ok(RawToken::RightParen) => TokenKind::RightParen,
        Ok(RawToken::LeftBrace) => TokenKind::LeftBrace,
        Ok(RawToken::RightBrace) => TokenKind::RightBrace,
        Ok(RawToken::Comma) => TokenKind::Comma,
        Ok(RawToken::Semicolon) => TokenKind::Semicolon,
        Ok(RawToken::Plus) => TokenKind::Plus,
        Ok(RawToken::PlusPlus) => TokenKind::PlusPlus,
        Ok(RawToken::Minus) => TokenKind::Minus,
        Ok(RawToken::MinusMinus) => TokenKind::MinusMinus,
        Ok(RawToken::Dot) => TokenKind::Dot,
        Ok(RawToken::Star) => TokenKind::Star,
        Ok(RawToken::Slash) => TokenKind::Slash,
        Ok(RawToken::Modulo) => TokenKind::Modulo,
        Ok(RawToken::Equal) => TokenKind::Equal,
        Ok(RawToken::EqualEqual) => TokenKind::EqualEqual,
        Ok(RawToken::Bang) => TokenKind::Bang,
        Ok(RawToken::BangEqual) => TokenKind::BangEqual,
        Ok(RawToken::Less) => TokenKind::Less,
        Ok(RawToken::LessEqual) => TokenKind::LessEqual,
        Ok(RawToken::Greater) => TokenKind::Greater,
        Ok(RawToken::GreaterEqual) => TokenKind::GreaterEqual,
        Ok(RawToken::AndAnd) => TokenKind::And,
        Ok(RawToken::OrOr) => TokenKind::Or,
        Ok(RawToken::Comment | RawToken::Newline | RawToken::Whitespace) => TokenKind::Ignore,
        Err(ScanError::UnterminatedString) => {
            return Err(LexError::UnterminatedString { lexeme: slice.to_string(),
                                                      line });
        },
        Err(ScanError::UnterminatedNumber) => {
            return Err(LexError::UnterminatedNumber { lexeme: slice.to_string(),
                                                      line });
        },
        Err(ScanError::Unrecognized) => {
            return Ok(Token::new(TokenKind::Illegal, slice, slice, line));
        },
    };
    Ok(Token::plain(kind, slice, line))
}

/// Scans the whole input into tokens, stopping at the first unterminated
/// literal.
///
/// `IGNORE` and `ILLEGAL` tokens are kept so a token dump can show them; see
/// [`significant_tokens`] for the parser's view.
///
/// # Errors
/// Returns the first [`LexError::UnterminatedString`] or
/// [`LexError::UnterminatedNumber`].
///
/// ## Example
/// ```
/// use brt::interpreter::lexer::tokenize;
///
/// let tokens = tokenize(b"var x = 3;").unwrap();
/// assert_eq!(tokens.last().unwrap().to_string(), "EOF  null");
/// assert!(tokenize(b"\"open").is_err());
/// ```
pub fn tokenize(source: &[u8]) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(source).collect::<LexResult<Vec<_>>>()?;
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Drops `IGNORE` tokens and rejects the first `ILLEGAL` one.
///
/// # Errors
/// Returns [`LexError::IllegalCharacter`] for the first illegal token.
pub fn significant_tokens(tokens: Vec<Token>) -> LexResult<Vec<Token>> {
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.kind {
            TokenKind::Ignore => {},
            TokenKind::Illegal => {
                return Err(LexError::IllegalCharacter { character: token.lexeme,
                                                        line:      token.line, });
            },
            _ => kept.push(token),
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        significant_tokens(tokenize(source.as_bytes()).unwrap()).unwrap()
                                                                .into_iter()
                                                                .map(|t| t.kind)
                                                                .collect()
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("++ -- == != <= >= && || = ! < >"),
                   [TokenKind::PlusPlus,
                    TokenKind::MinusMinus,
                    TokenKind::EqualEqual,
                    TokenKind::BangEqual,
                    TokenKind::LessEqual,
                    TokenKind::GreaterEqual,
                    TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Equal,
                    TokenKind::Bang,
                    TokenKind::Less,
                    TokenKind::Greater,
                    TokenKind::Eof]);
    }

    #[test]
    fn keywords_ignore_case_and_accept_aliases() {
        assert_eq!(kinds("YO Hmm mid NAH vibin chillin vibe yoink bet cap nada"),
                   [TokenKind::Var,
                    TokenKind::If,
                    TokenKind::ElseIf,
                    TokenKind::Else,
                    TokenKind::While,
                    TokenKind::For,
                    TokenKind::Func,
                    TokenKind::Return,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Nil,
                    TokenKind::Eof]);
    }

    #[test]
    fn numbers_get_a_fraction() {
        let tokens = tokenize(b"42 3.5").unwrap();
        let numbers: Vec<_> = tokens.iter()
                                    .filter(|t| t.kind == TokenKind::Number)
                                    .map(|t| t.literal.as_str())
                                    .collect();
        assert_eq!(numbers, ["42.0", "3.5"]);
    }

    #[test]
    fn lines_advance_on_newlines() {
        let tokens = significant_tokens(tokenize(b"a\n\nb // c\nd").unwrap()).unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 3, 4, 4]);
    }

    #[test]
    fn lone_ampersand_is_illegal() {
        let tokens = tokenize(b"a & b").unwrap();
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Illegal && t.lexeme == "&"));
        assert_eq!(significant_tokens(tokens),
                   Err(LexError::IllegalCharacter { character: "&".to_string(),
                                                    line:      1, }));
    }

    #[test]
    fn invalid_utf8_becomes_illegal_bytes() {
        let tokens = tokenize(b"a \xFF b").unwrap();
        let illegal: Vec<_> = tokens.iter()
                                    .filter(|t| t.kind == TokenKind::Illegal)
                                    .map(|t| t.lexeme.as_str())
                                    .collect();
        assert_eq!(illegal, ["\\xFF"]);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn unterminated_literals_fail() {
        assert!(matches!(tokenize(b"\"abc\nx"),
                         Err(LexError::UnterminatedString { line: 1, .. })));
        assert!(matches!(tokenize(b"\n1."), Err(LexError::UnterminatedNumber { line: 2, .. })));
        assert!(matches!(tokenize(b"1.2.3"), Err(LexError::UnterminatedNumber { .. })));
    }
}
