use serde::Serialize;

/// Literal text carried by tokens that have no literal value.
pub const NULL_LITERAL: &str = "null";

/// The lexical category of a [`Token`].
///
/// Keywords are matched case-insensitively and several have an alternate
/// spelling; see [`keyword`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A byte or character that starts no token.
    Illegal,
    /// Whitespace and comments; dropped before parsing.
    Ignore,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `-`
    Minus,
    /// `--`
    MinusMinus,
    /// `.`
    Dot,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Modulo,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&` or `and`
    And,
    /// `||` or `or`
    Or,
    /// A double-quoted string literal.
    String,
    /// A number literal.
    Number,
    /// A variable or function name.
    Identifier,
    /// `true` / `bet`
    True,
    /// `false` / `cap`
    False,
    /// `nil` / `nada`
    Nil,
    /// `if` / `hmm`
    If,
    /// `elif` / `mid`
    ElseIf,
    /// `else` / `nah`
    Else,
    /// `var` / `yo`
    Var,
    /// `print` / `yap`
    Print,
    /// `while` / `vibin`
    While,
    /// `for` / `chillin`
    For,
    /// `fun` / `func` / `vibe`
    Func,
    /// `return` / `yoink`
    Return,
    /// `class` (reserved)
    Class,
    /// `super` (reserved)
    Super,
    /// `this` (reserved)
    This,
}

/// Reserved words and the token kind each one produces.
const KEYWORDS: &[(&str, TokenKind)] = &[("var", TokenKind::Var),
                                         ("yo", TokenKind::Var),
                                         ("print", TokenKind::Print),
                                         ("yap", TokenKind::Print),
                                         ("if", TokenKind::If),
                                         ("hmm", TokenKind::If),
                                         ("elif", TokenKind::ElseIf),
                                         ("mid", TokenKind::ElseIf),
                                         ("else", TokenKind::Else),
                                         ("nah", TokenKind::Else),
                                         ("true", TokenKind::True),
                                         ("bet", TokenKind::True),
                                         ("false", TokenKind::False),
                                         ("cap", TokenKind::False),
                                         ("nil", TokenKind::Nil),
                                         ("nada", TokenKind::Nil),
                                         ("and", TokenKind::And),
                                         ("or", TokenKind::Or),
                                         ("while", TokenKind::While),
                                         ("vibin", TokenKind::While),
                                         ("for", TokenKind::For),
                                         ("chillin", TokenKind::For),
                                         ("fun", TokenKind::Func),
                                         ("func", TokenKind::Func),
                                         ("vibe", TokenKind::Func),
                                         ("return", TokenKind::Return),
                                         ("yoink", TokenKind::Return),
                                         ("class", TokenKind::Class),
                                         ("super", TokenKind::Super),
                                         ("this", TokenKind::This)];

/// Looks up a reserved word, ignoring ASCII case.
///
/// ## Example
/// ```
/// use brt::interpreter::token::{TokenKind, keyword};
///
/// assert_eq!(keyword("var"), Some(TokenKind::Var));
/// assert_eq!(keyword("YAP"), Some(TokenKind::Print));
/// assert_eq!(keyword("counter"), None);
/// ```
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
}

impl TokenKind {
    /// The upper-case category name used by the token dump.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ignore => "IGNORE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Plus => "PLUS",
            Self::PlusPlus => "PLUS_PLUS",
            Self::Minus => "MINUS",
            Self::MinusMinus => "MINUS_MINUS",
            Self::Dot => "DOT",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Modulo => "MODULO",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Nil => "NIL",
            Self::If => "IF",
            Self::ElseIf => "ELSE_IF",
            Self::Else => "ELSE",
            Self::Var => "VAR",
            Self::Print => "PRINT",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Func => "FUNC",
            Self::Return => "RETURN",
            Self::Class => "CLASS",
            Self::Super => "SUPER",
            Self::This => "THIS",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A lexical token: category, raw source text, normalized literal and the
/// 1-based line it was read on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The exact source text.
    pub lexeme:  String,
    /// The normalized literal, or [`NULL_LITERAL`].
    pub literal: String,
    /// The source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: impl Into<String>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: literal.into(),
               line }
    }

    /// Creates a token whose literal is [`NULL_LITERAL`].
    #[must_use]
    pub fn plain(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self::new(kind, lexeme, NULL_LITERAL, line)
    }
}

/// Formats the token as `KIND LEXEME LITERAL`.
///
/// ## Example
/// ```
/// use brt::interpreter::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number, "42", "42.0", 1);
/// assert_eq!(token.to_string(), "NUMBER 42 42.0");
/// ```
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
