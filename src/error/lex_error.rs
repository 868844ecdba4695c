#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source bytes.
pub enum LexError {
    /// A string literal reached a newline or the end of input before its
    /// closing quote.
    UnterminatedString {
        /// The partial literal, opening quote included.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A number literal ended in `.` or contained a second `.`.
    UnterminatedNumber {
        /// The partial literal.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A byte or character that starts no token.
    IllegalCharacter {
        /// Printable form of the offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl LexError {
    /// Gets the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnterminatedNumber { line, .. }
            | Self::IllegalCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line, .. } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },
            Self::UnterminatedNumber { line, .. } => {
                write!(f, "[line {line}] Error: Unterminated number.")
            },
            Self::IllegalCharacter { character, line } => {
                write!(f, "[line {line}] Error: Unexpected character: {character}")
            },
        }
    }
}

impl std::error::Error for LexError {}
