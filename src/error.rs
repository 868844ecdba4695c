/// Lexical errors.
///
/// Defines the errors raised while turning source bytes into tokens:
/// unterminated string and number literals and characters that start no
/// token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from a
/// token stream, including the missing-terminator class that a caller may
/// choose to collect instead of stopping at.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program:
/// undefined identifiers, redeclarations, operand type mismatches,
/// non-boolean conditions and call arity problems.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Exit code for programs rejected by the lexer or the parser.
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit code for runtime failures and fatal aborts.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug)]
/// Any error the interpreter pipeline can produce, tagged by phase.
pub enum Error {
    /// Scanning failed.
    Lex(LexError),
    /// Parsing failed. Holds one error in fail-fast mode and every recovered
    /// error in collect mode; never empty.
    Parse(Vec<ParseError>),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Maps the error to the process exit code the command line reports.
    ///
    /// ## Example
    /// ```
    /// use brt::error::{Error, LexError};
    ///
    /// let err = Error::from(LexError::UnterminatedString { lexeme: "\"a".to_string(),
    ///                                                      line:   1, });
    /// assert_eq!(err.exit_code(), 65);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lex(_) | Self::Parse(_) => EXIT_DATA_ERROR,
            Self::Runtime(_) => EXIT_FAILURE,
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(vec![value])
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(value: Vec<ParseError>) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(errors) => {
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            },
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
