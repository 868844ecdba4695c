#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the AST.
///
/// Every variant except [`ParseError::UnexpectedEndOfInput`] records the
/// lexeme of the token the parser was looking at when it gave up.
pub enum ParseError {
    /// An expression was required but something else was found.
    ExpressionExpected {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `var name =` was not followed by an expression.
    ExpressionAfterAssignmentExpected {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration keyword was not followed by a name.
    VariableNameExpected {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration target is not a plain identifier.
    InvalidVariableName {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A construct is syntactically valid in isolation but not here.
    InvalidExpression {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `;` terminator was required.
    MissingSemicolon {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` was required.
    MissingLeftParen {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `)` was required.
    MissingRightParen {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block was never closed with `}`.
    MissingRightBrace {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `else` or `elif` clause appeared without a leading `if`.
    MissingIfBranch {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function with this name is already declared in an enclosing scope.
    IdentifierAlreadyExists {
        /// The function name.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parameter or argument list is longer than 255 entries.
    TooManyArguments {
        /// The offending lexeme.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Groupings, blocks or unary operators are nested past the configured
    /// limit.
    TooDeeplyNested {
        /// The lexeme where the limit was crossed.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token stream ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpressionExpected { line, .. }
            | Self::ExpressionAfterAssignmentExpected { line, .. }
            | Self::VariableNameExpected { line, .. }
            | Self::InvalidVariableName { line, .. }
            | Self::InvalidExpression { line, .. }
            | Self::MissingSemicolon { line, .. }
            | Self::MissingLeftParen { line, .. }
            | Self::MissingRightParen { line, .. }
            | Self::MissingRightBrace { line, .. }
            | Self::MissingIfBranch { line, .. }
            | Self::IdentifierAlreadyExists { line, .. }
            | Self::TooManyArguments { line, .. }
            | Self::TooDeeplyNested { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }

    /// Returns `true` for errors caused by a missing mandatory token
    /// (`;`, `(`, `)` or `}`).
    ///
    /// ## Example
    /// ```
    /// use brt::error::ParseError;
    ///
    /// let missing = ParseError::MissingSemicolon { at: "print".to_string(), line: 1 };
    /// assert!(missing.is_mandatory_token());
    ///
    /// let other = ParseError::ExpressionExpected { at: ")".to_string(), line: 1 };
    /// assert!(!other.is_mandatory_token());
    /// ```
    #[must_use]
    pub const fn is_mandatory_token(&self) -> bool {
        matches!(self,
                 Self::MissingSemicolon { .. }
                 | Self::MissingLeftParen { .. }
                 | Self::MissingRightParen { .. }
                 | Self::MissingRightBrace { .. })
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::ExpressionExpected { .. } => "expression expected",
            Self::ExpressionAfterAssignmentExpected { .. } => {
                "expression after assignment expected"
            },
            Self::VariableNameExpected { .. } => "variable name expected",
            Self::InvalidVariableName { .. } => "invalid variable name",
            Self::InvalidExpression { .. } => "invalid expression",
            Self::MissingSemicolon { .. } => "missing ';'",
            Self::MissingLeftParen { .. } => "missing '('",
            Self::MissingRightParen { .. } => "missing ')'",
            Self::MissingRightBrace { .. } => "missing '}'",
            Self::MissingIfBranch { .. } => "missing 'if' branch",
            Self::IdentifierAlreadyExists { .. } => "identifier already exists",
            Self::TooManyArguments { .. } => "can't have more than 255 arguments",
            Self::TooDeeplyNested { .. } => "expression nested too deeply",
            Self::UnexpectedEndOfInput { .. } => "unexpected end of input",
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message();
        match self {
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "[line {line}] Error at end: {message}")
            },
            Self::ExpressionExpected { at, line }
            | Self::ExpressionAfterAssignmentExpected { at, line }
            | Self::VariableNameExpected { at, line }
            | Self::InvalidVariableName { at, line }
            | Self::InvalidExpression { at, line }
            | Self::MissingSemicolon { at, line }
            | Self::MissingLeftParen { at, line }
            | Self::MissingRightParen { at, line }
            | Self::MissingRightBrace { at, line }
            | Self::MissingIfBranch { at, line }
            | Self::IdentifierAlreadyExists { at, line }
            | Self::TooManyArguments { at, line }
            | Self::TooDeeplyNested { at, line } => {
                write!(f, "[line {line}] Error at '{at}': {message}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
