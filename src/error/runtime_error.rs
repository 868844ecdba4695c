#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while running a program.
pub enum RuntimeError {
    /// Read, reassigned or called a name that no enclosing scope declares.
    UndefinedIdentifier {
        /// The name that could not be resolved.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that is already bound.
    IdentifierAlreadyExists {
        /// The duplicated name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator received operands of the wrong dynamic type.
    TypeError {
        /// The operator or name the error is reported at.
        at:       String,
        /// What the operator needed, e.g. `number` or `string`.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `==` or `!=` compared values of different types.
    TypeMismatch {
        /// The operator.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A condition did not evaluate to a boolean.
    ExpectedBoolean {
        /// The rendered condition.
        at:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A number literal could not be parsed as a 64-bit float.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Nested calls exceeded the configured depth.
    StackOverflow {
        /// The function whose call crossed the limit.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value produced by a native function cannot be represented.
    NativeFailure {
        /// The native function name.
        name:    String,
        /// Details about the failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Program output could not be written.
    OutputFailed {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedIdentifier { line, .. }
            | Self::IdentifierAlreadyExists { line, .. }
            | Self::TypeError { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ExpectedBoolean { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::StackOverflow { line, .. }
            | Self::NativeFailure { line, .. }
            | Self::OutputFailed { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedIdentifier { name, line } => {
                write!(f, "[line {line}] Error at '{name}': undefined identifier")
            },
            Self::IdentifierAlreadyExists { name, line } => {
                write!(f, "[line {line}] Error at '{name}': identifier already exists")
            },
            Self::TypeError { at, expected, line } => {
                write!(f, "[line {line}] Error at '{at}': operands must be of type {expected}")
            },
            Self::TypeMismatch { at, line } => {
                write!(f, "[line {line}] Error at '{at}': operands must be of the same type")
            },
            Self::ExpectedBoolean { at, line } => {
                write!(f, "[line {line}] Error at '{at}': expected boolean expression")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "[line {line}] Error at '{name}': expected {expected} arguments but got {found}"),
            Self::InvalidNumber { literal, line } => {
                write!(f, "[line {line}] Error at '{literal}': invalid number literal")
            },
            Self::StackOverflow { name, limit, line } => write!(f,
                                                                "[line {line}] Error at '{name}': call depth exceeded {limit}"),
            Self::NativeFailure { name, details, line } => {
                write!(f, "[line {line}] Error at '{name}': {details}")
            },
            Self::OutputFailed { details, line } => {
                write!(f, "[line {line}] Error: could not write output: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
