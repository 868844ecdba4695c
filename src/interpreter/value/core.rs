use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are copied, never shared; there are no reference types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string.
    Str(String),
    /// A number (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons, equality and logical operators. Conditions of
    /// `if`, `while` and `for` must evaluate to `Bool`.
    Bool(bool),
    /// The absence of a value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// The name of the value's type as used in error messages.
    ///
    /// ## Example
    /// ```
    /// use brt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.0).type_name(), "number");
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Nil => "nil",
        }
    }

    /// Returns `true` if both values have the same dynamic type.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns the number inside the value.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` reported at `at` when the value is
    /// not a number.
    pub fn as_number(&self, at: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { at: at.to_string(),
                                               expected: "number".to_string(),
                                               line }),
        }
    }

    /// Returns the boolean inside the value.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` reported at `at` when the value is
    /// not a boolean.
    pub fn as_bool(&self, at: &str, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { at: at.to_string(),
                                               expected: "boolean".to_string(),
                                               line }),
        }
    }
}

/// Formats the value the way `print` shows it.
///
/// ## Example
/// ```
/// use brt::interpreter::value::core::Value;
///
/// assert_eq!(Value::from(7.0).to_string(), "7");
/// assert_eq!(Value::from(2.5).to_string(), "2.5");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
