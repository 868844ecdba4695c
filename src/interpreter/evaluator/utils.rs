use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a condition and requires it to produce a boolean.
    ///
    /// Used by `if`, `elif`, `while` and `for`. There is no truthiness:
    /// `nil`, numbers and strings are all rejected.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` reported at the printed form
    /// of the condition.
    pub(crate) fn expect_bool(&mut self, cond: &Expr) -> EvalResult<bool> {
        match self.eval(cond)? {
            Value::Bool(b) => Ok(b),
            _ => Err(RuntimeError::ExpectedBoolean { at:   cond.to_string(),
                                                     line: cond.line(), }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn non_boolean_conditions_are_rejected() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let cond = Expr::number("1", 4);

        let err = interpreter.expect_bool(&cond).unwrap_err();
        assert_eq!(err.to_string(), "[line 4] Error at '1': expected boolean expression");
    }

    #[test]
    fn boolean_conditions_pass_through() {
        let mut interpreter = Interpreter::new(Vec::<u8>::new(), Config::default());
        let cond = Expr::Literal { kind:  crate::interpreter::token::TokenKind::True,
                                   value: "true".to_string(),
                                   line:  1, };

        assert!(interpreter.expect_bool(&cond).unwrap());
    }
}
