use crate::{ast::Node, config::Config, error::ParseError, interpreter::token::Token};

/// Parser state and the program-level entry points.
///
/// Holds the token cursor, the per-block function name stack and the error
/// recovery used in collect mode.
pub mod core;

/// Binary operator precedence levels.
///
/// Equality, comparison, additive, multiplicative and modulo levels share one
/// right-recursive rule; `&&` / `||` bind tightest of all.
pub mod binary;

/// Unary operators and primary dispatch.
///
/// Handles prefix `-` / `!`, literals, groupings and the identifier-led
/// statement forms (reassignment, calls, increment and decrement).
pub mod unary;

/// Keyword statements.
///
/// `print`, `var`, `if`, `while`, `for`, function declarations and `return`.
pub mod statement;

/// Block parsing and function name scoping.
pub mod block;

/// Token cursor helpers shared by the parser modules.
pub mod utils;

pub use self::core::{ParseResult, Parser};

/// Parses a filtered token list into top-level nodes.
///
/// # Errors
/// Returns the first error in [`ErrorMode::FailFast`], or every error in
/// [`ErrorMode::CollectAll`].
///
/// [`ErrorMode::FailFast`]: crate::config::ErrorMode::FailFast
/// [`ErrorMode::CollectAll`]: crate::config::ErrorMode::CollectAll
///
/// ## Example
/// ```
/// use brt::{config::Config,
///           interpreter::{lexer::{significant_tokens, tokenize}, parser::parse}};
///
/// let tokens = significant_tokens(tokenize(b"1 + 2 * 3").unwrap()).unwrap();
/// let nodes = parse(tokens, &Config::default()).unwrap();
///
/// assert_eq!(nodes[0].expr().unwrap().to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(tokens: Vec<Token>, config: &Config) -> Result<Vec<Node>, Vec<ParseError>> {
    Parser::new(tokens, config).parse_program()
}
