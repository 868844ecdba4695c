//! # brt
//!
//! brt is a tree-walking interpreter for a small dynamically typed scripting
//! language. It tokenizes `.brt` source, parses the tokens into expression and
//! statement nodes and runs them against a chain of nested scopes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, sync::Once};

use tracing::debug;

use crate::{
    ast::Node,
    config::Config,
    error::Error,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{significant_tokens, tokenize},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node`, `Expr` and `Stmt` types that represent
/// the syntactic structure of a program. The tree is built by the parser and
/// walked by the evaluator and the runner.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to every node for error reporting.
/// - Renders expressions in a parenthesized prefix form.
pub mod ast;
/// Interpreter settings.
///
/// The call depth limit, how called functions link to enclosing scopes and
/// whether the parser stops at the first error.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines every error that can be raised while scanning,
/// parsing or running code. Each carries the source line and the offending
/// text so diagnostics can point at the problem.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, runtime).
/// - Formats diagnostics as `[line N] Error at 'LEXEME': MESSAGE`.
/// - Maps each phase to a process exit code.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value and scope types.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and runner.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Lexes and parses a source buffer.
///
/// # Errors
/// Returns the first lexical error, or the parse errors the configured
/// [`config::ErrorMode`] collects.
///
/// ## Example
/// ```
/// use brt::{config::Config, parse_source};
///
/// let nodes = parse_source(b"print 1 + 2;", &Config::default()).unwrap();
/// assert_eq!(nodes[0].expr().unwrap().to_string(), "(+ 1 2)");
///
/// assert!(parse_source(b"print 1", &Config::default()).is_err());
/// ```
pub fn parse_source(source: &[u8], config: &Config) -> Result<Vec<Node>, Error> {
    let tokens = significant_tokens(tokenize(source)?)?;
    let nodes = parse(tokens, config)?;
    debug!(nodes = nodes.len(), "parsed");
    Ok(nodes)
}

/// Runs a program, writing everything it prints to `out`.
///
/// # Errors
/// Returns an error if lexing, parsing or execution fails. Output written
/// before a runtime error stays in `out`.
///
/// ## Example
/// ```
/// use brt::{config::Config, run};
///
/// let mut out = Vec::<u8>::new();
/// run(b"var x = 3; var y = 4; print x + y;", &mut out, Config::default()).unwrap();
/// assert_eq!(out, b"7\n");
///
/// // 'y' is not declared.
/// let res = run(b"print y;", std::io::sink(), Config::default());
/// assert_eq!(res.unwrap_err().exit_code(), 1);
/// ```
pub fn run<W: Write>(source: &[u8], out: W, config: Config) -> Result<(), Error> {
    let nodes = parse_source(source, &config)?;
    Interpreter::new(out, config).run(&nodes)?;
    Ok(())
}

/// Executes a program and prints the value of every top-level expression.
///
/// # Errors
/// Returns an error if lexing, parsing or execution fails.
///
/// ## Example
/// ```
/// use brt::{config::Config, evaluate};
///
/// let mut out = Vec::<u8>::new();
/// evaluate(b"1 + 2 \"a\"", &mut out, Config::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3\na\n");
/// ```
pub fn evaluate<W: Write>(source: &[u8], out: W, config: Config) -> Result<(), Error> {
    let nodes = parse_source(source, &config)?;
    Interpreter::new(out, config).evaluate(&nodes)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostics on stderr.
///
/// Call this once at startup. Safe to call multiple times. The filter comes
/// from `RUST_LOG`; without it only warnings are shown, or `brt=debug` when
/// `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let fallback = if verbose { "brt=debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true))
                                      .with(filter)
                                      .init();
    });
}
