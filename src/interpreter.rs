/// Token kinds, the keyword table and the `Token` record.
///
/// Tokens carry their kind, the exact source text, a literal form and the
/// line they started on. The literal is the normalized number text for
/// numbers, the unquoted contents for strings and `null` for everything else.
pub mod token;

/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source bytes and produces a stream of tokens, each
/// corresponding to a language element such as a number, a string, an
/// identifier, an operator or a keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input bytes into tokens with kind and source line.
/// - Normalizes number literals and strips quotes from strings.
/// - Reports unterminated literals and illegal characters.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the significant tokens produced by the lexer and
/// constructs the nodes of the program. It holds no runtime state: user
/// function calls are resolved when they run.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Validates the grammar, reporting errors with the offending lexeme and
///   line.
/// - Rejects duplicate function declarations in enclosing blocks.
pub mod parser;

/// Scopes: variable bindings, function declarations and their parent links.
pub mod runtime;

/// The evaluator module computes values from expressions.
///
/// # Responsibilities
/// - Evaluates literals, groupings and operators.
/// - Performs function calls, native and user-defined.
/// - Reports runtime errors such as type mismatches or undefined names.
pub mod evaluator;

/// The runner executes statements against the interpreter's scopes.
pub mod runner;

/// The value module defines the runtime data types for evaluation.
///
/// Values are strings, numbers, booleans and `nil`. The module provides the
/// type checks used by operators and their textual representation.
pub mod value;
