use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use brt::{
    config::{Config, ErrorMode, FunctionScope},
    error::{EXIT_DATA_ERROR, EXIT_FAILURE, Error, LexError},
    evaluate,
    interpreter::{lexer::Lexer, token::TokenKind},
    parse_source, run,
};
use clap::{Parser, Subcommand};
use tracing::debug;

/// brt is a small dynamically typed scripting language with a tree-walking
/// interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Nested function calls allowed before a stack overflow error.
    #[arg(long, global = true, default_value_t = brt::config::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Nested groupings, blocks and unary operators allowed before a parse
    /// error.
    #[arg(long, global = true, default_value_t = brt::config::DEFAULT_MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    /// Link a called function's scope to the caller's scope instead of the
    /// scope it was declared in.
    #[arg(long, global = true)]
    call_site_scope: bool,

    /// Report every parse error instead of stopping at the first one.
    #[arg(long, global = true)]
    collect_errors: bool,

    /// Log phase diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every token of the file.
    Tokenize { file: PathBuf },
    /// Print the parenthesized form of every top-level expression.
    Parse { file: PathBuf },
    /// Run the file and print the value of every top-level expression.
    #[command(visible_alias = "eval", alias = "evalute")]
    Evaluate { file: PathBuf },
    /// Run the file.
    Run { file: PathBuf },
    /// Print the syntax tree as JSON.
    Ast { file: PathBuf },
}

impl Command {
    fn file(&self) -> &Path {
        match self {
            Self::Tokenize { file }
            | Self::Parse { file }
            | Self::Evaluate { file }
            | Self::Run { file }
            | Self::Ast { file } => file,
        }
    }
}

impl Args {
    fn config(&self) -> Config {
        let scope = if self.call_site_scope { FunctionScope::CallSite } else { FunctionScope::Lexical };
        let mode = if self.collect_errors { ErrorMode::CollectAll } else { ErrorMode::FailFast };
        Config::default().with_max_call_depth(self.max_call_depth)
                         .with_max_nesting_depth(self.max_nesting_depth)
                         .with_function_scope(scope)
                         .with_error_mode(mode)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    brt::init_tracing(args.verbose);

    let path = args.command.file();
    if path.extension().is_none_or(|ext| ext != "brt") {
        eprintln!("The file '{}' is not a .brt file.", path.display());
        return exit(EXIT_FAILURE);
    }

    let source = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return exit(EXIT_FAILURE);
        },
    };
    debug!(file = %path.display(), bytes = source.len(), "read source");

    let config = args.config();
    let stdout = io::stdout().lock();

    let result = match &args.command {
        Command::Tokenize { .. } => return tokenize(&source, stdout),
        Command::Parse { .. } => print_parsed(&source, &config, stdout),
        Command::Evaluate { .. } => evaluate(&source, stdout, config),
        Command::Run { .. } => run(&source, stdout, config),
        Command::Ast { .. } => print_ast(&source, &config, stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            exit(e.exit_code())
        },
    }
}

/// Prints each token on its own line, reporting problems on stderr and
/// scanning on past them.
fn tokenize(source: &[u8], mut out: impl Write) -> ExitCode {
    let mut failed = false;

    for token in Lexer::new(source) {
        match token {
            Ok(token) if token.kind == TokenKind::Ignore => {},
            Ok(token) if token.kind == TokenKind::Illegal => {
                failed = true;
                eprintln!("{}",
                          LexError::IllegalCharacter { character: token.lexeme,
                                                       line:      token.line, });
            },
            Ok(token) => {
                if let Err(e) = writeln!(out, "{token}") {
                    eprintln!("Failed to write output: {e}");
                    return exit(EXIT_FAILURE);
                }
            },
            Err(e) => {
                failed = true;
                eprintln!("{e}");
            },
        }
    }

    if failed { exit(EXIT_DATA_ERROR) } else { ExitCode::SUCCESS }
}

fn print_parsed(source: &[u8], config: &Config, mut out: impl Write) -> Result<(), Error> {
    for node in parse_source(source, config)? {
        if let Some(expr) = node.expr() {
            writeln!(out, "{expr}").map_err(|e| output_error(&e))?;
        }
    }
    Ok(())
}

fn print_ast(source: &[u8], config: &Config, mut out: impl Write) -> Result<(), Error> {
    let nodes = parse_source(source, config)?;
    serde_json::to_writer_pretty(&mut out, &nodes).map_err(|e| output_error(&e))?;
    writeln!(out).map_err(|e| output_error(&e))
}

fn output_error(e: &impl std::fmt::Display) -> Error {
    Error::Runtime(brt::error::RuntimeError::OutputFailed { details: e.to_string(),
                                                            line:    0, })
}

fn exit(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
