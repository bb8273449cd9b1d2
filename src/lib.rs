//! # strcalc
//!
//! strcalc is an interpreter for a tiny string language written in Rust.
//! Programs are built from digit-string literals, concatenation (`.`),
//! repetition (`^`) and parentheses:
//!
//! ```text
//! (1.2)^2    =>  1212
//! 1^2^2      =>  1 repeated 22 times
//! ```
//!
//! A run tokenizes the input, parses it into a tree, prints the tree, and
//! evaluates it to a single byte string.

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

use std::io::{Read, Write};

use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        cursor::Cursor,
        evaluator::core::Context,
        parser::core::{ParseResult, parse_program},
        printer::print_tree,
        value::Buffer,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents a program as a strict
/// tree of literals and binary operations. The tree is built by the parser and
/// read by the printer and the evaluator.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all fatal failure modes (parser, evaluator).
/// - Attaches line numbers to syntax errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module ties together the lexer, the lookahead cursor, the parser, the
/// printer, the evaluator and the value type.
pub mod interpreter;

/// Options controlling a full [`run`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Whether to print the syntax tree before the result.
    pub print_tree: bool,
    /// Evaluation settings, including the maximum value length.
    pub context:    Context,
}

impl Default for Options {
    fn default() -> Self {
        Self { print_tree: true,
               context:    Context::new(), }
    }
}

/// Parses a complete program into a syntax tree.
///
/// Tokens after the first complete expression are ignored with a warning.
///
/// # Errors
/// Returns a `ParseError` for any syntax error.
///
/// # Example
/// ```
/// use strcalc::{ast::Node, parse_source};
///
/// assert!(matches!(parse_source(b"12").unwrap(), Node::Literal(_)));
/// assert!(parse_source(b"(1.2").is_err());
/// ```
pub fn parse_source(source: &[u8]) -> ParseResult<Node> {
    parse_program(&mut Cursor::new(source))
}

/// Parses and evaluates a complete program.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Example
/// ```
/// use strcalc::{evaluate_source, interpreter::evaluator::core::Context};
///
/// let value = evaluate_source(b"12^3", &Context::new()).unwrap();
/// assert_eq!(value.as_bytes(), b"121212");
/// ```
pub fn evaluate_source(source: &[u8], context: &Context) -> Result<Buffer, Box<dyn std::error::Error>> {
    let node = parse_source(source)?;
    Ok(context.eval(&node)?)
}

/// Runs a program read from `input`, writing the tree dump and the result to
/// `out`.
///
/// The whole input is read before lexing starts. The tree is written (when
/// enabled) before evaluation begins, so it is still present in `out` if
/// evaluation fails. The result bytes are written raw, followed by a newline.
///
/// # Errors
/// Returns an error if reading `input` fails, if parsing or evaluation fails,
/// or if writing to `out` fails.
///
/// # Example
/// ```
/// use strcalc::{Options, run};
///
/// let mut out = Vec::new();
/// let options = Options { print_tree: false,
///                         ..Options::default() };
/// run(&b"9 . 9"[..], &mut out, &options).unwrap();
/// assert_eq!(out, b"99\n");
/// ```
pub fn run<R: Read, W: Write>(mut input: R,
                              out: &mut W,
                              options: &Options)
                              -> Result<(), Box<dyn std::error::Error>> {
    let mut source = Vec::new();
    input.read_to_end(&mut source)?;
    debug!(bytes = source.len(), "read program");

    let node = parse_source(&source)?;
    if options.print_tree {
        print_tree(&node, out)?;
    }

    let result = options.context.eval(&node)?;
    debug!(length = result.len(), "evaluated program");

    out.write_all(result.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}
