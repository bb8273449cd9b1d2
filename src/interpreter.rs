/// The cursor module provides two tokens of lookahead over the lexer.
///
/// The parser reads tokens exclusively through the cursor, which keeps the
/// current token and the one after it lexed and ready.
///
/// # Responsibilities
/// - Exposes the current and next token without consuming either.
/// - Slides the window forward one token at a time.
/// - Reports the line reached once the input is exhausted.
pub mod cursor;
/// The evaluator module reduces a syntax tree to a single value.
///
/// # Responsibilities
/// - Evaluates literals, concatenations and repetitions.
/// - Guards repetition against counts and lengths that cannot be built.
pub mod evaluator;
/// The lexer module tokenizes source bytes for further parsing.
///
/// The lexer reads the raw source and produces digit-run literals and the four
/// single-character operators. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input bytes into tokens tagged with their source line.
/// - Skips whitespace.
/// - Warns about, and drops, bytes that do not belong to the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Encodes precedence: `^` binds tighter than `.`, parentheses group.
/// - Rejects malformed input with a line-tagged error.
pub mod parser;
/// The printer module renders a syntax tree as an indented outline.
pub mod printer;
/// The value module defines the runtime string value, [`value::Buffer`].
pub mod value;
