use tracing::{debug, warn};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{cursor::Cursor, parser::binary::parse_concat},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and `^` chains the parser accepts.
///
/// Parsing, evaluating and printing recurse once per nesting level, so this
/// bounds their stack use.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, concatenation, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := concat`
///
/// # Parameters
/// - `cursor`: Lookahead cursor positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    parse_nested(cursor, 0)
}

/// Parses an expression found `depth` levels of nesting deep.
pub(in crate::interpreter::parser) fn parse_nested(cursor: &mut Cursor<'_>,
                                                   depth: usize)
                                                   -> ParseResult<Node> {
    check_depth(cursor, depth)?;
    parse_concat(cursor, depth)
}

/// Fails with `NestingTooDeep` once `depth` passes [`MAX_NESTING`].
pub(in crate::interpreter::parser) fn check_depth(cursor: &Cursor<'_>,
                                                  depth: usize)
                                                  -> ParseResult<()> {
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                line:  cursor.line(), });
    }
    Ok(())
}

/// Parses a whole program: a single expression.
///
/// Parsing stops after the first complete expression. Any tokens left over are
/// reported with a warning and otherwise ignored, so `1 2` evaluates to `1`.
///
/// # Errors
/// Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use strcalc::{
///     ast::Node,
///     interpreter::{cursor::Cursor, parser::core::parse_program, value::Buffer},
/// };
///
/// let node = parse_program(&mut Cursor::new(b"1 2")).unwrap();
/// assert_eq!(node, Node::literal(&Buffer::from("1")));
/// ```
pub fn parse_program(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    let node = parse_expression(cursor)?;

    if let Some((token, line)) = cursor.peek() {
        warn!("Ignoring input after the expression, starting at '{token}' (line {line})");
    }

    debug!(unrecognized = cursor.unrecognized(), "parsed program");
    Ok(node)
}
