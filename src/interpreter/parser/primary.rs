use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::core::{ParseResult, parse_nested},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := STRING
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the start of a primary expression.
/// - `depth`: Current nesting level.
///
/// # Returns
/// A literal node, or the node of the parenthesized expression unchanged.
///
/// # Errors
/// - `UnexpectedToken` for any token other than a literal or `(`.
/// - `UnexpectedEndOfInput` if the input is exhausted.
/// - `NestingTooDeep` if a group opens past the nesting limit.
pub(crate) fn parse_primary(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Node> {
    match cursor.peek() {
        Some((Token::Str(buf), _)) => {
            let node = Node::literal(buf);
            cursor.advance();
            Ok(node)
        },
        Some((Token::LParen, _)) => parse_grouping(cursor, depth),
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: cursor.line() }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// Grouping does not create a node; the inner expression is returned as is.
fn parse_grouping(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Node> {
    cursor.advance();
    let node = parse_nested(cursor, depth + 1)?;

    match cursor.peek() {
        Some((Token::RParen, _)) => {
            cursor.advance();
            Ok(node)
        },
        _ => Err(ParseError::ExpectedClosingParen { line: cursor.line() }),
    }
}
