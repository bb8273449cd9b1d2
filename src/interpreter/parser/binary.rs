use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::{
            core::{ParseResult, check_depth},
            primary::parse_primary,
        },
    },
};

/// Parses concatenation expressions.
///
/// Handles the left-associative `.` operator, so `a.b.c` parses as
/// `(a.b).c`.
///
/// The rule is: `concat := repeat ("." repeat)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `depth`: Current nesting level.
///
/// # Returns
/// A left-leaning tree of concatenation nodes, or the single repeat-level node
/// when no `.` follows it.
pub fn parse_concat(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Node> {
    let mut left = parse_repeat(cursor, depth)?;
    while let Some((Token::Dot, _)) = cursor.peek() {
        cursor.advance();
        let right = parse_repeat(cursor, depth)?;
        left = Node::binary(BinaryOperator::Concat, left, right);
    }
    Ok(left)
}

/// Parses repetition expressions.
///
/// After consuming `^`, the right operand is chosen by looking at the token
/// *after* the one that starts it. If that token is another `^`, the right
/// operand is parsed as a full repeat expression, which makes a chain of bare
/// operands like `1^2^2` right-associative: `1^(2^2)`. Otherwise only a single
/// primary is parsed.
///
/// The lookahead is fixed at two tokens. When the right operand opens with
/// `(`, the token inspected lies inside the parentheses, so `1^(2)^3` stops
/// after `(2)` and leaves `^3` unparsed.
///
/// Each link of a chain counts as one level of nesting.
///
/// The rule is: `repeat := primary ("^" (repeat | primary))?`
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `depth`: Current nesting level.
///
/// # Returns
/// A repeat node, or the primary itself when no `^` follows it.
pub fn parse_repeat(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Node> {
    let left = parse_primary(cursor, depth)?;

    if !matches!(cursor.peek(), Some((Token::Caret, _))) {
        return Ok(left);
    }
    cursor.advance();

    let right = if let Some((Token::Caret, _)) = cursor.peek_next() {
        check_depth(cursor, depth + 1)?;
        parse_repeat(cursor, depth + 1)?
    } else {
        parse_primary(cursor, depth)?
    };

    Ok(Node::binary(BinaryOperator::Repeat, left, right))
}
