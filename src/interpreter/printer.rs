use std::io::{self, Write};

use crate::ast::Node;

/// Marker written once per indentation level.
const INDENT: &[u8] = b"|   ";

/// Writes an indented, pre-order dump of `node` to `out`.
///
/// Literals print as `String literal:` followed by their raw bytes. Binary
/// nodes print their operator, then a `Left:` and a `Right:` heading one level
/// deeper, with each operand two levels deeper. Every line ends in a newline.
///
/// The dump is for inspection only; nothing reads it back.
///
/// # Errors
/// Returns any error raised by `out`.
///
/// # Example
/// ```
/// use strcalc::{interpreter::printer::print_tree, parse_source};
///
/// let node = parse_source(b"1.2").unwrap();
/// let mut out = Vec::new();
/// print_tree(&node, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "Binop: .\n\
///             |   Left:\n\
///             |   |   String literal:1\n\
///             |   Right:\n\
///             |   |   String literal:2\n");
/// ```
pub fn print_tree<W: Write + ?Sized>(node: &Node, out: &mut W) -> io::Result<()> {
    let mut pending = vec![Step::Node(node, 0)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Heading(heading, level) => {
                indent(level, out)?;
                out.write_all(heading)?;
            },
            Step::Node(Node::Literal(buf), level) => {
                indent(level, out)?;
                out.write_all(b"String literal:")?;
                out.write_all(buf.as_bytes())?;
                out.write_all(b"\n")?;
            },
            Step::Node(Node::Binary { op, left, right }, level) => {
                indent(level, out)?;
                writeln!(out, "Binop: {op}")?;
                pending.push(Step::Node(right, level + 2));
                pending.push(Step::Heading(b"Right:\n", level + 1));
                pending.push(Step::Node(left, level + 2));
                pending.push(Step::Heading(b"Left:\n", level + 1));
            },
        }
    }
    Ok(())
}

/// One unit of output, kept on an explicit stack so deep trees print without
/// recursion.
enum Step<'a> {
    Node(&'a Node, usize),
    Heading(&'static [u8], usize),
}

fn indent<W: Write + ?Sized>(level: usize, out: &mut W) -> io::Result<()> {
    for _ in 0..level {
        out.write_all(INDENT)?;
    }
    Ok(())
}
