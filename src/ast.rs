use crate::interpreter::value::Buffer;

/// An abstract syntax tree (AST) node.
///
/// The tree is strict: every node owns its children exclusively, and nothing
/// is shared between parents. Parentheses in the source never produce a node
/// of their own.
///
/// A long `.` chain leans left and can be as deep as it has terms, so the
/// tree is dropped with an explicit stack rather than by recursion.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    /// A string constant taken from a digit-run token.
    Literal(Buffer),
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand; for `^` this is the string being repeated.
        left:  Box<Self>,
        /// Right operand; for `^` its value is read as the repeat count.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a literal node holding a copy of `buf`.
    ///
    /// The caller keeps its own buffer; the tree never aliases token storage.
    #[must_use]
    pub fn literal(buf: &Buffer) -> Self {
        Self::Literal(buf.duplicate())
    }

    /// Creates a binary node that takes ownership of both subtrees.
    ///
    /// # Example
    /// ```
    /// use strcalc::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::value::Buffer,
    /// };
    ///
    /// let node = Node::binary(BinaryOperator::Repeat,
    ///                         Node::literal(&Buffer::from("12")),
    ///                         Node::literal(&Buffer::from("3")));
    /// assert!(matches!(node, Node::Binary { op: BinaryOperator::Repeat, .. }));
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Node {
    /// Moves the binary children of a binary node onto `pending`, leaving
    /// empty literals in their place so the node itself drops without
    /// recursing.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::Binary { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::Binary { .. }) {
                    pending.push(std::mem::replace(child.as_mut(), Self::Literal(Buffer::default())));
                }
            }
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Concatenation (`.`)
    Concat,
    /// Repetition (`^`)
    Repeat,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Concat => ".",
            Self::Repeat => "^",
        };
        write!(f, "{operator}")
    }
}
