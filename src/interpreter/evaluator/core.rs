use tracing::trace;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::value::Buffer,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Evaluation itself is stateless; the context only carries the limit that
/// guards against building values too large to hold in memory.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Largest value, in bytes, the evaluator may build. `None` means no
    /// limit beyond what fits in a `usize`.
    pub max_length: Option<usize>,
}

impl Context {
    /// Creates a context without a length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Creates a context that refuses to build values longer than
    /// `max_length` bytes.
    #[must_use]
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length: Some(max_length) }
    }

    /// Evaluates a tree and returns the resulting value.
    ///
    /// Literals evaluate to a copy of their bytes. For binary nodes the left
    /// operand is evaluated before the right one; intermediate values are
    /// dropped once the combined value exists. The tree is not modified.
    ///
    /// A chain of `.` is walked with a loop rather than recursion, so long
    /// chains need no extra stack.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if a repeat count or a result length cannot be
    /// represented, or if a value would exceed [`Context::max_length`].
    ///
    /// # Example
    /// ```
    /// use strcalc::{interpreter::evaluator::core::Context, parse_source};
    ///
    /// let node = parse_source(b"(1.2)^2").unwrap();
    /// let value = Context::new().eval(&node).unwrap();
    /// assert_eq!(value.as_bytes(), b"1212");
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<Buffer> {
        let mut rights = Vec::new();
        let mut leftmost = node;
        while let Node::Binary { op: BinaryOperator::Concat,
                                 left,
                                 right, } = leftmost
        {
            rights.push(&**right);
            leftmost = &**left;
        }

        let first = self.eval_operand(leftmost)?;
        if rights.is_empty() {
            return Ok(first);
        }

        let mut bytes = first.into_bytes();
        for right in rights.into_iter().rev() {
            let right = self.eval(right)?;
            let length = bytes.len()
                              .checked_add(right.len())
                              .ok_or(RuntimeError::Overflow)?;
            self.check_length(length)?;
            bytes.extend_from_slice(right.as_bytes());
        }
        Ok(Buffer::from(bytes))
    }

    /// Evaluates a node that is not itself a concatenation.
    fn eval_operand(&self, node: &Node) -> EvalResult<Buffer> {
        match node {
            Node::Literal(buf) => self.check_length(buf.len()).map(|()| buf.duplicate()),
            Node::Binary { op: BinaryOperator::Repeat,
                           left,
                           right, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                trace!(left = left.len(), right = right.len(), "evaluating repeat");
                self.eval_repeat(&left, &right)
            },
            Node::Binary { op: BinaryOperator::Concat,
                           .. } => self.eval(node),
        }
    }

    fn eval_repeat(&self, left: &Buffer, count: &Buffer) -> EvalResult<Buffer> {
        // Nothing to build; the count may be arbitrarily large.
        if left.is_empty() {
            return Ok(Buffer::default());
        }
        let count = count.as_unsigned();
        let times = usize::try_from(count).map_err(|_| RuntimeError::CountTooLarge { count })?;
        let length = left.len().checked_mul(times).ok_or(RuntimeError::Overflow)?;
        self.check_length(length)?;
        Ok(left.repeat(times))
    }

    fn check_length(&self, length: usize) -> EvalResult<()> {
        match self.max_length {
            Some(limit) if length > limit => Err(RuntimeError::ResultTooLarge { length, limit }),
            _ => Ok(()),
        }
    }
}
