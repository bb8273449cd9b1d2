#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A repeat count does not fit in the platform's address space.
    CountTooLarge {
        /// The count, as read from the right operand.
        count: u64,
    },
    /// The length of a repeated value overflowed while computing it.
    Overflow,
    /// A value would exceed the configured maximum length.
    ResultTooLarge {
        /// The length the value would have had.
        length: usize,
        /// The configured maximum.
        limit:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountTooLarge { count } => {
                write!(f, "Error: Repeat count {count} is too large.")
            },
            Self::Overflow => write!(f, "Error: Length overflow while trying to compute result."),
            Self::ResultTooLarge { length, limit } => write!(f,
                                                             "Error: Result of {length} bytes exceeds the limit of {limit} bytes."),
        }
    }
}

impl std::error::Error for RuntimeError {}
