/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code: tokens
/// that cannot start an expression, missing closing parentheses, input that
/// ends too early, and expressions nested too deeply.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, all of
/// which concern values that would grow too large to build.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
