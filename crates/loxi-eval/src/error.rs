//! Runtime error types.

use thiserror::Error;

use crate::value::Value;

/// An error raised during evaluation.
///
/// The evaluator fails fast: the first runtime error stops execution and
/// later statements never run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RuntimeError {
    /// An operand had the wrong type for its operator. `got` is the
    /// offending value; operands evaluate left to right, so it is always
    /// the first one that breaks the rule.
    #[error("expected {expected}, got '{got}'")]
    WrongType { expected: &'static str, got: Value },

    /// Division with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,
}
