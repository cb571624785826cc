use thiserror::Error;

/// Represents all errors that can occur while evaluating a tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The tree has no root to evaluate.
    #[error("The tree is empty.")]
    EmptyTree,
}
