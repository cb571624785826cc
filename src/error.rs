use thiserror::Error;

/// Tree construction errors.
///
/// Defines every failure that can occur before a tree exists: illegal
/// characters, unbalanced parentheses, empty input, operand stack underflow
/// and unknown operator symbols.
pub mod build_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a built tree to a number.
pub mod eval_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;

/// Any failure a submission can end with.
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be turned into a tree.
    #[error("Invalid expression: {0}")]
    Build(#[from] BuildError),
    /// The tree could not be evaluated.
    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),
    /// A tree was requested before any expression was built successfully.
    #[error("Build a tree first.")]
    NotBuilt,
    /// The tree has more levels than a diagram is drawn for.
    #[error("Tree is too deep to draw: {depth} levels, at most {limit} are shown.")]
    TooDeepToDraw {
        /// Levels in the current tree.
        depth: usize,
        /// The deepest tree that is drawn.
        limit: usize,
    },
}
