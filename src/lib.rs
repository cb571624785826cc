//! # exprtree
//!
//! exprtree turns arithmetic infix expressions into binary expression trees.
//! It validates and tokenizes the input, builds the tree with an operand stack
//! and an operator stack, evaluates it, and produces the inorder, preorder and
//! postorder traversals. The tree can be walked node by node or printed as a
//! text diagram.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree.
///
/// This module declares the operator table, the `Operator` enum, and the
/// `Node` and `Tree` types. Trees are built by the parser and read by the
/// evaluator, the traversals and any visualization layer.
///
/// # Responsibilities
/// - Holds the fixed symbol-to-precedence table.
/// - Models nodes as either numeric leaves or operators with two children.
/// - Offers a read-only walk interface and a text diagram of the tree.
pub mod ast;
/// Provides error types for building and evaluating trees.
///
/// This module defines every error that can be raised while validating,
/// tokenizing, building or evaluating an expression. The `Display` text of
/// each error is the message meant for the user.
pub mod error;
/// Orchestrates the processing of an expression.
///
/// This module ties together validation, lexing, tree construction,
/// evaluation and traversal, and exposes a `Session` that runs them in order
/// for each submitted expression.
///
/// # Responsibilities
/// - Rejects illegal characters and unbalanced parentheses up front.
/// - Builds trees with precedence-driven reductions.
/// - Evaluates and linearizes built trees.
pub mod interpreter;
/// Numeric formatting and parsing helpers.
pub mod util;

pub use ast::{Node, NodeValue, Operator, Tree};
pub use error::{BuildError, Error, EvalError};
pub use interpreter::{
    evaluator::core::evaluate,
    parser::core::build,
    session::{Report, Session},
    traversal::{traverse_inorder, traverse_postorder, traverse_preorder},
    validator::{balanced, strip_whitespace, validate},
};

/// Processes one expression and returns the text to show for it.
///
/// The text lists the three traversals and the result. With `show_tree`,
/// a diagram of the tree follows, or a note that the tree is too deep to
/// draw.
///
/// # Errors
/// Returns an error if the expression is rejected or no tree can be built.
/// An evaluation failure is part of the returned text, not an error.
///
/// # Examples
/// ```
/// use exprtree::run;
///
/// let output = run("(2+3)*4", false).unwrap();
/// assert!(output.contains("Result:    20.0"));
///
/// // Unary minus is not supported.
/// assert!(run("-1", false).is_err());
/// ```
pub fn run(expression: &str, show_tree: bool) -> Result<String, Error> {
    let mut session = Session::new();
    let report = session.submit(expression)?;

    let mut output = report.to_string();
    if show_tree {
        output.push_str("\n\n");
        match session.render() {
            Ok(diagram) => output.push_str(&diagram.to_string()),
            Err(e @ Error::TooDeepToDraw { .. }) => output.push_str(&e.to_string()),
            Err(e) => return Err(e),
        }
    }

    Ok(output)
}
