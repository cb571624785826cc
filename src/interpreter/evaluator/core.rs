use tracing::debug;

use crate::{
    ast::{Node, Tree},
    error::EvalError,
    interpreter::evaluator::binary::apply,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a node and everything below it.
///
/// Leaves evaluate to their value. Internal nodes evaluate the left subtree,
/// then the right one, then apply their operator. The node is not modified.
/// Pending operators wait on an explicit stack, so depth is bounded by memory
/// and not by the call stack.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` if any division in the subtree has a
/// zero divisor.
pub fn eval_node(node: &Node) -> EvalResult<f64> {
    node.try_fold(Ok, apply)
}

/// Evaluates an expression tree to a number.
///
/// # Errors
/// - `EmptyTree` if the tree was never built.
/// - `DivisionByZero` if a divisor evaluates to zero.
///
/// # Example
/// ```
/// use exprtree::{EvalError, build, evaluate};
///
/// let tree = build("(2+3)*4").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 20.0);
///
/// let tree = build("5/(2-2)").unwrap();
/// assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(tree: &Tree) -> EvalResult<f64> {
    let root = tree.root().ok_or(EvalError::EmptyTree)?;
    let value = eval_node(root)?;

    debug!(value, "evaluated expression tree");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    #[test]
    fn leaf_evaluates_to_itself() {
        assert_eq!(eval_node(&Node::Leaf(2.5)).unwrap(), 2.5);
    }

    #[test]
    fn empty_tree_cannot_be_evaluated() {
        assert_eq!(evaluate(&Tree::new()), Err(EvalError::EmptyTree));
    }

    #[test]
    fn nested_division_by_zero_propagates() {
        let inner = Node::internal(Operator::Div, Node::Leaf(1.0), Node::Leaf(0.0));
        let root = Node::internal(Operator::Add, Node::Leaf(3.0), inner);
        assert_eq!(eval_node(&root), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn deep_chain_evaluates_and_drops() {
        let root = (0..200_000).fold(Node::Leaf(0.0), |acc, _| {
                                   Node::internal(Operator::Add, acc, Node::Leaf(1.0))
                               });
        assert_eq!(eval_node(&root).unwrap(), 200_000.0);
        assert_eq!(root.depth(), 200_001);
    }

    #[test]
    fn evaluation_leaves_tree_untouched() {
        let tree = Tree::from_root(Node::internal(Operator::Sub, Node::Leaf(9.0), Node::Leaf(4.0)));
        let copy = tree.clone();

        assert_eq!(evaluate(&tree).unwrap(), 5.0);
        assert_eq!(evaluate(&tree).unwrap(), 5.0);
        assert_eq!(tree, copy);
    }
}
