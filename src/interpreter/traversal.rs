use crate::ast::{Node, Tree};

/// The order in which a traversal visits a node relative to its subtrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

/// Writes one label with one leading and one trailing space.
fn visit(node: &Node, out: &mut String) {
    out.push(' ');
    out.push_str(&node.label());
    out.push(' ');
}

/// Appends the labels of `node` and its subtrees to `out` in the given order.
///
/// Work is kept on an explicit stack and pushed in reverse, so the first step
/// to run is on top.
fn walk(node: &Node, order: Order, out: &mut String) {
    enum Step<'a> {
        Walk(&'a Node),
        Emit(&'a Node),
    }

    let mut steps = vec![Step::Walk(node)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Emit(node) => visit(node, out),
            Step::Walk(node) => match node {
                Node::Leaf(_) => visit(node, out),
                Node::Internal { left, right, .. } => {
                    let (left, right) = (Step::Walk(&**left), Step::Walk(&**right));
                    match order {
                        Order::Inorder => steps.extend([right, Step::Emit(node), left]),
                        Order::Preorder => steps.extend([right, left, Step::Emit(node)]),
                        Order::Postorder => steps.extend([Step::Emit(node), right, left]),
                    }
                },
            },
        }
    }
}

/// Linearizes the tree in the given order.
///
/// Every token is padded with a space on both sides, so adjacent tokens are
/// separated by two spaces; trim or split on whitespace when displaying.
/// An empty tree yields an empty string.
#[must_use]
pub fn traverse(tree: &Tree, order: Order) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        walk(root, order, &mut out);
    }
    out
}

/// Inorder traversal: left, node, right.
///
/// # Example
/// ```
/// use exprtree::{build, traverse_inorder};
///
/// let tree = build("2+3*4").unwrap();
/// assert_eq!(traverse_inorder(&tree).trim(), "2.0  +  3.0  *  4.0");
/// ```
#[must_use]
pub fn traverse_inorder(tree: &Tree) -> String {
    traverse(tree, Order::Inorder)
}

/// Preorder traversal: node, left, right.
#[must_use]
pub fn traverse_preorder(tree: &Tree) -> String {
    traverse(tree, Order::Preorder)
}

/// Postorder traversal: left, right, node.
#[must_use]
pub fn traverse_postorder(tree: &Tree) -> String {
    traverse(tree, Order::Postorder)
}
