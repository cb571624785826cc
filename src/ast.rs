use std::{convert::Infallible, mem};

use crate::util::num::format_real;

/// The operator table: every recognized symbol with its binding precedence.
///
/// Higher numbers bind tighter. The table is the single source of truth for
/// which symbols the tree builder accepts as binary operators.
pub const OPERATOR_TABLE: [(char, u8); 5] = [('+', 1), ('-', 1), ('*', 2), ('/', 2), ('^', 3)];

/// Deepest tree [`crate::Session::render`] draws as a diagram.
pub const MAX_DIAGRAM_DEPTH: usize = 512;

/// Looks up the precedence of an operator symbol in [`OPERATOR_TABLE`].
///
/// # Example
/// ```
/// use exprtree::ast::precedence_of;
///
/// assert_eq!(precedence_of('*'), Some(2));
/// assert_eq!(precedence_of('%'), None);
/// ```
#[must_use]
pub fn precedence_of(symbol: char) -> Option<u8> {
    OPERATOR_TABLE.iter()
                  .find(|(s, _)| *s == symbol)
                  .map(|(_, precedence)| *precedence)
}

/// Represents a binary operator.
///
/// Only the five arithmetic operators exist; a node can never carry anything
/// else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Maps a symbol to its operator, or `None` if the symbol is not an
    /// operator.
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('('), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The symbol this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What a node holds, as seen by a tree walker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NodeValue {
    /// A numeric literal stored in a leaf.
    Number(f64),
    /// The operator stored in an internal node.
    Operator(Operator),
}

impl std::fmt::Display for NodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", format_real(*value)),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// A node of a binary expression tree.
///
/// Leaves hold finite numeric literals. Internal nodes hold an operator and
/// own exactly two operand subtrees.
///
/// A left-folded chain such as `1+1+...+1` is as deep as it has operators, so
/// nothing that walks a node recurses on the call stack: cloning, comparing,
/// dropping and [`Node::try_fold`] all keep their pending work in a `Vec`.
#[derive(Debug)]
pub enum Node {
    /// A numeric literal.
    Leaf(f64),
    /// A binary operation over two subtrees.
    Internal {
        /// The operator applied to both subtrees.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates an internal node owning both operands.
    #[must_use]
    pub fn internal(op: Operator, left: Self, right: Self) -> Self {
        Self::Internal { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` when the node holds a number and has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The value stored in this node.
    #[must_use]
    pub const fn value(&self) -> NodeValue {
        match self {
            Self::Leaf(value) => NodeValue::Number(*value),
            Self::Internal { op, .. } => NodeValue::Operator(*op),
        }
    }

    /// Left child, `None` for leaves.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal { left, .. } => Some(left),
        }
    }

    /// Right child, `None` for leaves.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal { right, .. } => Some(right),
        }
    }

    /// Text shown for this node in traversals and diagrams, e.g. `3.0` or
    /// `*`.
    #[must_use]
    pub fn label(&self) -> String {
        self.value().to_string()
    }

    /// Number of levels in the subtree rooted here; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.fold(|_| 1, |_, left, right| 1 + left.max(right))
    }

    /// Reduces the subtree bottom-up, left before right.
    ///
    /// `leaf` maps every literal, `internal` combines the results of both
    /// children with their operator. The first error stops the walk.
    ///
    /// ## Example
    /// ```
    /// use exprtree::build;
    ///
    /// let tree = build("1+2*3").unwrap();
    /// let leaves = tree.root()
    ///                  .unwrap()
    ///                  .try_fold(|_| Ok::<_, ()>(1), |_, l, r| Ok(l + r))
    ///                  .unwrap();
    /// assert_eq!(leaves, 3);
    /// ```
    pub fn try_fold<T, E>(&self,
                          mut leaf: impl FnMut(f64) -> Result<T, E>,
                          mut internal: impl FnMut(Operator, T, T) -> Result<T, E>)
                          -> Result<T, E> {
        enum Step<'a> {
            Enter(&'a Node),
            Combine(Operator),
        }

        let mut steps = vec![Step::Enter(self)];
        let mut done: Vec<T> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(Self::Leaf(value)) => done.push(leaf(*value)?),
                Step::Enter(Self::Internal { op, left, right }) => {
                    steps.push(Step::Combine(*op));
                    steps.push(Step::Enter(&**right));
                    steps.push(Step::Enter(&**left));
                },
                Step::Combine(op) => match (done.pop(), done.pop()) {
                    (Some(right), Some(left)) => done.push(internal(op, left, right)?),
                    _ => unreachable!("both subtrees are reduced before their parent"),
                },
            }
        }

        match done.pop() {
            Some(result) => Ok(result),
            None => unreachable!("the root always leaves one result"),
        }
    }

    /// Infallible form of [`Node::try_fold`].
    #[must_use]
    pub fn fold<T>(&self,
                   mut leaf: impl FnMut(f64) -> T,
                   mut internal: impl FnMut(Operator, T, T) -> T)
                   -> T {
        let folded = self.try_fold(|value| Ok::<_, Infallible>(leaf(value)),
                                   |op, left, right| Ok(internal(op, left, right)));
        match folded {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        self.fold(Self::Leaf, Self::internal)
    }
}

impl PartialEq for Node {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Leaf(a), Self::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                },
                (Self::Internal { op: a, left: al, right: ar },
                 Self::Internal { op: b, left: bl, right: br }) => {
                    if a != b {
                        return false;
                    }
                    pending.push((&**ar, &**br));
                    pending.push((&**al, &**bl));
                },
                _ => return false,
            }
        }

        true
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        fn detach(node: &mut Node, into: &mut Vec<Node>) {
            if let Node::Internal { left, right, .. } = node {
                into.push(mem::replace(&mut **left, Node::Leaf(0.0)));
                into.push(mem::replace(&mut **right, Node::Leaf(0.0)));
            }
        }

        // Children are unlinked before they drop, so each drop sees leaves only.
        let mut orphans = Vec::new();
        detach(self, &mut orphans);
        while let Some(mut node) = orphans.pop() {
            detach(&mut node, &mut orphans);
        }
    }
}

/// An expression tree.
///
/// A tree starts out empty and is populated once by a successful build. A
/// failed build leaves it exactly as it was. The tree is read-only after
/// construction; a new expression produces a new tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    pub(crate) root: Option<Node>,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already constructed root node.
    #[must_use]
    pub const fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// The root node, or `None` if nothing has been built yet.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree; `0` when empty.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Converts the tree into a printable text diagram.
    ///
    /// The conversion itself is iterative, but `termtree` prints and drops
    /// its own trees recursively; [`crate::Session::render`] refuses trees
    /// deeper than [`MAX_DIAGRAM_DEPTH`] for that reason.
    ///
    /// ## Example
    /// ```
    /// use exprtree::build;
    ///
    /// let tree = build("1+2").unwrap();
    /// let diagram = tree.to_termtree().to_string();
    ///
    /// assert!(diagram.starts_with('+'));
    /// assert!(diagram.contains("1.0"));
    /// ```
    #[must_use]
    pub fn to_termtree(&self) -> termtree::Tree<String> {
        fn convert(node: &Node) -> termtree::Tree<String> {
            node.fold(|value| termtree::Tree::new(format_real(value)),
                      |op, left, right| termtree::Tree::new(op.to_string()).with_leaves([left, right]))
        }

        self.root
            .as_ref()
            .map_or_else(|| termtree::Tree::new("Empty tree".to_string()), convert)
    }
}
