/// Tree construction entry points.
///
/// Runs the dual-stack precedence algorithm over a token stream and exposes
/// `build` and `Tree::build`.
pub mod core;
/// Operand and operator stacks used during construction.
///
/// Implements the reduce step that folds one operator and its two operands
/// into an internal node.
pub mod stack;
