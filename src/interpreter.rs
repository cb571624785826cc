/// The evaluator module reduces a built tree to a number.
///
/// Evaluation is a pure post-order walk. Division by zero is reported as an
/// error instead of producing an infinity.
pub mod evaluator;
/// The lexer module tokenizes expressions for the tree builder.
///
/// Produces numbers, operators and parentheses, each paired with its byte
/// offset. Unrecognized characters are skipped.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// Uses an operand stack and an operator stack, reducing by precedence as
/// operators arrive.
pub mod parser;
/// Sequences validation, construction, evaluation and traversal for one
/// submitted expression at a time.
pub mod session;
/// Inorder, preorder and postorder linearizations of a tree.
pub mod traversal;
/// Character and parenthesis checks run on raw input before building.
pub mod validator;
