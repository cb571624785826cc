use tracing::debug;

use crate::{
    ast::{Node, Operator, Tree, precedence_of},
    error::BuildError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::stack::{Pending, Stacks},
    },
};

pub type ParseResult<T> = Result<T, BuildError>;

/// Builds the root node of an expression tree from a token stream.
///
/// This is the dual-stack construction: numbers go to the operand stack,
/// operators and `(` to the operator stack. Before an operator is pushed,
/// every operator on top that binds at least as tightly is reduced, so all
/// operators fold left to right, `^` included: `2^3^2` is `(2^3)^2`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The root node of the constructed tree.
///
/// # Errors
/// - `EmptyExpression` if there are no operands at all.
/// - `MalformedExpression` on operand stack underflow or leftover operands.
/// - `UnbalancedParentheses` for a `)` without `(` or an unclosed `(`.
/// - `UnknownOperator` for an operator symbol missing from the operator
///   table.
pub fn parse_tree<'a, I>(tokens: I) -> ParseResult<Node>
    where I: IntoIterator<Item = &'a (Token, usize)>
{
    let mut stacks = Stacks::new();

    for (token, position) in tokens {
        let position = *position;
        match token {
            Token::Number(value) => stacks.operands.push(Node::Leaf(*value)),
            Token::LParen => stacks.operators.push(Pending::LParen { position }),
            Token::RParen => stacks.close_paren(position)?,
            Token::Operator(symbol) => {
                let (op, precedence) = lookup_operator(*symbol)?;

                while stacks.top_binds_at_least(precedence) {
                    if let Some(Pending::Operator { op, position, .. }) = stacks.operators.pop() {
                        stacks.reduce(op, position)?;
                    }
                }

                stacks.operators.push(Pending::Operator { op,
                                                          precedence,
                                                          position });
            },
        }
    }

    stacks.drain()?;
    stacks.finish()
}

/// Resolves an operator symbol through the operator table.
///
/// # Errors
/// Returns `UnknownOperator` if the symbol has no table entry.
fn lookup_operator(symbol: char) -> ParseResult<(Operator, u8)> {
    match (Operator::from_symbol(symbol), precedence_of(symbol)) {
        (Some(op), Some(precedence)) => Ok((op, precedence)),
        _ => Err(BuildError::UnknownOperator { symbol }),
    }
}

/// Builds a new expression tree from an infix expression.
///
/// Whitespace is ignored. The expression is expected to have passed
/// [`validate`](crate::validate) and [`balanced`](crate::balanced); characters
/// the lexer does not recognize are skipped.
///
/// # Errors
/// Returns a [`BuildError`] describing why no tree could be built.
///
/// # Example
/// ```
/// use exprtree::{build, evaluate};
///
/// let tree = build("2+3*4").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 14.0);
///
/// assert!(build("5+").is_err());
/// ```
pub fn build(expression: &str) -> ParseResult<Tree> {
    let tokens = tokenize(expression)?;
    let root = parse_tree(&tokens)?;

    debug!(expression, depth = root.depth(), "built expression tree");
    Ok(Tree::from_root(root))
}

impl Tree {
    /// Replaces this tree with one built from `expression`.
    ///
    /// The build is atomic: on error the tree keeps its previous root.
    ///
    /// # Errors
    /// Returns a [`BuildError`] if the expression cannot be built.
    pub fn build(&mut self, expression: &str) -> ParseResult<()> {
        *self = build(expression)?;
        Ok(())
    }
}
