use tracing::trace;

use crate::{
    ast::{Node, Operator},
    error::BuildError,
    interpreter::parser::core::ParseResult,
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// A real operator together with its table precedence and source offset.
    Operator {
        /// The operator.
        op:         Operator,
        /// Precedence from the operator table.
        precedence: u8,
        /// Byte offset of the operator in the expression.
        position:   usize,
    },
    /// An opening parenthesis waiting for its `)`.
    LParen {
        /// Byte offset of the `(`.
        position: usize,
    },
}

/// The two stacks of the construction algorithm.
#[derive(Debug, Default)]
pub struct Stacks {
    pub operands:  Vec<Node>,
    pub operators: Vec<Pending>,
}

impl Stacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the operator on top binds at least as tightly as
    /// `precedence`. An opening parenthesis or an empty stack never does.
    #[must_use]
    pub fn top_binds_at_least(&self, precedence: u8) -> bool {
        matches!(self.operators.last(),
                 Some(Pending::Operator { precedence: top, .. }) if *top >= precedence)
    }

    /// Pops one operator and its two operands and pushes the combined node.
    ///
    /// The first operand popped becomes the right child, the second the left
    /// child.
    ///
    /// # Errors
    /// Returns `MalformedExpression` if fewer than two operands are available.
    pub fn reduce(&mut self, op: Operator, position: usize) -> ParseResult<()> {
        let right = self.pop_operand(op, position)?;
        let left = self.pop_operand(op, position)?;

        trace!(%op, position, "reducing");
        self.operands.push(Node::internal(op, left, right));
        Ok(())
    }

    /// Reduces operators until an opening parenthesis is on top, then
    /// discards it.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` if no `(` is left on the stack.
    /// - `MalformedExpression` if a reduction runs out of operands.
    pub fn close_paren(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LParen { .. }) => return Ok(()),
                Some(Pending::Operator { op, position, .. }) => self.reduce(op, position)?,
                None => return Err(BuildError::UnbalancedParentheses { position }),
            }
        }
    }

    /// Reduces every operator left on the stack.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` if a `(` was never closed.
    /// - `MalformedExpression` if a reduction runs out of operands.
    pub fn drain(&mut self) -> ParseResult<()> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, position, .. } => self.reduce(op, position)?,
                Pending::LParen { position } => {
                    return Err(BuildError::UnbalancedParentheses { position });
                },
            }
        }
        Ok(())
    }

    /// Takes the single finished operand off the stack.
    ///
    /// # Errors
    /// - `EmptyExpression` if nothing was built.
    /// - `MalformedExpression` if several operands remain without operators
    ///   joining them, e.g. `2(3)`.
    pub fn finish(mut self) -> ParseResult<Node> {
        match self.operands.len() {
            0 => Err(BuildError::EmptyExpression),
            1 => self.operands.pop().ok_or(BuildError::EmptyExpression),
            n => Err(BuildError::malformed(format!("{n} operands are not joined by operators"))),
        }
    }

    fn pop_operand(&mut self, op: Operator, position: usize) -> ParseResult<Node> {
        self.operands.pop().ok_or_else(|| {
                                BuildError::malformed(format!("operator '{op}' at position {position} is missing an operand"))
                            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_puts_first_pop_on_the_right() {
        let mut stacks = Stacks::new();
        stacks.operands.push(Node::Leaf(8.0));
        stacks.operands.push(Node::Leaf(2.0));
        stacks.reduce(Operator::Div, 1).unwrap();

        assert_eq!(stacks.operands,
                   vec![Node::internal(Operator::Div, Node::Leaf(8.0), Node::Leaf(2.0))]);
    }

    #[test]
    fn reduce_underflow_is_malformed() {
        let mut stacks = Stacks::new();
        stacks.operands.push(Node::Leaf(5.0));
        assert!(matches!(stacks.reduce(Operator::Add, 0),
                         Err(BuildError::MalformedExpression { .. })));
    }

    #[test]
    fn parenthesis_blocks_precedence_comparison() {
        let mut stacks = Stacks::new();
        stacks.operators.push(Pending::LParen { position: 0 });
        assert!(!stacks.top_binds_at_least(1));

        stacks.operators.push(Pending::Operator { op:         Operator::Mul,
                                                  precedence: 2,
                                                  position:   2, });
        assert!(stacks.top_binds_at_least(2));
        assert!(!stacks.top_binds_at_least(3));
    }

    #[test]
    fn close_without_open_is_unbalanced() {
        let mut stacks = Stacks::new();
        assert_eq!(stacks.close_paren(4),
                   Err(BuildError::UnbalancedParentheses { position: 4 }));
    }

    #[test]
    fn drain_rejects_unclosed_paren() {
        let mut stacks = Stacks::new();
        stacks.operands.push(Node::Leaf(1.0));
        stacks.operators.push(Pending::LParen { position: 0 });
        assert_eq!(stacks.drain(), Err(BuildError::UnbalancedParentheses { position: 0 }));
    }

    #[test]
    fn finish_requires_exactly_one_operand() {
        assert_eq!(Stacks::new().finish(), Err(BuildError::EmptyExpression));

        let mut stacks = Stacks::new();
        stacks.operands.push(Node::Leaf(2.0));
        stacks.operands.push(Node::Leaf(3.0));
        assert!(matches!(stacks.finish(), Err(BuildError::MalformedExpression { .. })));
    }
}
