use thiserror::Error;

/// Represents all errors that can occur while validating, tokenizing or
/// building an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The expression contains a character outside the allowed set.
    #[error("The expression contains an invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position in the raw expression.
        position:  usize,
    },
    /// A `)` has no matching `(`, or a `(` is never closed.
    #[error("Parentheses are not balanced (position {position}).")]
    UnbalancedParentheses {
        /// Zero-based position of the unmatched parenthesis.
        position: usize,
    },
    /// Nothing to build.
    #[error("Please enter an arithmetic expression.")]
    EmptyExpression,
    /// Operands and operators do not line up, e.g. `+5`, `5+` or `2(3)`.
    #[error("Malformed expression: {reason}.")]
    MalformedExpression {
        /// What went wrong during construction.
        reason: String,
    },
    /// A symbol was used as an operator but is not in the operator table.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The unrecognized symbol.
        symbol: char,
    },
    /// A numeric literal does not fit a finite floating-point value.
    #[error("Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
}

impl BuildError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedExpression { reason: reason.into() }
    }
}
