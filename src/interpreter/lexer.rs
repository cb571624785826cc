use logos::Logos;
use tracing::warn;

use crate::{error::BuildError, interpreter::parser::core::ParseResult, util::num::parse_finite};

/// Represents a lexical token of an arithmetic expression.
///
/// Numbers are stored as parsed floating-point values; operators keep their
/// symbol so the tree builder can look it up in the operator table.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `+`, `-`, `*`, `/` or `^`
    #[regex(r"[-+*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Failure reported by the lexer for a single slice of input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matches the slice.
    #[default]
    UnexpectedCharacter,
    /// A digit run overflows to infinity.
    LiteralTooLarge,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if it is finite.
/// - `Err(LexError::LiteralTooLarge)`: If the literal overflows.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    parse_finite(lex.slice()).ok_or(LexError::LiteralTooLarge)
}

/// Splits an expression into tokens paired with their byte offset.
///
/// Characters no pattern matches are skipped with a warning instead of
/// failing; the validator is expected to have rejected them already.
///
/// # Errors
/// Returns `BuildError::LiteralTooLarge` if a numeric literal cannot be
/// represented as a finite `f64`.
///
/// # Example
/// ```
/// use exprtree::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1.5+2)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Number(1.5), 1),
///                 (Token::Operator('+'), 4),
///                 (Token::Number(2.0), 5),
///                 (Token::RParen, 6)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(LexError::LiteralTooLarge) => {
                return Err(BuildError::LiteralTooLarge { literal: lexer.slice().to_string() });
            },
            Err(LexError::UnexpectedCharacter) => {
                warn!(slice = lexer.slice(),
                      position = lexer.span().start,
                      "skipping unrecognized input");
            },
        }
    }

    Ok(tokens)
}
