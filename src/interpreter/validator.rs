use crate::{error::BuildError, interpreter::parser::core::ParseResult};

/// Returns `true` if `c` may appear in an expression.
///
/// Allowed are ASCII digits, the decimal point, the five operators,
/// parentheses and spaces.
#[must_use]
pub const fn is_allowed_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')' | ' ')
}

/// Checks that every character of the expression is allowed.
///
/// # Errors
/// - `EmptyExpression` if the expression is empty.
/// - `InvalidCharacter` for the first character outside the allowed set,
///   with its zero-based character position.
pub fn check_characters(expression: &str) -> ParseResult<()> {
    if expression.is_empty() {
        return Err(BuildError::EmptyExpression);
    }

    match expression.chars().enumerate().find(|(_, c)| !is_allowed_char(*c)) {
        Some((position, character)) => {
            Err(BuildError::InvalidCharacter { character,
                                               position })
        },
        None => Ok(()),
    }
}

/// Checks that parentheses are properly nested and closed.
///
/// # Errors
/// Returns `UnbalancedParentheses` pointing at the first `)` without an open
/// partner, or at the innermost `(` still open at the end.
pub fn check_balance(expression: &str) -> ParseResult<()> {
    let mut open = Vec::new();

    for (position, c) in expression.chars().enumerate() {
        match c {
            '(' => open.push(position),
            ')' => {
                if open.pop().is_none() {
                    return Err(BuildError::UnbalancedParentheses { position });
                }
            },
            _ => {},
        }
    }

    match open.pop() {
        Some(position) => Err(BuildError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

/// Returns `true` if the whole expression consists of allowed characters.
///
/// # Example
/// ```
/// use exprtree::validate;
///
/// assert!(validate("(1 + 2.5) * 3"));
/// assert!(!validate("2 % 3"));
/// assert!(!validate(""));
/// ```
#[must_use]
pub fn validate(expression: &str) -> bool {
    check_characters(expression).is_ok()
}

/// Returns `true` if the parentheses of the expression are balanced.
///
/// # Example
/// ```
/// use exprtree::balanced;
///
/// assert!(balanced("(1+2)"));
/// assert!(!balanced("(1+2"));
/// assert!(!balanced("1+2)"));
/// ```
#[must_use]
pub fn balanced(expression: &str) -> bool {
    check_balance(expression).is_ok()
}

/// Removes all whitespace from the expression.
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_invalid_character() {
        assert_eq!(check_characters("1 + x * y"),
                   Err(BuildError::InvalidCharacter { character: 'x',
                                                      position:  4, }));
    }

    #[test]
    fn tabs_are_not_allowed() {
        assert!(!validate("1\t+ 2"));
    }

    #[test]
    fn closing_without_opening_points_at_the_closer() {
        assert_eq!(check_balance("1)+(2"),
                   Err(BuildError::UnbalancedParentheses { position: 1 }));
    }

    #[test]
    fn unclosed_opening_points_at_the_innermost() {
        assert_eq!(check_balance("((1+2)"),
                   Err(BuildError::UnbalancedParentheses { position: 0 }));
        assert_eq!(check_balance("(1+(2"),
                   Err(BuildError::UnbalancedParentheses { position: 3 }));
    }

    #[test]
    fn balance_ignores_other_characters() {
        assert!(balanced(""));
        assert!(balanced("abc"));
        assert!(balanced("((()))()"));
    }

    #[test]
    fn strips_every_space() {
        assert_eq!(strip_whitespace(" ( 1 +  2 ) "), "(1+2)");
    }
}
