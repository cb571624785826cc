use crate::{ast::Operator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two evaluated operands.
///
/// `^` raises `left` to the power `right` with `powf`; results that overflow
/// or are undefined (`inf`, `NaN`) are returned as they are.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` when dividing by `0.0` or `-0.0`.
///
/// # Example
/// ```
/// use exprtree::{ast::Operator, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(Operator::Pow, 2.0, 10.0).unwrap(), 1024.0);
/// assert!(apply(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    Ok(match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
        Pow => left.powf(right),
    })
}
