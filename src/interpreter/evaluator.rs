/// Core evaluation logic.
///
/// Walks a tree in post-order and reduces it to a single number.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one of the five arithmetic operators to two evaluated operands,
/// including the division-by-zero check.
pub mod binary;
