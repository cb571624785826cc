/// Numeric helpers.
///
/// Rendering of floating-point values for traversals and diagrams, and the
/// finiteness check applied to parsed literals.
pub mod num;
