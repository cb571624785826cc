/// Renders a real number the way traversals and diagrams display it.
///
/// Uses the shortest representation that round-trips, and always keeps a
/// decimal part for integral values so `2` reads as `2.0`. Magnitudes from
/// `1e16` up and below `1e-4` switch to exponent form with a signed exponent
/// of at least two digits (`1e+16`, `2.5e-05`). Not-a-number reads `nan`.
///
/// ## Example
/// ```
/// use exprtree::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(0.25), "0.25");
/// assert_eq!(format_real(-3.5), "-3.5");
/// assert_eq!(format_real(1e16), "1e+16");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => shortest,
    }
}

/// Parses a decimal literal, rejecting values that do not fit a finite `f64`.
///
/// Accepts the literal forms the lexer produces: digits, optionally followed
/// by a point and more digits (`5.` included).
///
/// ## Returns
/// - `Some(f64)`: The parsed, finite value.
/// - `None`: If the slice is not a number or overflows to infinity.
///
/// ## Example
/// ```
/// use exprtree::util::num::parse_finite;
///
/// assert_eq!(parse_finite("5."), Some(5.0));
/// assert_eq!(parse_finite("12.5"), Some(12.5));
/// assert_eq!(parse_finite(&"9".repeat(400)), None);
/// ```
#[must_use]
pub fn parse_finite(literal: &str) -> Option<f64> {
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}
