/// Most significant digits kept from a fractional digit run. More than this
/// is beyond what an `f64` can resolve, and fits a `u64` exactly.
pub const MAX_FRACTION_DIGITS: usize = 19;

/// Counts the decimal digits of `value`. Zero has one digit.
///
/// ## Example
/// ```
/// use descalc::util::num::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(7), 1);
/// assert_eq!(digit_count(470), 3);
/// ```
#[must_use]
pub const fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Removes trailing decimal zeroes from `value`. Zero stays zero.
///
/// ## Example
/// ```
/// use descalc::util::num::strip_trailing_zeros;
///
/// assert_eq!(strip_trailing_zeros(3400), 34);
/// assert_eq!(strip_trailing_zeros(47), 47);
/// assert_eq!(strip_trailing_zeros(0), 0);
/// ```
#[must_use]
pub const fn strip_trailing_zeros(mut value: u64) -> u64 {
    while value != 0 && value % 10 == 0 {
        value /= 10;
    }
    value
}

/// Combines the two halves of a decimal literal `whole.fraction`.
///
/// The fraction is given as its significant digits and the number of zeroes
/// written between the dot and the first of them, so `.047` is
/// `(47, 1)`. The digits sit `digit_count(digits) + leading_zeros` places
/// right of the dot.
///
/// ## Parameters
/// - `whole`: The integer part.
/// - `digits`: The significant fractional digits, trailing zeroes stripped.
/// - `leading_zeros`: Zeroes between the dot and `digits`.
///
/// ## Example
/// ```
/// use descalc::util::num::ints_to_double;
///
/// // 12.34
/// assert!((ints_to_double(12.0, 34, 0) - 12.34).abs() < 1e-12);
/// // 1.047
/// assert!((ints_to_double(1.0, 47, 1) - 1.047).abs() < 1e-12);
/// // 0.00000000000000001
/// assert!((ints_to_double(0.0, 1, 16) - 1e-17).abs() < 1e-30);
/// // 5.0
/// assert_eq!(ints_to_double(5.0, 0, 3), 5.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn ints_to_double(whole: f64, digits: u64, leading_zeros: u32) -> f64 {
    if digits == 0 {
        return whole;
    }
    let places = digit_count(digits).saturating_add(leading_zeros);
    let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    whole + digits as f64 / scale
}

/// Returns whether `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use descalc::util::num::double_is_int;
///
/// assert!(double_is_int(1000.0));
/// assert!(!double_is_int(0.5));
/// assert!(!double_is_int(f64::NAN));
/// assert!(!double_is_int(f64::INFINITY));
/// assert!(!double_is_int(f64::NEG_INFINITY));
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn double_is_int(value: f64) -> bool {
    value.is_finite() && value == value.floor()
}
