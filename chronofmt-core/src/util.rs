//! Decimal helper functions.

/// Ten raised to the provided exponent, as an unsigned integer.
///
/// ```rust
/// # use chronofmt_core::util::pow10;
/// assert_eq!(pow10(0), 1);
/// assert_eq!(pow10(3), 1_000);
/// assert_eq!(pow10(9), 1_000_000_000);
/// ```
///
/// # Panics
///
/// Panics if `exp` exceeds 18, as the result would not fit in the return type when interpreted as
/// a signed integer.
#[inline]
pub const fn pow10(exp: u8) -> u64 {
    assert!(exp <= 18);
    10_u64.pow(exp as u32)
}

/// Ten raised to the provided exponent, as a signed integer.
///
/// ```rust
/// # use chronofmt_core::util::pow10_i64;
/// assert_eq!(pow10_i64(2), 100);
/// ```
///
/// # Panics
///
/// Panics if `exp` exceeds 18.
#[inline]
pub const fn pow10_i64(exp: u8) -> i64 {
    pow10(exp) as i64
}

/// The number of decimal digits in the value. Zero is considered to have one digit.
///
/// ```rust
/// # use chronofmt_core::util::num_decimal_digits;
/// assert_eq!(num_decimal_digits(0), 1);
/// assert_eq!(num_decimal_digits(9), 1);
/// assert_eq!(num_decimal_digits(10), 2);
/// assert_eq!(num_decimal_digits(2_009), 4);
/// ```
#[inline]
pub const fn num_decimal_digits(value: u64) -> u8 {
    match value.checked_ilog10() {
        Some(digits) => digits as u8 + 1,
        None => 1,
    }
}
