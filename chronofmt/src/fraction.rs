//! Fixed-point decimal fractions.

use core::fmt;

use chronofmt_core::util::{num_decimal_digits, pow10};

/// The largest scale a fraction can carry.
pub(crate) const MAX_SCALE: u8 = 9;

/// A decimal fraction in the half-open interval `[0, 1)` with at most nine digits.
///
/// The value is `coefficient / 10^scale`. Instances are kept normalized: the coefficient has no
/// trailing zeros, and zero itself has scale zero. Nine digits are enough to express a nanosecond
/// of a second, the finest-grained fraction any field produces.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// The fraction's digits, read as an integer.
    coefficient: u32,
    /// The number of decimal places the coefficient is shifted right by.
    scale: u8,
}

impl Fraction {
    /// The zero fraction.
    pub const ZERO: Self = Self {
        coefficient: 0,
        scale: 0,
    };

    /// Create a fraction with the value `coefficient / 10^scale`, normalizing trailing zeros.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds nine or the value would not be below one.
    pub fn new(coefficient: u64, scale: u8) -> Self {
        assert!(scale <= MAX_SCALE, "fraction scale must not exceed nine");
        assert!(
            coefficient < pow10(scale),
            "fraction must be less than one",
        );
        let mut coefficient = coefficient as u32;
        let mut scale = scale;
        while scale > 0 && coefficient % 10 == 0 {
            coefficient /= 10;
            scale -= 1;
        }
        if coefficient == 0 {
            scale = 0;
        }
        Self { coefficient, scale }
    }

    /// The quotient `numerator / denominator` truncated to nine decimal places.
    ///
    /// # Panics
    ///
    /// Panics if the quotient is not in `[0, 1)` or the denominator would overflow the
    /// intermediate arithmetic.
    pub(crate) fn ratio(numerator: i64, denominator: i64) -> Self {
        assert!(denominator > 0 && numerator >= 0 && numerator < denominator);
        let scaled = (numerator as u64 * pow10(MAX_SCALE)) / denominator as u64;
        Self::new(scaled, MAX_SCALE)
    }

    /// The number of decimal places. Always zero for the zero fraction.
    #[inline]
    pub const fn scale(self) -> u8 {
        self.scale
    }

    /// The fraction's digits read as an integer.
    #[inline]
    pub const fn coefficient(self) -> u32 {
        self.coefficient
    }

    /// Whether this is the zero fraction.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.coefficient == 0
    }

    /// The fraction's digits at exactly `scale` decimal places, as ASCII.
    ///
    /// Rescaling truncates towards zero when narrowing and appends zeros when widening, so the
    /// result always has `scale` characters.
    pub(crate) fn digits(self, scale: u8) -> String {
        let coefficient = if scale >= self.scale {
            u64::from(self.coefficient) * pow10(scale - self.scale)
        } else {
            u64::from(self.coefficient) / pow10(self.scale - scale)
        };
        let mut out = String::with_capacity(usize::from(scale));
        for _ in num_decimal_digits(coefficient)..scale {
            out.push('0');
        }
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(coefficient));
        out
    }

    /// The product of this fraction and `multiplier`, truncated towards zero.
    ///
    /// Used to map a fraction back onto a field's value range.
    pub(crate) fn multiply_floor(self, multiplier: i64) -> i64 {
        debug_assert!(multiplier >= 0);
        let product = u64::from(self.coefficient) * multiplier as u64;
        (product / pow10(self.scale)) as i64
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else {
            write!(f, "0.{}", self.digits(self.scale))
        }
    }
}

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}
