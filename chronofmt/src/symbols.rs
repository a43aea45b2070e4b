//! Symbols controlling how numbers and signs are rendered for a locale.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::locale::Locale;

/// Process-wide cache of symbols, one entry per locale.
static CACHE: OnceLock<Mutex<Vec<Arc<FormatSymbols>>>> = OnceLock::new();

/// Lock the symbols cache, tolerating poisoning (the cache is always left consistent).
fn cache() -> MutexGuard<'static, Vec<Arc<FormatSymbols>>> {
    let mutex = CACHE.get_or_init(|| Mutex::new(Vec::new()));
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// The characters used when printing and parsing numeric values for a particular locale.
///
/// Instances are immutable. [`FormatSymbols::of`] returns a cached instance per locale, creating
/// standard ASCII symbols on first use; [`FormatSymbols::register`] installs custom symbols for a
/// locale whose numbering system differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSymbols {
    /// The character representing the digit zero. The following nine code points must be the
    /// digits one through nine in the locale's numbering system.
    zero_digit: char,
    /// The character representing a positive sign.
    positive_sign: char,
    /// The character representing a negative sign.
    negative_sign: char,
    /// The character separating the integer and fractional parts of a number.
    decimal_separator: char,
    /// The locale these symbols belong to.
    locale: Locale,
}

impl FormatSymbols {
    /// Create symbols from their parts.
    ///
    /// # Panics
    ///
    /// Panics if the ten code points starting at `zero_digit` are not all numeric characters, as
    /// digit arithmetic would otherwise produce garbage.
    pub fn new(
        locale: Locale,
        zero_digit: char,
        positive_sign: char,
        negative_sign: char,
        decimal_separator: char,
    ) -> Self {
        for offset in 0..10 {
            let digit = char::from_u32(zero_digit as u32 + offset);
            assert!(
                digit.is_some_and(char::is_numeric),
                "the ten code points starting at {zero_digit:?} must all be decimal digits",
            );
        }
        Self {
            zero_digit,
            positive_sign,
            negative_sign,
            decimal_separator,
            locale,
        }
    }

    /// Standard ASCII symbols (`0`, `+`, `-`, `.`) for the provided locale.
    #[inline]
    pub const fn standard(locale: Locale) -> Self {
        Self {
            zero_digit: '0',
            positive_sign: '+',
            negative_sign: '-',
            decimal_separator: '.',
            locale,
        }
    }

    /// The cached symbols for a locale, creating standard symbols if none have been registered.
    pub fn of(locale: &Locale) -> Arc<Self> {
        let mut entries = cache();
        if let Some(symbols) = entries.iter().find(|symbols| &symbols.locale == locale) {
            return Arc::clone(symbols);
        }
        let created = Arc::new(Self::standard(locale.clone()));
        entries.push(Arc::clone(&created));
        created
    }

    /// Install symbols for their locale, replacing any cached entry.
    pub fn register(symbols: Self) {
        let mut entries = cache();
        entries.retain(|cached| cached.locale != symbols.locale);
        entries.push(Arc::new(symbols));
    }

    /// The locale these symbols belong to.
    #[inline]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The character representing the digit zero.
    #[inline]
    pub const fn zero_digit(&self) -> char {
        self.zero_digit
    }

    /// The character representing a positive sign.
    #[inline]
    pub const fn positive_sign(&self) -> char {
        self.positive_sign
    }

    /// The character representing a negative sign.
    #[inline]
    pub const fn negative_sign(&self) -> char {
        self.negative_sign
    }

    /// The character separating the integer and fractional parts of a number.
    #[inline]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The character for a single digit value.
    ///
    /// # Panics
    ///
    /// Panics if `digit` exceeds nine.
    #[inline]
    pub fn digit_char(&self, digit: u8) -> char {
        assert!(digit <= 9);
        // The constructor verified that all ten code points exist.
        char::from_u32(self.zero_digit as u32 + u32::from(digit)).unwrap_or(self.zero_digit)
    }

    /// The numeric value of a digit character, or `None` if the character is not one of this
    /// locale's ten digits.
    #[inline]
    pub fn digit_value(&self, ch: char) -> Option<u8> {
        let offset = (ch as u32).checked_sub(self.zero_digit as u32)?;
        (offset < 10).then_some(offset as u8)
    }

    /// Translate a run of ASCII digits into this locale's digits.
    pub fn internationalize(&self, ascii_digits: &str) -> String {
        let mut out = String::with_capacity(ascii_digits.len());
        self.internationalize_into(ascii_digits, &mut out);
        out
    }

    /// Translate a run of ASCII digits into this locale's digits, appending to `out`.
    pub(crate) fn internationalize_into(&self, ascii_digits: &str, out: &mut String) {
        if self.zero_digit == '0' {
            out.push_str(ascii_digits);
            return;
        }
        for ch in ascii_digits.chars() {
            match ch.to_digit(10) {
                Some(digit) => out.push(self.digit_char(digit as u8)),
                None => out.push(ch),
            }
        }
    }
}
