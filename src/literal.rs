//! Parsing of read-list members.

use crate::CommandError;

/// Smallest value a read-list member may take.
pub const MIN_VALUE: u8 = 0;

/// Largest value a read-list member may take.
pub const MAX_VALUE: u8 = 127;

/// The token that ends a read-list.
pub const TERMINATOR: &str = "-1";

/// One classified read-list token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// A member in `MIN_VALUE..=MAX_VALUE`.
    Value(u8),
    /// The `-1` that ends the list.
    Terminator,
    /// Anything else, with the reason it was rejected.
    Invalid(CommandError),
}

impl Literal {
    /// Classifies `token`.
    ///
    /// Digits are accumulated left to right; the token is out of range as
    /// soon as the running value exceeds [`MAX_VALUE`], and not an integer
    /// at the first non-digit. A leading `-` is only accepted as the exact
    /// terminator `-1`; otherwise `-` and a digit is out of range, except
    /// for `-1` followed by a non-digit.
    ///
    /// This does not reject non-canonical spellings such as `007`; see
    /// [`Literal::parse_canonical`].
    ///
    /// # Examples
    ///
    /// ```
    /// use setcalc::{CommandError, Literal};
    ///
    /// assert_eq!(Literal::parse("42"), Literal::Value(42));
    /// assert_eq!(Literal::parse("-1"), Literal::Terminator);
    /// assert_eq!(Literal::parse("128"), Literal::Invalid(CommandError::OutOfRange));
    /// assert_eq!(Literal::parse("4x"), Literal::Invalid(CommandError::NotAnInteger));
    /// assert_eq!(Literal::parse("-7"), Literal::Invalid(CommandError::OutOfRange));
    /// assert_eq!(Literal::parse("-a"), Literal::Invalid(CommandError::NotAnInteger));
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token == TERMINATOR {
            return Self::Terminator;
        }
        if let Some(rest) = token.strip_prefix('-') {
            // A terminator with junk glued on is malformed, not a negative.
            return match rest.as_bytes() {
                [b'1', tail @ ..] if !tail.iter().all(u8::is_ascii_digit) => {
                    Self::Invalid(CommandError::NotAnInteger)
                }
                [b'0'..=b'9', ..] => Self::Invalid(CommandError::OutOfRange),
                _ => Self::Invalid(CommandError::NotAnInteger),
            };
        }
        if token.is_empty() {
            return Self::Invalid(CommandError::NotAnInteger);
        }

        let mut value = u32::from(MIN_VALUE);
        for b in token.bytes() {
            if !b.is_ascii_digit() {
                return Self::Invalid(CommandError::NotAnInteger);
            }
            value = value * 10 + u32::from(b - b'0');
            if value > u32::from(MAX_VALUE) {
                return Self::Invalid(CommandError::OutOfRange);
            }
        }
        match u8::try_from(value) {
            Ok(n) => Self::Value(n),
            Err(_) => Self::Invalid(CommandError::OutOfRange),
        }
    }

    /// Classifies `token` like [`Literal::parse`], additionally requiring a
    /// value to be spelled with exactly as many characters as its decimal
    /// form, so `007` is not an integer.
    ///
    /// ```
    /// use setcalc::{CommandError, Literal};
    ///
    /// assert_eq!(Literal::parse_canonical("7"), Literal::Value(7));
    /// assert_eq!(Literal::parse_canonical("0"), Literal::Value(0));
    /// assert_eq!(Literal::parse_canonical("007"), Literal::Invalid(CommandError::NotAnInteger));
    /// ```
    #[must_use]
    pub fn parse_canonical(token: &str) -> Self {
        match Self::parse(token) {
            Self::Value(n) if token.len() != count_digits(n) => {
                Self::Invalid(CommandError::NotAnInteger)
            }
            literal => literal,
        }
    }
}

/// Number of characters in the decimal spelling of `n`.
#[must_use]
pub const fn count_digits(mut n: u8) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
