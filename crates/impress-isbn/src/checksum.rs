//! ISBN-10 and ISBN-13 check digit algorithms.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use tracing::trace;

use crate::{normalize, IsbnError, Result};

/// Which ISBN flavor a computation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl IsbnKind {
    /// Number of payload digits the weighting loop consumes.
    pub fn payload_len(&self) -> usize {
        match self {
            Self::Isbn10 => 9,
            Self::Isbn13 => 12,
        }
    }

    /// Length of a complete identifier, check character included.
    pub fn full_len(&self) -> usize {
        self.payload_len() + 1
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Isbn10 => "ISBN-10",
            Self::Isbn13 => "ISBN-13",
        }
    }
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A computed check value.
///
/// `Ten` only ever comes out of the ISBN-10 algorithm and renders as `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    Digit(u8),
    Ten,
}

impl CheckDigit {
    /// Numeric value in `0..=10`.
    pub fn value(&self) -> u8 {
        match self {
            Self::Digit(d) => *d,
            Self::Ten => 10,
        }
    }

    /// Printable check character.
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Ten => 'X',
        }
    }

    /// Parse a supplied check character. `X`/`x` maps to `Ten`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self::Ten),
            _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for CheckDigit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the ISBN-10 check digit of `input`.
///
/// Only the first nine digits are weighed (10 down to 2); anything after
/// them, such as an existing check digit, is ignored.
///
/// # Examples
/// ```
/// use impress_isbn::{checksum10, CheckDigit};
/// assert_eq!(checksum10("0312168144").unwrap(), CheckDigit::Digit(4));
/// assert!(checksum10("").unwrap_err().is_insufficient());
/// ```
pub fn checksum10(input: &str) -> Result<CheckDigit> {
    checksum10_digits(&normalize(input))
}

/// Compute the ISBN-13 check digit of `input`.
///
/// Only the first twelve digits are weighed (alternating 1 and 3).
pub fn checksum13(input: &str) -> Result<CheckDigit> {
    checksum13_digits(&normalize(input))
}

/// ISBN-10 check digit over an already normalized digit sequence.
pub fn checksum10_digits(digits: &[u8]) -> Result<CheckDigit> {
    let payload = payload(IsbnKind::Isbn10, digits)?;

    let sum: u32 = payload
        .iter()
        .zip((2..=10u32).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    let check = (11 - sum % 11) % 11;
    trace!(sum, check, "isbn-10 weighted sum");

    Ok(if check == 10 {
        CheckDigit::Ten
    } else {
        CheckDigit::Digit(check as u8)
    })
}

/// ISBN-13 check digit over an already normalized digit sequence.
pub fn checksum13_digits(digits: &[u8]) -> Result<CheckDigit> {
    let payload = payload(IsbnKind::Isbn13, digits)?;

    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { u32::from(d) } else { u32::from(d) * 3 })
        .sum();
    let check = (10 - sum % 10) % 10;
    trace!(sum, check, "isbn-13 weighted sum");

    Ok(CheckDigit::Digit(check as u8))
}

/// Compute the check digit for `kind` over normalized digits.
pub fn checksum_digits(kind: IsbnKind, digits: &[u8]) -> Result<CheckDigit> {
    match kind {
        IsbnKind::Isbn10 => checksum10_digits(digits),
        IsbnKind::Isbn13 => checksum13_digits(digits),
    }
}

/// The leading digits the weighting loop consumes, or a length error.
fn payload(kind: IsbnKind, digits: &[u8]) -> Result<&[u8]> {
    digits
        .get(..kind.payload_len())
        .ok_or_else(|| IsbnError::short_input(kind, digits.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn10_known_values() {
        assert_eq!(checksum10("0-201-53992-6").unwrap(), CheckDigit::Digit(6));
        assert_eq!(checksum10("91-85668-01-X").unwrap(), CheckDigit::Ten);
        assert_eq!(checksum10("0312168144").unwrap(), CheckDigit::Digit(4));
        assert_eq!(checksum10("0-306-40615").unwrap(), CheckDigit::Digit(2));
    }

    #[test]
    fn isbn10_ignores_trailing_digits() {
        assert_eq!(checksum10("031216814").unwrap(), CheckDigit::Digit(4));
        assert_eq!(checksum10("0312168149999").unwrap(), CheckDigit::Digit(4));
    }

    #[test]
    fn isbn10_zero_check() {
        assert_eq!(checksum10("000000000").unwrap(), CheckDigit::Digit(0));
    }

    #[test]
    fn isbn10_short_input() {
        assert_eq!(
            checksum10("").unwrap_err(),
            IsbnError::Empty {
                kind: IsbnKind::Isbn10
            }
        );
        assert_eq!(
            checksum10("12345678").unwrap_err(),
            IsbnError::InsufficientDigits {
                kind: IsbnKind::Isbn10,
                required: 9,
                found: 8
            }
        );
    }

    #[test]
    fn isbn13_known_values() {
        assert_eq!(checksum13("978-1-61262-294-1").unwrap(), CheckDigit::Digit(1));
        assert_eq!(checksum13("9780062802187").unwrap(), CheckDigit::Digit(7));
        assert_eq!(checksum13("978-0-321-12521").unwrap(), CheckDigit::Digit(7));
    }

    #[test]
    fn isbn13_wraps_ten_to_zero() {
        assert_eq!(checksum13("000000000000").unwrap(), CheckDigit::Digit(0));
    }

    #[test]
    fn isbn13_short_input() {
        let err = checksum13("978-1-61262-29").unwrap_err();
        assert!(err.is_insufficient());
        assert!(checksum13("no digits here").unwrap_err().is_insufficient());
    }

    #[test]
    fn check_digit_chars() {
        assert_eq!(CheckDigit::Ten.to_string(), "X");
        assert_eq!(CheckDigit::Digit(7).as_char(), '7');
        assert_eq!(CheckDigit::from_char('x'), Some(CheckDigit::Ten));
        assert_eq!(CheckDigit::from_char('3'), Some(CheckDigit::Digit(3)));
        assert_eq!(CheckDigit::from_char('-'), None);
        assert_eq!(CheckDigit::Ten.value(), 10);
    }

    #[test]
    fn check_digit_serializes_as_string() {
        assert_eq!(serde_json::to_string(&CheckDigit::Ten).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&CheckDigit::Digit(4)).unwrap(), "\"4\"");
    }
}
