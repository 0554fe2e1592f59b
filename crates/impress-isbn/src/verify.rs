//! Validation of complete identifiers against their own check character.

use tracing::warn;

use crate::{checksum_digits, CheckDigit, IsbnError, IsbnKind, Result};

/// Digits and check letters of `input`, in order, with `x` upper-cased.
///
/// Everything else (hyphens, spaces, labels) is dropped.
pub fn check_symbols(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Payload digits and the character that follows them.
#[derive(Debug, Default)]
struct CheckScan {
    payload: Vec<u8>,
    /// A check letter seen before the payload was complete
    stray: Option<char>,
    /// First non-separator character after the payload
    after: Option<char>,
}

fn is_separator(c: char) -> bool {
    c == '-' || c.is_whitespace()
}

/// Collect the first `payload_len` digits, starting at the first digit of
/// `input`, and the character that follows them.
///
/// Text before the first digit (labels like `ISBN` or `Oxford`) is ignored.
fn scan(kind: IsbnKind, input: &str) -> CheckScan {
    let payload_len = kind.payload_len();
    let mut scan = CheckScan::default();
    let mut chars = input.chars().skip_while(|c| !c.is_ascii_digit());

    for c in chars.by_ref() {
        if let Some(d) = c.to_digit(10) {
            scan.payload.push(d as u8);
            if scan.payload.len() == payload_len {
                break;
            }
        } else if matches!(c, 'X' | 'x') && scan.stray.is_none() {
            scan.stray = Some(c.to_ascii_uppercase());
        }
    }

    if scan.payload.len() == payload_len {
        scan.after = chars.find(|c| !is_separator(*c));
    }
    scan
}

/// The check character supplied right after the payload digits, if any.
///
/// Returns `None` when the input stops at the payload, when the next
/// character cannot be a check character, or when a check letter appears
/// inside the payload itself.
pub fn supplied_check(kind: IsbnKind, input: &str) -> Option<char> {
    let scan = scan(kind, input);
    if scan.stray.is_some() {
        return None;
    }
    scan.after
        .filter(|c| CheckDigit::from_char(*c).is_some())
        .map(|c| c.to_ascii_uppercase())
}

/// Verify a complete identifier of the given kind.
///
/// The character right after the payload is the supplied check character.
/// `X` is accepted there for ISBN-10 only. On success the (matching) check
/// digit is returned.
pub fn verify(kind: IsbnKind, input: &str) -> Result<CheckDigit> {
    let scan = scan(kind, input);

    if let Some(found) = scan.stray {
        return Err(IsbnError::InvalidPayloadCharacter { found });
    }
    if scan.payload.len() < kind.payload_len() {
        return Err(IsbnError::short_input(kind, scan.payload.len()));
    }

    let found = match scan.after {
        Some(c) => c.to_ascii_uppercase(),
        None => {
            return Err(IsbnError::InsufficientDigits {
                kind,
                required: kind.full_len(),
                found: scan.payload.len(),
            })
        }
    };
    let supplied = match (kind, CheckDigit::from_char(found)) {
        (IsbnKind::Isbn13, Some(CheckDigit::Ten)) | (_, None) => {
            return Err(IsbnError::InvalidCheckCharacter { found })
        }
        (_, Some(check)) => check,
    };

    let expected = checksum_digits(kind, &scan.payload)?;
    if supplied != expected {
        warn!(%kind, %expected, %found, "check digit mismatch");
        return Err(IsbnError::CheckDigitMismatch {
            kind,
            expected: expected.as_char(),
            found,
        });
    }

    Ok(expected)
}

/// Verify a complete ISBN-10 (last character `0`-`9` or `X`).
pub fn verify10(input: &str) -> Result<CheckDigit> {
    verify(IsbnKind::Isbn10, input)
}

/// Verify a complete ISBN-13.
pub fn verify13(input: &str) -> Result<CheckDigit> {
    verify(IsbnKind::Isbn13, input)
}

/// Whether `isbn` is a well-formed ISBN-10 or ISBN-13 with a correct check
/// character. Separators and any label before the first digit are ignored.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_isbn(isbn: &str) -> bool {
    let body = isbn
        .find(|c: char| c.is_ascii_digit())
        .map_or("", |start| &isbn[start..]);
    match check_symbols(body).len() {
        10 => verify10(isbn).is_ok(),
        13 => verify13(isbn).is_ok(),
        _ => false,
    }
}
