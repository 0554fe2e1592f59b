//! Routing raw text to the ISBN-10 or ISBN-13 algorithm.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    checksum10, checksum13, checksum_digits, digits_to_string, normalize, supplied_check,
    CheckConfig, CheckDigit, IsbnError, IsbnKind, Result,
};

/// Digit count above which text is treated as an ISBN-13.
pub const ISBN13_THRESHOLD: usize = 10;

/// Pick the algorithm for a text holding `digit_count` digits.
pub fn dispatch_kind(digit_count: usize) -> IsbnKind {
    if digit_count > ISBN13_THRESHOLD {
        IsbnKind::Isbn13
    } else {
        IsbnKind::Isbn10
    }
}

/// Compute the check digit of whatever ISBN-like text the host hands over.
///
/// More than ten digits means ISBN-13, anything else ISBN-10. Short input is
/// an error rather than a guess.
///
/// # Examples
/// ```
/// use impress_isbn::verify_at_point;
/// assert_eq!(verify_at_point("0-201-53992-6").unwrap().to_string(), "6");
/// assert_eq!(verify_at_point("978-1-61262-294-1").unwrap().to_string(), "1");
/// assert!(verify_at_point("12-34").is_err());
/// ```
pub fn verify_at_point(raw_text: &str) -> Result<CheckDigit> {
    let digit_count = normalize(raw_text).len();
    let kind = dispatch_kind(digit_count);
    debug!(digit_count, %kind, "dispatching check digit computation");

    match kind {
        IsbnKind::Isbn10 => checksum10(raw_text),
        IsbnKind::Isbn13 => checksum13(raw_text),
    }
}

/// Outcome of checking one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub kind: IsbnKind,
    /// Payload digits the check digit was computed from.
    pub payload: String,
    pub check_digit: CheckDigit,
    /// Check character found after the payload, if the text carried one.
    pub supplied: Option<char>,
    /// Whether `supplied` agrees with `check_digit`.
    pub matches: Option<bool>,
}

impl Verification {
    /// Payload followed by the computed check character.
    pub fn canonical(&self) -> String {
        format!("{}{}", self.payload, self.check_digit)
    }

    /// One-line message for a status bar.
    pub fn summary(&self) -> String {
        match self.matches {
            Some(true) => format!("{} check digit: {} (ok)", self.kind, self.check_digit),
            Some(false) => format!(
                "{} check digit: {} (found {})",
                self.kind,
                self.check_digit,
                self.supplied.unwrap_or('?')
            ),
            None => format!("{} check digit: {}", self.kind, self.check_digit),
        }
    }
}

/// Check `raw_text` under `config`, producing a full report.
///
/// `config.kind` forces an algorithm; otherwise the digit count decides as in
/// [`verify_at_point`]. In strict mode a supplied check character that
/// disagrees with the computed one is an error.
pub fn verify_with_config(raw_text: &str, config: &CheckConfig) -> Result<Verification> {
    let digits = normalize(raw_text);
    let kind = config.kind.unwrap_or_else(|| dispatch_kind(digits.len()));
    debug!(digit_count = digits.len(), %kind, strict = config.strict, "verifying");

    let check_digit = checksum_digits(kind, &digits)?;
    let supplied = supplied_check(kind, raw_text);
    let matches = supplied.map(|c| CheckDigit::from_char(c) == Some(check_digit));

    if config.strict && matches == Some(false) {
        let found = supplied.unwrap_or('?');
        warn!(%kind, expected = %check_digit, %found, "supplied check digit disagrees");
        return Err(IsbnError::CheckDigitMismatch {
            kind,
            expected: check_digit.as_char(),
            found,
        });
    }

    Ok(Verification {
        kind,
        payload: digits_to_string(&digits[..kind.payload_len()]),
        check_digit,
        supplied,
        matches,
    })
}
