//! Digit normalization.

/// Strip every character that is not an ASCII decimal digit and return the
/// remaining digits as numeric values, in order.
///
/// Never fails: an input without digits yields an empty vector.
///
/// # Examples
/// ```
/// use impress_isbn::normalize;
/// assert_eq!(normalize("0-201 5"), vec![0, 2, 0, 1, 5]);
/// assert!(normalize("no digits").is_empty());
/// ```
pub fn normalize(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Render a digit sequence back to its decimal string form.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
