//! ISBN extraction from surrounding text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{check_symbols, is_valid_isbn};

/// ISBN-like token with its byte range in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnToken {
    pub value: String,
    pub start_index: usize,
    pub end_index: usize,
}

lazy_static! {
    // Digit groups joined by single hyphens, optional trailing check letter
    static ref HYPHEN_TOKEN_REGEX: Regex = Regex::new(
        r"\d+(?:-\d+)*(?:-?[xX]\b)?"
    ).unwrap();

    // Digit groups joined by single spaces, optional trailing check letter
    static ref SPACED_TOKEN_REGEX: Regex = Regex::new(
        r"\d+(?: \d+)*(?: ?[xX]\b)?"
    ).unwrap();

    // ISBN regex: ISBN-10 and ISBN-13
    static ref ISBN_REGEX: Regex = Regex::new(
        r"(?i)(?:isbn(?:-1[03])?[:\s-]*)?(?P<isbn>(?:97[89][- ]?)?(?:\d[- ]?){9}[\dxX])"
    ).unwrap();
}

/// Return the ISBN-like token under byte `offset` of `text`.
///
/// A cursor sitting just past the last character still counts as being on
/// the token. Labels such as `ISBN:` are not part of the token.
///
/// # Examples
/// ```
/// use impress_isbn::token_at;
/// let text = "See ISBN 0-201-53992-6 for details";
/// assert_eq!(token_at(text, 12).unwrap().value, "0-201-53992-6");
/// assert!(token_at(text, 1).is_none());
/// ```
pub fn token_at(text: &str, offset: usize) -> Option<IsbnToken> {
    let hyphenated = covering(&HYPHEN_TOKEN_REGEX, text, offset);
    if let Some(token) = hyphenated.as_ref().filter(|t| t.value.contains('-')) {
        return Some(token.clone());
    }

    // Space-joined groups only count as one token when they add up to a
    // whole ISBN; otherwise neighbouring numbers (years, page counts) would
    // be glued on.
    covering(&SPACED_TOKEN_REGEX, text, offset)
        .filter(|t| matches!(check_symbols(&t.value).len(), 10 | 13))
        .or(hyphenated)
}

/// The match of `regex` whose range contains `offset`, end inclusive.
fn covering(regex: &Regex, text: &str, offset: usize) -> Option<IsbnToken> {
    regex
        .find_iter(text)
        .take_while(|m| m.start() <= offset)
        .find(|m| offset <= m.end())
        .map(|m| IsbnToken {
            value: m.as_str().to_string(),
            start_index: m.start(),
            end_index: m.end(),
        })
}

/// Extract ISBNs with a valid check character from text, normalized
pub fn extract_isbns(text: &str) -> Vec<String> {
    extract_isbn_tokens(text)
        .into_iter()
        .map(|token| token.value)
        .collect()
}

/// Extract ISBNs with their positions; `value` is normalized
pub fn extract_isbn_tokens(text: &str) -> Vec<IsbnToken> {
    ISBN_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.name("isbn"))
        .filter(|m| is_valid_isbn(m.as_str()))
        .map(|m| IsbnToken {
            value: normalize_isbn(m.as_str()),
            start_index: m.start(),
            end_index: m.end(),
        })
        .collect()
}

/// Normalize ISBN by removing hyphens and spaces
fn normalize_isbn(isbn: &str) -> String {
    check_symbols(isbn).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_at_cursor() {
        let text = "ISBN: 978-1-61262-294-1, reprinted";
        for offset in [6, 10, 23] {
            let token = token_at(text, offset).unwrap();
            assert_eq!(token.value, "978-1-61262-294-1");
            assert_eq!(token.start_index, 6);
            assert_eq!(token.end_index, 23);
        }
        assert!(token_at(text, 2).is_none());
        assert!(token_at(text, 30).is_none());
    }

    #[test]
    fn test_token_with_check_letter() {
        let text = "isbn 91-85668-01-X.";
        assert_eq!(token_at(text, 8).unwrap().value, "91-85668-01-X");
    }

    #[test]
    fn test_token_with_spaces() {
        let text = "[0 201 53992 6]";
        assert_eq!(token_at(text, 3).unwrap().value, "0 201 53992 6");
    }

    #[test]
    fn test_token_picks_right_run() {
        let text = "pages 12-14, 0312168144";
        assert_eq!(token_at(text, 7).unwrap().value, "12-14");
        assert_eq!(token_at(text, 16).unwrap().value, "0312168144");
    }

    #[test]
    fn test_token_ignores_adjacent_year() {
        let text = "Addison-Wesley 1994 0-201-53992-6";
        assert_eq!(token_at(text, 25).unwrap().value, "0-201-53992-6");
        assert_eq!(token_at(text, 16).unwrap().value, "1994");

        let text = "0-201-53992-6 1994 reprint";
        assert_eq!(token_at(text, 3).unwrap().value, "0-201-53992-6");
    }

    #[test]
    fn test_token_plain_digits_next_to_year() {
        assert_eq!(token_at("1994 0312168144", 8).unwrap().value, "0312168144");
        assert_eq!(token_at("0312168144 1994", 2).unwrap().value, "0312168144");
    }

    #[test]
    fn test_token_spaced_with_check_letter() {
        assert_eq!(token_at("(91 85668 01 X)", 5).unwrap().value, "91 85668 01 X");
    }

    #[test]
    fn test_token_empty_text() {
        assert!(token_at("", 0).is_none());
    }

    #[test]
    fn test_extract_isbns() {
        let text = "ISBN: 978-0-321-12521-7 and also 0-306-40615-2";
        let isbns = extract_isbns(text);
        assert_eq!(isbns.len(), 2);
        assert!(isbns.contains(&"9780321125217".to_string()));
        assert!(isbns.contains(&"0306406152".to_string()));
    }

    #[test]
    fn test_extract_skips_bad_checksum() {
        assert!(extract_isbns("ISBN 0-306-40615-1").is_empty());
    }

    #[test]
    fn test_extract_lowercase_x() {
        assert_eq!(extract_isbns("isbn-10: 080442957x"), vec!["080442957X"]);
    }

    #[test]
    fn test_extract_positions() {
        let tokens = extract_isbn_tokens("see 0306406152");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start_index, 4);
        assert_eq!(tokens[0].end_index, 14);
    }
}
