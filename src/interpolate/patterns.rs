//! # Placeholder Patterns
//!
//! Regex patterns recognizing substitution points in template strings.
//!
//! A placeholder is `{identifier}` where the identifier is one or more word
//! characters. `\w` is Unicode-aware, so `{數量}` is a placeholder too. Braces
//! around anything else (`{}`, `{ msg }`, `{a-b}`) are plain text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a placeholder: `{msg}`
    ///
    /// Captures:
    /// - Group 1: placeholder identifier
    pub static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_matches() {
        let caps = PLACEHOLDER_RE.captures("內容重複：{msg}，請重新輸入").unwrap();
        assert_eq!(&caps[1], "msg");
        assert!(PLACEHOLDER_RE.is_match("{top_p}"));
        assert!(PLACEHOLDER_RE.is_match("{數量}"));
    }

    #[test]
    fn test_non_placeholders() {
        for text in ["{}", "{ msg }", "{a-b}", "{msg", "msg}"] {
            assert!(!PLACEHOLDER_RE.is_match(text), "{text:?} should not match");
        }
    }
}
