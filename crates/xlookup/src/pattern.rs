//! Wildcard patterns for [`MatchMode::Wildcard`](crate::MatchMode::Wildcard).
//!
//! `*` matches any run of characters (including none), `?` matches exactly
//! one character, and everything else matches itself ignoring ASCII case.
//! A pattern must cover the whole candidate text.

use regex::Regex;

use crate::error::Result;
use crate::value::Value;

/// A wildcard pattern compiled once per search.
///
/// # Example
///
/// ```
/// use xlookup::WildcardPattern;
///
/// let pattern = WildcardPattern::compile("A*").unwrap();
/// assert!(pattern.is_match("Apple"));
/// assert!(pattern.is_match("a"));
/// assert!(!pattern.is_match("Banana"));
/// ```
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compiles a wildcard pattern.
    ///
    /// Returns an error only if the translated expression exceeds the regex
    /// engine's size limits.
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&translate(pattern))?;
        Ok(WildcardPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Compiles the canonical text of a lookup key.
    pub fn from_key(key: &Value) -> Result<Self> {
        Self::compile(&key.canonical_text())
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the whole of `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(&text.to_ascii_lowercase())
    }

    /// Matches against the canonical text of any value kind.
    pub fn matches_value(&self, value: &Value) -> bool {
        self.is_match(&value.canonical_text())
    }
}

/// Translates a wildcard pattern into an anchored regular expression over
/// ASCII-lowercased text.
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("(?s)^");
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            c => out.push_str(&regex::escape(
                c.to_ascii_lowercase().encode_utf8(&mut buf),
            )),
        }
    }
    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(p: &str) -> WildcardPattern {
        WildcardPattern::compile(p).unwrap()
    }

    #[test]
    fn star_matches_any_run() {
        let p = compile("A*");
        assert!(p.is_match("Apple"));
        assert!(p.is_match("A"));
        assert!(!p.is_match("Banana"));
        assert!(!p.is_match("bA"));
    }

    #[test]
    fn question_matches_one_char() {
        let p = compile("A?");
        assert!(p.is_match("Ax"));
        assert!(!p.is_match("Axy"));
        assert!(!p.is_match("A"));
    }

    #[test]
    fn question_counts_characters_not_bytes() {
        assert!(compile("caf?").is_match("café"));
    }

    #[test]
    fn anchored_at_both_ends() {
        let p = compile("an");
        assert!(p.is_match("AN"));
        assert!(!p.is_match("banana"));
        assert!(compile("*an*").is_match("banana"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let p = compile("a.b(c)+[d]$");
        assert!(p.is_match("A.B(C)+[D]$"));
        assert!(!p.is_match("axb(c)+[d]$"));
        assert!(compile(r"c:\*").is_match(r"C:\temp"));
    }

    #[test]
    fn star_spans_newlines() {
        assert!(compile("a*z").is_match("a\nz"));
    }

    #[test]
    fn empty_pattern_matches_empty_text() {
        let p = compile("");
        assert!(p.is_match(""));
        assert!(!p.is_match("x"));
    }

    #[test]
    fn matches_values_by_canonical_text() {
        let p = compile("1*");
        assert!(p.matches_value(&Value::Number(15.0)));
        assert!(p.matches_value(&Value::Number(1.5)));
        assert!(!p.matches_value(&Value::Number(21.0)));
        assert!(p.matches_value(&Value::Text("1x".into())));

        let p = WildcardPattern::from_key(&Value::Absent).unwrap();
        assert!(p.matches_value(&Value::Absent));
        assert!(p.matches_value(&Value::Text(String::new())));
        assert_eq!(p.as_str(), "");

        assert!(compile("t*").matches_value(&Value::Other("TRUE".into())));
    }
}
