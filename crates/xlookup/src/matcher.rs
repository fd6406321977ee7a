//! Equality and ordering rules across value kinds.
//!
//! Typing is strict: a number never equals text, even when the text spells
//! the same number, and `Other` values never equal anything.

use std::cmp::Ordering;

use crate::value::Value;

/// Two numbers closer than this are equal.
pub const NUMERIC_TOLERANCE: f64 = 1e-9;

/// Returns `true` if `candidate` equals `key`.
///
/// | key \ candidate | Number | Text | Absent | Other |
/// |---|---|---|---|---|
/// | Number | within [`NUMERIC_TOLERANCE`] | no | no | no |
/// | Text | ASCII case-insensitive | no | no | no |
/// | Absent | no | no | yes | no |
/// | Other | no | no | no | no |
pub fn is_match(key: &Value, candidate: &Value) -> bool {
    match (key, candidate) {
        (Value::Absent, Value::Absent) => true,
        (Value::Text(a), Value::Text(b)) => a.eq_ignore_ascii_case(b),
        (Value::Number(a), Value::Number(b)) => (a - b).abs() < NUMERIC_TOLERANCE,
        _ => false,
    }
}

/// Compares two values for approximate matching.
///
/// Only numbers are ordered. Returns `None` for any other pair, or when
/// either number is NaN; such candidates are skipped by nearest-value
/// scans.
pub fn compare_numbers(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        _ => None,
    }
}

/// Compares two strings byte-wise after ASCII lowercasing.
pub(crate) fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Position of a value kind in the sort order binary search assumes:
/// numbers, then text, then other values, with absent values last.
pub(crate) fn sort_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::Text(_) => 1,
        Value::Other(_) => 2,
        Value::Absent => 3,
    }
}

/// Returns `true` if `candidate` sorts strictly before `key` and does not
/// match it.
///
/// Over a range sorted ascending this predicate holds for a prefix and
/// fails for the rest, which is what binary search partitions on.
pub(crate) fn sorts_before(candidate: &Value, key: &Value) -> bool {
    match sort_rank(candidate).cmp(&sort_rank(key)) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => match (candidate, key) {
            (Value::Number(c), Value::Number(k)) => c < k && !is_match(candidate, key),
            (Value::Text(c), Value::Text(k)) => cmp_ignore_ascii_case(c, k) == Ordering::Less,
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn absent_matches_only_absent() {
        assert!(is_match(&Value::Absent, &Value::Absent));
        assert!(!is_match(&Value::Absent, &Value::Number(0.0)));
        assert!(!is_match(&Value::Absent, &text("")));
        assert!(!is_match(&text(""), &Value::Absent));
    }

    #[test]
    fn text_is_case_insensitive() {
        assert!(is_match(&text("apple"), &text("APPLE")));
        assert!(is_match(&text("ApPlE"), &text("aPpLe")));
        assert!(!is_match(&text("apple"), &text("apples")));
    }

    #[test]
    fn text_folding_is_ascii_only() {
        assert!(is_match(&text("café"), &text("CAFé")));
        assert!(!is_match(&text("é"), &text("É")));
    }

    #[test]
    fn numbers_within_tolerance() {
        assert!(is_match(&Value::Number(0.3), &Value::Number(0.1 + 0.2)));
        assert!(is_match(&Value::Number(5.0), &Value::Number(5.0 + 1e-10)));
        assert!(!is_match(&Value::Number(5.0), &Value::Number(5.0 + 1e-8)));
        assert!(!is_match(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    }

    #[test]
    fn mixed_kinds_never_match() {
        assert!(!is_match(&text("1"), &Value::Number(1.0)));
        assert!(!is_match(&Value::Number(1.0), &text("1")));
        assert!(!is_match(&Value::Other("x".into()), &Value::Other("x".into())));
        assert!(!is_match(&text("TRUE"), &Value::Other("TRUE".into())));
    }

    #[test]
    fn ordering_only_over_numbers() {
        assert_eq!(
            compare_numbers(&Value::Number(1.0), &Value::Number(2.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_numbers(&Value::Number(2.0), &Value::Number(1.0)),
            Some(Ordering::Greater)
        );
        assert_eq!(compare_numbers(&text("a"), &text("b")), None);
        assert_eq!(compare_numbers(&Value::Number(1.0), &Value::Absent), None);
        assert_eq!(
            compare_numbers(&Value::Number(f64::NAN), &Value::Number(1.0)),
            None
        );
    }

    #[test]
    fn ascii_case_insensitive_ordering() {
        assert_eq!(cmp_ignore_ascii_case("apple", "BANANA"), Ordering::Less);
        assert_eq!(cmp_ignore_ascii_case("Pear", "pear"), Ordering::Equal);
        assert_eq!(cmp_ignore_ascii_case("b", "A"), Ordering::Greater);
        assert_eq!(cmp_ignore_ascii_case("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn sort_rank_order() {
        assert!(sort_rank(&Value::Number(9e9)) < sort_rank(&text("")));
        assert!(sort_rank(&text("zzz")) < sort_rank(&Value::Other(String::new())));
        assert!(sort_rank(&Value::Other(String::new())) < sort_rank(&Value::Absent));
    }

    #[test]
    fn sorts_before_partitions() {
        let key = Value::Number(5.0);
        assert!(sorts_before(&Value::Number(4.0), &key));
        assert!(!sorts_before(&Value::Number(5.0), &key));
        // Within tolerance counts as a match, not as smaller
        assert!(!sorts_before(&Value::Number(5.0 - 1e-12), &key));
        assert!(!sorts_before(&Value::Number(6.0), &key));
        assert!(!sorts_before(&text("a"), &key));

        let key = text("m");
        assert!(sorts_before(&Value::Number(100.0), &key));
        assert!(sorts_before(&text("A"), &key));
        assert!(!sorts_before(&text("M"), &key));
        assert!(!sorts_before(&Value::Absent, &key));

        assert!(!sorts_before(&Value::Absent, &Value::Absent));
    }
}
